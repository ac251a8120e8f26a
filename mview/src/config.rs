//! Sparse builder configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How repeated `set` calls at one coordinate are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicatePolicy {
    /// Add into the existing entry; a sum of exactly zero removes it
    #[default]
    Sum,
    /// Replace the existing entry; writing zero removes it
    LastWins,
    /// Record every call as an independent triplet
    Keep,
}

/// Configuration for [`SparseBuilder`](crate::SparseBuilder)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BuilderConfig {
    /// Policy for repeated coordinates
    pub duplicate_policy: DuplicatePolicy,
    /// Expected number of non-zeros, used to pre-size storage
    pub capacity: usize,
    /// Sort every major line by minor index on build
    pub sorted_indices: bool,
}

impl BuilderConfig {
    /// Create config with an expected non-zero count
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Set the duplicate policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Request sorted minor indices in the built container
    pub fn with_sorted_indices(mut self, sorted: bool) -> Self {
        self.sorted_indices = sorted;
        self
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn sorted_indices(&self) -> bool {
        self.sorted_indices
    }

    /// Capacity hint for an `nrows x ncols` matrix at an expected density
    pub fn capacity_for_density(nrows: usize, ncols: usize, density: f64) -> usize {
        let cells = nrows.saturating_mul(ncols) as f64;
        (cells * density.clamp(0.0, 1.0)).ceil() as usize
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Sum,
            capacity: 0,
            sorted_indices: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chaining() {
        let config = BuilderConfig::with_capacity(64)
            .with_duplicate_policy(DuplicatePolicy::LastWins)
            .with_sorted_indices(true);

        assert_eq!(config.capacity(), 64);
        assert_eq!(config.duplicate_policy(), DuplicatePolicy::LastWins);
        assert!(config.sorted_indices());

        let default = BuilderConfig::default();
        assert_eq!(default.duplicate_policy(), DuplicatePolicy::Sum);
        assert!(!default.sorted_indices());
    }

    #[test]
    fn test_capacity_for_density() {
        assert_eq!(BuilderConfig::capacity_for_density(100, 100, 0.01), 100);
        assert_eq!(BuilderConfig::capacity_for_density(3, 3, 2.0), 9);
        assert_eq!(BuilderConfig::capacity_for_density(0, 10, 0.5), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = BuilderConfig::default().with_duplicate_policy(DuplicatePolicy::Keep);
        let json = serde_json::to_string(&config).unwrap();
        let restored: BuilderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
