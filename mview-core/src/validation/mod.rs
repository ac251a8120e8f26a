//! Validation utilities for views and compressed structures
//!
//! This module contains pure validation functions with no storage
//! dependencies. All functions are arithmetic checks on extents and array
//! layouts.

pub mod bounds;
pub mod layout;

pub use bounds::{
    checked_cell_count, validate_coordinate, validate_product, validate_repetitions,
    validate_square,
};
pub use layout::validate_compressed_layout;
