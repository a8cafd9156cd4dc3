//! Shared utilities for the BookEasy mobile core
//!
//! This crate provides functionality that is independent of the booking
//! domain and usable from any layer:
//! - The ordered-token search predicate behind every listing filter
//! - Field-level validation error collection and reusable format checks

pub mod utils;

// Re-export commonly used items at crate root
pub use utils::{search, validation};
pub use utils::validation::{FieldError, ValidationErrors};
