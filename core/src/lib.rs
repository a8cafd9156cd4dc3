//! # BookEasy Core
//!
//! Core business logic and domain layer for the BookEasy mobile app.
//! This crate contains the catalog domain entities, the listing search filter,
//! the per-category field validator, the tier offer resolver, the booking
//! request workflow, and the favorites store boundary that together form the
//! foundation of the application.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
