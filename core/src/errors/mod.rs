//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{BookingError, SubmissionError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Field validation failures are not errors; they travel as
/// `ValidationErrors` data back to the invoking screen.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

pub type DomainResult<T> = Result<T, DomainError>;
