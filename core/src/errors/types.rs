//! Error types for the booking workflow and the submission boundary
//!
//! Messages are English reference text; the presentation layer maps error
//! variants to localized UI copy.

use thiserror::Error;

use crate::domain::value_objects::FlowState;

/// Booking workflow misuse errors
///
/// Returned when an action is triggered in a state that does not offer it.
/// These indicate a UI wiring bug, not a user mistake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Action '{action}' is not available in state '{state}'")]
    InvalidAction {
        action: &'static str,
        state: FlowState,
    },

    #[error("A submission is already in flight")]
    SubmissionInFlight,
}

/// Submission gateway errors
///
/// Raised by [`SubmissionGateway`](crate::services::booking::SubmissionGateway)
/// implementations; the flow surfaces them as the `Failed` state with a
/// manual retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Network unavailable")]
    NetworkUnavailable,

    #[error("Request rejected: {reason}")]
    Rejected { reason: String },

    #[error("Service temporarily unavailable")]
    ServiceUnavailable,
}
