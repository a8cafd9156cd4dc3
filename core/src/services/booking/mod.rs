//! Booking request workflow module
//!
//! This module drives the request flow behind every detail screen:
//! - Draft capture with per-category field validation
//! - The standard-tier fee prompt and the premium bypass
//! - Confirmation summary, asynchronous submission, success and failure
//! - At most one submission per draft
//!
//! One parameterized flow replaces per-screen copies of this logic. A screen
//! instantiates it with its booking context, the signed-in user's tier, the
//! category's rule set, the offer catalog, and a submission gateway.

mod config;
mod gateway;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::{BookingConfig, DEFAULT_STANDARD_FEE};
pub use gateway::{SimulatedSubmissionGateway, SubmissionGateway, DEFAULT_SUBMIT_DELAY_MS};
pub use service::BookingFlow;
pub use types::{BookingContext, RequestSummary, SubmissionPayload};
