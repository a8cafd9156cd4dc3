//! Submission boundary for booking requests

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::SubmissionError;

use super::types::SubmissionPayload;

/// Default simulated round-trip delay in milliseconds
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

/// Boundary through which the flow delivers an accepted draft
///
/// Implementations own transport, retries and timeouts; the flow only
/// distinguishes success from failure and holds the returned error for the
/// failure screen.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Delivers the request to the backend
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError>;
}

/// Gateway standing in for the real backend
///
/// Sleeps for a fixed delay and accepts every request, which matches the
/// app's behavior while no request backend exists.
#[derive(Debug, Clone)]
pub struct SimulatedSubmissionGateway {
    delay: Duration,
}

impl SimulatedSubmissionGateway {
    /// Creates a gateway with the default delay
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS))
    }

    /// Creates a gateway with an explicit delay
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmissionGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedSubmissionGateway {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
