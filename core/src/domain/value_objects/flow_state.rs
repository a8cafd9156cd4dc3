//! Observable phases of the booking request workflow.

use serde::Serialize;
use std::fmt;

/// Represents the resting state of a booking flow between user actions
///
/// Validation and the tier gate run synchronously inside the request action,
/// so the only states a screen can observe are the ones below. `Submitting`
/// is held across the asynchronous gateway call; `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    /// Form visible, draft editable
    Draft,
    /// Standard-tier fee sheet shown, awaiting a decision
    PaymentPrompt,
    /// Summary shown, awaiting final confirmation
    Confirming,
    /// Submission in flight; the trigger action is disabled
    Submitting,
    /// Submission accepted; confirmation code on display
    Success,
    /// Submission rejected; retry and edit are offered
    Failed,
    /// Flow finished or abandoned; the screen unwinds
    Closed,
}

impl FlowState {
    /// Returns the state as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowState::Draft => "draft",
            FlowState::PaymentPrompt => "payment_prompt",
            FlowState::Confirming => "confirming",
            FlowState::Submitting => "submitting",
            FlowState::Success => "success",
            FlowState::Failed => "failed",
            FlowState::Closed => "closed",
        }
    }

    /// Checks if no further transitions are possible from this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Closed)
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
