//! Booking flow state machine driving every request screen.

use std::sync::Arc;

use be_shared::utils::validation::ValidationErrors;

use crate::domain::entities::{RequestDraft, RequestRecord};
use crate::domain::value_objects::{FlowState, Tier};
use crate::errors::{BookingError, DomainResult, SubmissionError};
use crate::services::offers::OfferCatalog;
use crate::services::validation::{FieldRuleSet, FieldValidator};

use super::config::BookingConfig;
use super::gateway::SubmissionGateway;
use super::types::{BookingContext, RequestSummary, SubmissionPayload};

/// State machine behind a "Request / Book Now" screen
///
/// One instance exists per screen and owns the draft exclusively. Wrong-state
/// calls return [`BookingError::InvalidAction`]; validation failures are
/// surfaced as data through [`validation_errors`](Self::validation_errors),
/// never as errors. The flow guarantees at most one submission per draft:
/// while a submission is in flight the triggering action is refused with
/// [`BookingError::SubmissionInFlight`] and no second record can be produced.
///
/// Transitions:
/// - `Draft` --begin_request--> `Draft` (validation errors),
///   `PaymentPrompt` (standard tier) or `Confirming` (premium tier)
/// - `PaymentPrompt` --dismiss_payment--> `Draft`
/// - `PaymentPrompt` --accept_fee--> `Confirming`
/// - `PaymentPrompt` --leave_for_upgrade--> `Closed`
/// - `Confirming` --edit--> `Draft`
/// - `Confirming` --confirm--> `Submitting` --> `Success` | `Failed`
/// - `Failed` --retry_submission--> `Submitting`; --edit--> `Draft`
/// - `Success` --acknowledge--> `Closed`
pub struct BookingFlow<G: SubmissionGateway> {
    context: BookingContext,
    tier: Tier,
    validator: FieldValidator,
    catalog: Arc<OfferCatalog>,
    gateway: Arc<G>,
    config: BookingConfig,
    state: FlowState,
    draft: RequestDraft,
    validation_errors: ValidationErrors,
    record: Option<RequestRecord>,
    submission_error: Option<SubmissionError>,
}

impl<G: SubmissionGateway> BookingFlow<G> {
    /// Creates a flow in the `Draft` state with an empty draft
    ///
    /// # Arguments
    /// * `context` - Where the request is raised from (listing or category)
    /// * `tier` - The signed-in user's tier, resolved by the host app
    /// * `rules` - Required-field rule set for this screen
    /// * `catalog` - Offer tables shared across screens
    /// * `gateway` - Submission boundary
    /// * `config` - Fee configuration
    pub fn new(
        context: BookingContext,
        tier: Tier,
        rules: FieldRuleSet,
        catalog: Arc<OfferCatalog>,
        gateway: Arc<G>,
        config: BookingConfig,
    ) -> Self {
        Self {
            context,
            tier,
            validator: FieldValidator::new(rules),
            catalog,
            gateway,
            config,
            state: FlowState::Draft,
            draft: RequestDraft::new(),
            validation_errors: ValidationErrors::new(),
            record: None,
            submission_error: None,
        }
    }

    /// Returns the current resting state
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Returns the tier the flow was instantiated with
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Returns the booking context
    pub fn context(&self) -> &BookingContext {
        &self.context
    }

    /// Returns the draft for display
    pub fn draft(&self) -> &RequestDraft {
        &self.draft
    }

    /// Mutable access to the form fields, available while drafting
    pub fn draft_mut(&mut self) -> DomainResult<&mut RequestDraft> {
        self.require_state(FlowState::Draft, "edit_draft")?;
        Ok(&mut self.draft)
    }

    /// Returns the outcome of the most recent validation pass
    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.validation_errors
    }

    /// Returns the record of the accepted request, once submitted
    pub fn record(&self) -> Option<&RequestRecord> {
        self.record.as_ref()
    }

    /// Returns the gateway error behind the `Failed` state, if any
    pub fn submission_error(&self) -> Option<&SubmissionError> {
        self.submission_error.as_ref()
    }

    /// Returns the fee this request will charge, in whole currency units
    pub fn request_fee(&self) -> u32 {
        match self.tier {
            Tier::Standard => self.config.standard_request_fee,
            Tier::Premium => 0,
        }
    }

    /// Resolves the offer lines for this screen and the flow's tier
    pub fn offers(&self) -> Vec<String> {
        self.catalog.resolve_with_override(
            self.context.offer_block(self.tier),
            self.context.category,
            self.context.service_type.as_deref(),
            self.tier,
        )
    }

    /// Validates the draft and, if it passes, moves toward submission
    ///
    /// On validation errors the flow stays in `Draft` and the full error set
    /// replaces the previous one, so the screen surfaces every problem at
    /// once. On success, standard-tier flows stop at `PaymentPrompt` while
    /// premium flows proceed straight to `Confirming`.
    pub fn begin_request(&mut self) -> DomainResult<FlowState> {
        self.require_state(FlowState::Draft, "begin_request")?;

        let errors = self.validator.validate(&self.draft);
        if errors.has_errors() {
            tracing::info!(
                category = %self.context.category,
                error_count = errors.len(),
                event = "booking_validation_failed",
                "Draft failed validation"
            );
            self.validation_errors = errors;
            return Ok(self.state);
        }
        self.validation_errors = errors;

        self.state = if self.tier.is_premium() {
            FlowState::Confirming
        } else {
            FlowState::PaymentPrompt
        };
        tracing::info!(
            category = %self.context.category,
            tier = %self.tier,
            state = %self.state,
            event = "booking_request_started",
            "Draft validated"
        );
        Ok(self.state)
    }

    /// Dismisses the fee prompt and returns to the form, fields retained
    pub fn dismiss_payment(&mut self) -> DomainResult<FlowState> {
        self.require_state(FlowState::PaymentPrompt, "dismiss_payment")?;
        self.state = FlowState::Draft;
        tracing::info!(
            category = %self.context.category,
            event = "booking_payment_dismissed",
            "Fee prompt dismissed"
        );
        Ok(self.state)
    }

    /// Accepts the request fee and proceeds to the summary
    pub fn accept_fee(&mut self) -> DomainResult<FlowState> {
        self.require_state(FlowState::PaymentPrompt, "accept_fee")?;
        self.state = FlowState::Confirming;
        tracing::info!(
            category = %self.context.category,
            fee = self.request_fee(),
            event = "booking_fee_accepted",
            "Request fee accepted"
        );
        Ok(self.state)
    }

    /// Abandons the flow toward the upgrade screen, discarding the draft
    ///
    /// Navigation to the upgrade flow itself is the caller's job; nothing
    /// comes back from it into this flow.
    pub fn leave_for_upgrade(&mut self) -> DomainResult<FlowState> {
        self.require_state(FlowState::PaymentPrompt, "leave_for_upgrade")?;
        self.draft.reset();
        self.state = FlowState::Closed;
        tracing::info!(
            category = %self.context.category,
            event = "booking_left_for_upgrade",
            "Flow abandoned toward upgrade"
        );
        Ok(self.state)
    }

    /// Returns the confirmation summary, available while confirming
    pub fn summary(&self) -> DomainResult<RequestSummary> {
        self.require_state(FlowState::Confirming, "summary")?;
        Ok(RequestSummary {
            draft: self.draft.clone(),
            tier: self.tier,
            fee: self.request_fee(),
        })
    }

    /// Returns to the form with all fields retained
    ///
    /// Available from the summary and from a failed submission.
    pub fn edit(&mut self) -> DomainResult<FlowState> {
        if !matches!(self.state, FlowState::Confirming | FlowState::Failed) {
            return Err(BookingError::InvalidAction {
                action: "edit",
                state: self.state,
            }
            .into());
        }
        self.submission_error = None;
        self.state = FlowState::Draft;
        tracing::info!(
            category = %self.context.category,
            event = "booking_edit_resumed",
            "Returned to the form"
        );
        Ok(self.state)
    }

    /// Submits the confirmed request through the gateway
    ///
    /// Moves to `Submitting` for the duration of the gateway call, then to
    /// `Success` with a fresh [`RequestRecord`] or to `Failed` with the
    /// gateway error retained. A gateway failure is a state, not an `Err`:
    /// the error return is reserved for wrong-state misuse, including
    /// re-triggering while a submission is in flight.
    pub async fn confirm(&mut self) -> DomainResult<FlowState> {
        if self.state == FlowState::Submitting {
            return Err(BookingError::SubmissionInFlight.into());
        }
        self.require_state(FlowState::Confirming, "confirm")?;
        self.submit().await
    }

    /// Retries a failed submission with the same draft
    pub async fn retry_submission(&mut self) -> DomainResult<FlowState> {
        if self.state == FlowState::Submitting {
            return Err(BookingError::SubmissionInFlight.into());
        }
        self.require_state(FlowState::Failed, "retry_submission")?;
        tracing::info!(
            category = %self.context.category,
            event = "booking_submission_retried",
            "Retrying failed submission"
        );
        self.submit().await
    }

    /// Acknowledges the success screen and closes the flow
    ///
    /// The draft is cleared back to all-empty; the record stays readable
    /// until the flow is dropped.
    pub fn acknowledge(&mut self) -> DomainResult<FlowState> {
        self.require_state(FlowState::Success, "acknowledge")?;
        self.draft.reset();
        self.validation_errors = ValidationErrors::new();
        self.state = FlowState::Closed;
        tracing::info!(
            category = %self.context.category,
            event = "booking_acknowledged",
            "Flow closed after success"
        );
        Ok(self.state)
    }

    async fn submit(&mut self) -> DomainResult<FlowState> {
        self.state = FlowState::Submitting;
        self.submission_error = None;

        let payload = SubmissionPayload {
            draft: self.draft.clone(),
            tier: self.tier,
            fee: self.request_fee(),
            listing_id: self.context.listing_id.clone(),
            category: self.context.category,
            service_type: self.context.service_type.clone(),
        };
        tracing::info!(
            category = %payload.category,
            tier = %payload.tier,
            fee = payload.fee,
            event = "booking_submission_started",
            "Submitting booking request"
        );

        match self.gateway.submit(&payload).await {
            Ok(()) => {
                let record = RequestRecord::new(
                    payload.draft,
                    payload.tier,
                    payload.fee,
                    payload.listing_id,
                    payload.category,
                    payload.service_type,
                );
                tracing::info!(
                    category = %record.category,
                    confirmation_code = %record.confirmation_code,
                    event = "booking_submission_succeeded",
                    "Booking request accepted"
                );
                self.record = Some(record);
                self.state = FlowState::Success;
                Ok(self.state)
            }
            Err(error) => {
                tracing::warn!(
                    category = %payload.category,
                    error = %error,
                    event = "booking_submission_failed",
                    "Booking request rejected"
                );
                self.submission_error = Some(error);
                self.state = FlowState::Failed;
                Ok(self.state)
            }
        }
    }

    fn require_state(&self, expected: FlowState, action: &'static str) -> DomainResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(BookingError::InvalidAction {
                action,
                state: self.state,
            }
            .into())
        }
    }
}
