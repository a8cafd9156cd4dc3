//! Request record entity produced by a successful submission.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::entities::draft::RequestDraft;
use crate::domain::value_objects::{Category, Tier};

/// Length of a confirmation code
pub const CODE_LENGTH: usize = 6;

/// Characters a confirmation code is drawn from
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Short reference code shown to the user after a successful submission
///
/// Codes are references for humans, not identifiers: they are sampled
/// uniformly from a 36^6 space with no uniqueness check against earlier
/// requests. The record's `id` is the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    /// Generates a fresh 6-character uppercase alphanumeric code
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let code: String = (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..CODE_ALPHABET.len());
                CODE_ALPHABET[idx] as char
            })
            .collect();
        Self(code)
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable record of one accepted booking request
///
/// Created after the gateway accepts the submission, held by the flow for the
/// success screen, and dropped when the screen unwinds. Nothing persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// Unique identifier for the request
    pub id: Uuid,

    /// Code displayed on the success screen
    pub confirmation_code: ConfirmationCode,

    /// The draft exactly as submitted
    pub draft: RequestDraft,

    /// Tier the request was submitted under
    pub tier: Tier,

    /// Fee charged for the request, in whole currency units
    pub fee: u32,

    /// Listing the request was raised from, if any
    pub listing_id: Option<String>,

    /// Category the request belongs to
    pub category: Category,

    /// Subcategory, when the screen was type-specific
    pub service_type: Option<String>,

    /// Timestamp when the submission was accepted
    pub submitted_at: DateTime<Utc>,
}

impl RequestRecord {
    /// Creates a record for an accepted submission with a fresh code
    pub fn new(
        draft: RequestDraft,
        tier: Tier,
        fee: u32,
        listing_id: Option<String>,
        category: Category,
        service_type: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            confirmation_code: ConfirmationCode::generate(),
            draft,
            tier,
            fee,
            listing_id,
            category,
            service_type,
            submitted_at: Utc::now(),
        }
    }
}
