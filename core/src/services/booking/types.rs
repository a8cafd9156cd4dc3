//! Context, summary, and payload types for the booking flow

use serde::Serialize;

use crate::domain::entities::{RequestDraft, ServiceListing};
use crate::domain::value_objects::{Category, Tier};

/// Static context a booking flow is instantiated with
///
/// Captures where the request is being raised from. Screens opened from a
/// listing carry its id and offer blocks; bare category screens (e.g. a
/// generic "request a quote" form) carry only the category.
#[derive(Debug, Clone)]
pub struct BookingContext {
    /// Listing the screen was opened from, if any
    pub listing_id: Option<String>,

    /// Category the request belongs to
    pub category: Category,

    /// Subcategory, when the screen is type-specific
    pub service_type: Option<String>,

    /// Listing-level standard offer block, newline-delimited
    pub standard_offer_block: Option<String>,

    /// Listing-level premium offer block, newline-delimited
    pub premium_offer_block: Option<String>,
}

impl BookingContext {
    /// Creates a context for a bare category screen
    pub fn for_category(category: Category) -> Self {
        Self {
            listing_id: None,
            category,
            service_type: None,
            standard_offer_block: None,
            premium_offer_block: None,
        }
    }

    /// Creates a context for a listing detail screen
    pub fn for_listing(listing: &ServiceListing) -> Self {
        Self {
            listing_id: Some(listing.id.clone()),
            category: listing.category,
            service_type: Some(listing.service_type.clone()),
            standard_offer_block: listing.standard_offer_block.clone(),
            premium_offer_block: listing.premium_offer_block.clone(),
        }
    }

    /// Returns the listing-level offer block for a tier, if any
    pub fn offer_block(&self, tier: Tier) -> Option<&str> {
        match tier {
            Tier::Standard => self.standard_offer_block.as_deref(),
            Tier::Premium => self.premium_offer_block.as_deref(),
        }
    }
}

/// Snapshot rendered on the confirmation screen
///
/// Echoes the captured draft verbatim together with the fee the submission
/// will charge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSummary {
    /// The draft exactly as it will be submitted
    pub draft: RequestDraft,

    /// Tier the request will be submitted under
    pub tier: Tier,

    /// Fee for this request, in whole currency units
    pub fee: u32,
}

/// Payload handed to the submission gateway
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    /// The submitted draft
    pub draft: RequestDraft,

    /// Tier at submission time
    pub tier: Tier,

    /// Fee charged, in whole currency units
    pub fee: u32,

    /// Listing the request was raised from, if any
    pub listing_id: Option<String>,

    /// Category of the request
    pub category: Category,

    /// Subcategory, when the screen was type-specific
    pub service_type: Option<String>,
}
