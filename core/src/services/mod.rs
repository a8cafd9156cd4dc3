//! Business services containing domain logic and use cases.

pub mod booking;
pub mod offers;
pub mod search;
pub mod validation;

// Re-export commonly used types
pub use booking::{
    BookingConfig, BookingContext, BookingFlow, RequestSummary, SimulatedSubmissionGateway,
    SubmissionGateway, SubmissionPayload,
};
pub use offers::OfferCatalog;
pub use search::filter_listings;
pub use validation::{FieldRuleSet, FieldValidator};
