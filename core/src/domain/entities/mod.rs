//! Domain entities representing core business objects.

pub mod draft;
pub mod favorite;
pub mod listing;
pub mod request;

// Re-export commonly used types
pub use draft::{DraftField, RequestDraft};
pub use favorite::FavoriteEntry;
pub use listing::{PriceTag, ServiceListing};
pub use request::{ConfirmationCode, RequestRecord, CODE_LENGTH};
