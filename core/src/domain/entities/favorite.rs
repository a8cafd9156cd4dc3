//! Favorite entry entity stored by the favorites store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::listing::{PriceTag, ServiceListing};
use crate::domain::value_objects::Category;

/// Normalized projection of a listing the user marked as a favorite
///
/// Listing screens across all verticals produce these, so everything beyond
/// id, name and category is optional. The store keeps at most one entry per
/// id; re-adding replaces the stored entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Listing id, the dedup key
    pub id: String,

    /// Display name
    pub name: String,

    /// Vertical the listing belongs to
    pub category: Category,

    /// Subcategory, when known
    pub service_type: Option<String>,

    /// Card image reference
    pub image: Option<String>,

    /// Short description for the favorites card
    pub description: Option<String>,

    /// Price as shown on the listing
    pub price: Option<PriceTag>,

    /// Average rating
    pub rating: Option<f32>,

    /// Number of reviews
    pub review_count: Option<u32>,

    /// Location label
    pub location: Option<String>,

    /// Street address
    pub address: Option<String>,

    /// Provider phone
    pub phone: Option<String>,

    /// Timestamp when the entry was added; drives list ordering
    pub added_at: DateTime<Utc>,
}

impl FavoriteEntry {
    /// Creates a minimal entry with only the required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            service_type: None,
            image: None,
            description: None,
            price: None,
            rating: None,
            review_count: None,
            location: None,
            address: None,
            phone: None,
            added_at: Utc::now(),
        }
    }

    /// Projects a catalog listing into a favorite entry
    pub fn from_listing(listing: &ServiceListing) -> Self {
        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
            category: listing.category,
            service_type: Some(listing.service_type.clone()),
            image: Some(listing.image.clone()),
            description: None,
            price: Some(listing.price.clone()),
            rating: Some(listing.rating),
            review_count: Some(listing.review_count),
            location: None,
            address: None,
            phone: None,
            added_at: Utc::now(),
        }
    }
}
