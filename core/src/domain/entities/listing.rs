//! Service listing entity representing one catalog entry.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::{Category, Tier};

/// Price of a listing, which the catalog stores either as a plain amount
/// or as a free-form label such as "From 499" or "On request"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceTag {
    /// Numeric price in whole currency units
    Amount(u32),
    /// Free-form price text, shown verbatim
    Label(String),
}

impl fmt::Display for PriceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceTag::Amount(amount) => write!(f, "{amount}"),
            PriceTag::Label(label) => write!(f, "{label}"),
        }
    }
}

/// Catalog entry loaded once from static configuration and never mutated
///
/// Listing ids are unique within a category. The two offer blocks are
/// newline-delimited benefit lines that, when present, override the offer
/// tables for the matching tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceListing {
    /// Identifier, unique within the category
    pub id: String,

    /// Display name
    pub name: String,

    /// Vertical this listing belongs to
    pub category: Category,

    /// Subcategory shown under the name (e.g. "Decoration")
    pub service_type: String,

    /// Price, either numeric or free-form
    pub price: PriceTag,

    /// Average rating, 0.0 to 5.0
    pub rating: f32,

    /// Number of reviews behind the rating
    pub review_count: u32,

    /// Availability label shown on the card (e.g. "Open now")
    pub availability: String,

    /// Reference to the card image asset
    pub image: String,

    /// Listing-level standard-tier offer lines, newline-delimited
    pub standard_offer_block: Option<String>,

    /// Listing-level premium-tier offer lines, newline-delimited
    pub premium_offer_block: Option<String>,
}

impl ServiceListing {
    /// Returns the fields the search filter matches against
    ///
    /// Order matters: the matcher joins these with single spaces before
    /// scanning, so name text can chain into the category and type labels.
    pub fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.category.label(), &self.service_type]
    }

    /// Returns the raw listing-level offer block for a tier, if any
    pub fn offer_block(&self, tier: Tier) -> Option<&str> {
        match tier {
            Tier::Standard => self.standard_offer_block.as_deref(),
            Tier::Premium => self.premium_offer_block.as_deref(),
        }
    }
}
