//! Offer tables and the fallback resolution over them.

use std::collections::HashMap;

use crate::domain::entities::ServiceListing;
use crate::domain::value_objects::{Category, Tier};

/// Offer lines for both tiers of one table row
#[derive(Debug, Clone, Default)]
struct TierOffers {
    standard: Vec<String>,
    premium: Vec<String>,
}

impl TierOffers {
    fn for_tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Standard => &self.standard,
            Tier::Premium => &self.premium,
        }
    }

    fn set(&mut self, tier: Tier, lines: Vec<String>) {
        match tier {
            Tier::Standard => self.standard = lines,
            Tier::Premium => self.premium = lines,
        }
    }
}

/// Static offer tables with three-level fallback resolution
///
/// Levels, first match wins:
/// 1. the listing's own offer block for the tier (newline-delimited),
/// 2. the (category, service type) row,
/// 3. the category default row.
///
/// A level matches only when it yields at least one non-blank line; anything
/// less falls through to the next level, and when every level misses the
/// result is empty (the screen hides the offer section). Service-type keys
/// match case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct OfferCatalog {
    service_offers: HashMap<(Category, String), TierOffers>,
    category_offers: HashMap<Category, TierOffers>,
}

impl OfferCatalog {
    /// Creates a catalog with no rows; everything resolves to empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds or replaces the category default row for one tier
    pub fn with_category_offers(mut self, category: Category, tier: Tier, lines: &[&str]) -> Self {
        self.category_offers
            .entry(category)
            .or_default()
            .set(tier, lines.iter().map(|l| l.to_string()).collect());
        self
    }

    /// Adds or replaces a service-type row for one tier
    pub fn with_service_offers(
        mut self,
        category: Category,
        service_type: &str,
        tier: Tier,
        lines: &[&str],
    ) -> Self {
        self.service_offers
            .entry((category, service_type.to_lowercase()))
            .or_default()
            .set(tier, lines.iter().map(|l| l.to_string()).collect());
        self
    }

    /// Resolves the offer lines for a screen without a listing-level block
    pub fn resolve(&self, category: Category, service_type: Option<&str>, tier: Tier) -> Vec<String> {
        if let Some(service_type) = service_type {
            let key = (category, service_type.to_lowercase());
            if let Some(row) = self.service_offers.get(&key) {
                let lines = row.for_tier(tier);
                if !lines.is_empty() {
                    return lines.to_vec();
                }
            }
        }
        if let Some(row) = self.category_offers.get(&category) {
            let lines = row.for_tier(tier);
            if !lines.is_empty() {
                return lines.to_vec();
            }
        }
        Vec::new()
    }

    /// Resolves with an explicit listing-level override block first
    pub fn resolve_with_override(
        &self,
        override_block: Option<&str>,
        category: Category,
        service_type: Option<&str>,
        tier: Tier,
    ) -> Vec<String> {
        if let Some(block) = override_block {
            let lines = split_block(block);
            if !lines.is_empty() {
                return lines;
            }
        }
        self.resolve(category, service_type, tier)
    }

    /// Resolves the offer lines shown on a listing's detail screen
    pub fn resolve_for_listing(&self, listing: &ServiceListing, tier: Tier) -> Vec<String> {
        self.resolve_with_override(
            listing.offer_block(tier),
            listing.category,
            Some(&listing.service_type),
            tier,
        )
    }

    /// Builds the catalog shipped with the app
    pub fn builtin() -> Self {
        Self::empty()
            // Category defaults
            .with_category_offers(Category::Food, Tier::Standard, &["5% off on large orders"])
            .with_category_offers(
                Category::Food,
                Tier::Premium,
                &["10% off on all orders", "Free delivery"],
            )
            .with_category_offers(
                Category::Healthcare,
                Tier::Standard,
                &["Free first consultation"],
            )
            .with_category_offers(
                Category::Healthcare,
                Tier::Premium,
                &["Priority appointment slots", "Free follow-up consultation"],
            )
            .with_category_offers(Category::Events, Tier::Standard, &["Free venue visit"])
            .with_category_offers(
                Category::Events,
                Tier::Premium,
                &["Dedicated event coordinator", "Free venue visit"],
            )
            .with_category_offers(
                Category::Construction,
                Tier::Standard,
                &["Free site estimate"],
            )
            .with_category_offers(
                Category::Construction,
                Tier::Premium,
                &["Free site estimate", "Dedicated project supervisor"],
            )
            .with_category_offers(Category::Beauty, Tier::Standard, &["10% off on first booking"])
            .with_category_offers(
                Category::Beauty,
                Tier::Premium,
                &["20% off on all bookings", "At-home service at no extra cost"],
            )
            .with_category_offers(
                Category::HomeServices,
                Tier::Standard,
                &["Same-week scheduling"],
            )
            .with_category_offers(
                Category::HomeServices,
                Tier::Premium,
                &["Same-day scheduling", "Verified top-rated professionals"],
            )
            .with_category_offers(
                Category::Shopping,
                Tier::Standard,
                &["Standard delivery in 3-5 days"],
            )
            .with_category_offers(
                Category::Shopping,
                Tier::Premium,
                &["Free express delivery", "Extended return window"],
            )
            // Service-type rows
            .with_service_offers(
                Category::Events,
                "Decoration",
                Tier::Standard,
                &["Free design consultation"],
            )
            .with_service_offers(
                Category::Events,
                "Decoration",
                Tier::Premium,
                &[
                    "Free design consultation",
                    "On-site decoration team",
                    "Premium material upgrades",
                ],
            )
            .with_service_offers(
                Category::Events,
                "Infrastructure Rental",
                Tier::Standard,
                &["Free delivery within city limits"],
            )
            .with_service_offers(
                Category::Events,
                "Infrastructure Rental",
                Tier::Premium,
                &["Free delivery and setup", "Damage waiver included"],
            )
            .with_service_offers(
                Category::Construction,
                "Bulk Material",
                Tier::Standard,
                &["Bulk pricing on 50+ units"],
            )
            .with_service_offers(
                Category::Construction,
                "Bulk Material",
                Tier::Premium,
                &["Bulk pricing on all orders", "Free freight"],
            )
            .with_service_offers(
                Category::HomeServices,
                "Pet Care",
                Tier::Standard,
                &["Certified caretakers"],
            )
            .with_service_offers(
                Category::HomeServices,
                "Pet Care",
                Tier::Premium,
                &["Certified caretakers", "Daily photo updates"],
            )
    }
}

fn split_block(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
