//! Tier offer resolution module
//!
//! Maps (category, service type, tier) to the benefit lines a screen renders
//! under the price. Resolution is a pure first-match lookup over three
//! levels: the listing's own offer block, a service-type table row, then the
//! category default. Lists are never merged across levels.

mod catalog;

pub use catalog::OfferCatalog;
