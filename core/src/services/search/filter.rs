//! Listing filter built on the ordered token matcher.

use be_shared::utils::search;

use crate::domain::entities::ServiceListing;

/// Filters listings against a free-text query, preserving input order
///
/// A listing is kept when the query matches its searchable fields (name,
/// category label, service type) under the ordered token rules. An empty
/// query keeps everything.
pub fn filter_listings<'a>(listings: &'a [ServiceListing], query: &str) -> Vec<&'a ServiceListing> {
    listings
        .iter()
        .filter(|listing| search::matches(query, &listing.search_fields()))
        .collect()
}
