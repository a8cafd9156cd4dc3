//! Catalog search module
//!
//! Applies the shared ordered token matcher to catalog listings. The filter
//! is pure and stateless; every listing screen calls it on each keystroke
//! against the listings it already holds.

mod filter;

pub use filter::filter_listings;
