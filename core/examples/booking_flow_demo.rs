//! Example walking the booking journey end to end
//!
//! Run with: cargo run --example booking_flow_demo

use std::sync::Arc;
use std::time::Duration;

use be_core::domain::entities::{FavoriteEntry, PriceTag, ServiceListing};
use be_core::domain::value_objects::{Category, Tier};
use be_core::repositories::{FavoritesStore, InMemoryFavoritesStore};
use be_core::services::booking::{
    BookingConfig, BookingContext, BookingFlow, SimulatedSubmissionGateway,
};
use be_core::services::offers::OfferCatalog;
use be_core::services::search::filter_listings;
use be_core::services::validation::FieldRuleSet;

fn demo_catalog() -> Vec<ServiceListing> {
    vec![
        ServiceListing {
            id: "hc-101".to_string(),
            name: "City Care Hospital".to_string(),
            category: Category::Healthcare,
            service_type: "General Consultation".to_string(),
            price: PriceTag::Label("From 500".to_string()),
            rating: 4.8,
            review_count: 310,
            availability: "Open 24x7".to_string(),
            image: "listings/hc-101.png".to_string(),
            standard_offer_block: None,
            premium_offer_block: None,
        },
        ServiceListing {
            id: "ev-201".to_string(),
            name: "Wedding Decoration".to_string(),
            category: Category::Events,
            service_type: "Decoration".to_string(),
            price: PriceTag::Amount(15000),
            rating: 4.6,
            review_count: 120,
            availability: "Open now".to_string(),
            image: "listings/ev-201.png".to_string(),
            standard_offer_block: Some("Flower arch included\nFree venue visit".to_string()),
            premium_offer_block: None,
        },
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let listings = demo_catalog();
    let catalog = Arc::new(OfferCatalog::builtin());
    let tier = Tier::Standard;

    println!("\n=== Searching the catalog ===");
    for query in ["wed decor", "decor wed", "hospital"] {
        let hits = filter_listings(&listings, query);
        let names: Vec<&str> = hits.iter().map(|l| l.name.as_str()).collect();
        println!("{query:?} -> {names:?}");
    }

    let listing = &listings[0];
    println!("\n=== Opening {} ===", listing.name);
    println!("Offers for the {tier} tier:");
    for line in catalog.resolve_for_listing(listing, tier) {
        println!("  - {line}");
    }

    let mut flow = BookingFlow::new(
        BookingContext::for_listing(listing),
        tier,
        FieldRuleSet::for_service(listing.category, None),
        Arc::clone(&catalog),
        Arc::new(SimulatedSubmissionGateway::with_delay(Duration::from_millis(400))),
        BookingConfig::default(),
    );

    println!("\n=== Booking with an incomplete form ===");
    flow.begin_request()?;
    for error in flow.validation_errors() {
        println!("  {}: {}", error.field, error.message);
    }

    println!("\n=== Filling the form and retrying ===");
    {
        let draft = flow.draft_mut()?;
        draft.customer_name = "Asha".to_string();
        draft.phone = "9876543210".to_string();
        draft.date = "12-05-2025".to_string();
        draft.time = "morning".to_string();
    }
    let state = flow.begin_request()?;
    println!("State after validation: {state}");

    let state = flow.accept_fee()?;
    println!("Fee of {} accepted, state: {state}", flow.request_fee());

    let summary = flow.summary()?;
    println!(
        "Confirming for {} on {} ({}), fee {}",
        summary.draft.customer_name, summary.draft.date, summary.draft.time, summary.fee
    );

    println!("\n=== Submitting ===");
    let state = flow.confirm().await?;
    println!("State after submission: {state}");
    if let Some(record) = flow.record() {
        println!("Confirmation code: {}", record.confirmation_code);
    }
    flow.acknowledge()?;

    println!("\n=== Favorites ===");
    let store = InMemoryFavoritesStore::new();
    store.add(FavoriteEntry::from_listing(&listings[1])).await?;
    store.add(FavoriteEntry::from_listing(&listings[0])).await?;
    for entry in store.list(None).await? {
        println!("  {} ({})", entry.name, entry.category);
    }
    store.remove(&listings[1].id).await?;
    println!("After unlike: {} favorite(s)", store.list(None).await?.len());

    Ok(())
}
