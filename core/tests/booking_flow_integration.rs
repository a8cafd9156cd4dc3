//! Integration tests for the booking journey across services

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use be_core::domain::entities::{FavoriteEntry, PriceTag, ServiceListing};
    use be_core::domain::value_objects::{Category, FlowState, Tier};
    use be_core::repositories::{FavoritesStore, InMemoryFavoritesStore};
    use be_core::services::booking::{
        BookingConfig, BookingContext, BookingFlow, SimulatedSubmissionGateway,
        DEFAULT_STANDARD_FEE,
    };
    use be_core::services::offers::OfferCatalog;
    use be_core::services::search::filter_listings;
    use be_core::services::validation::FieldRuleSet;

    fn hospital_listing() -> ServiceListing {
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
        }
    }

    fn flow_for(
        listing: &ServiceListing,
        tier: Tier,
    ) -> BookingFlow<SimulatedSubmissionGateway> {
        BookingFlow::new(
            BookingContext::for_listing(listing),
            tier,
            FieldRuleSet::for_service(listing.category, None),
            Arc::new(OfferCatalog::builtin()),
            Arc::new(SimulatedSubmissionGateway::new()),
            BookingConfig::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_standard_tier_appointment_end_to_end() {
        let listing = hospital_listing();
        let mut flow = flow_for(&listing, Tier::Standard);

        // Fill the four fields the healthcare form requires
        {
            let draft = flow.draft_mut().unwrap();
            draft.customer_name = "Asha".to_string();
            draft.phone = "9876543210".to_string();
            draft.date = "12-05-2025".to_string();
            draft.time = "morning".to_string();
        }

        // Standard tier pays the request fee before confirming
        assert_eq!(flow.begin_request().unwrap(), FlowState::PaymentPrompt);
        assert_eq!(flow.begin_request().unwrap_err().to_string(),
            "Action 'begin_request' is not available in state 'payment_prompt'");
        assert_eq!(flow.accept_fee().unwrap(), FlowState::Confirming);

        // The summary echoes the draft verbatim
        let summary = flow.summary().unwrap();
        assert_eq!(summary.draft.customer_name, "Asha");
        assert_eq!(summary.draft.phone, "9876543210");
        assert_eq!(summary.draft.date, "12-05-2025");
        assert_eq!(summary.draft.time, "morning");
        assert_eq!(summary.fee, DEFAULT_STANDARD_FEE);

        // Submission runs through the simulated delay and succeeds
        assert_eq!(flow.confirm().await.unwrap(), FlowState::Success);
        let record = flow.record().expect("record after success");
        let code = record.confirmation_code.as_str();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_eq!(record.listing_id.as_deref(), Some("hc-101"));
        assert_eq!(record.fee, DEFAULT_STANDARD_FEE);

        // Closing clears the draft back to all-empty strings
        assert_eq!(flow.acknowledge().unwrap(), FlowState::Closed);
        assert!(flow.draft().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_premium_tier_skips_the_fee_entirely() {
        let listing = hospital_listing();
        let mut flow = flow_for(&listing, Tier::Premium);

        {
            let draft = flow.draft_mut().unwrap();
            draft.customer_name = "Asha".to_string();
            draft.phone = "9876543210".to_string();
            draft.date = "12-05-2025".to_string();
            draft.time = "morning".to_string();
        }

        // No payment prompt on the way to the summary
        assert_eq!(flow.begin_request().unwrap(), FlowState::Confirming);
        assert_eq!(flow.summary().unwrap().fee, 0);

        assert_eq!(flow.confirm().await.unwrap(), FlowState::Success);
        assert_eq!(flow.record().unwrap().fee, 0);
    }

    #[tokio::test]
    async fn test_browse_like_and_list_favorites() {
        let listings = vec![
            hospital_listing(),
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
                standard_offer_block: None,
                premium_offer_block: None,
            },
        ];

        // The search box narrows the catalog with ordered tokens
        let hits = filter_listings(&listings, "wed decor");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "ev-201");

        // Like the hit, then read the favorites screen
        let store = InMemoryFavoritesStore::new();
        store.add(FavoriteEntry::from_listing(hits[0])).await.unwrap();
        assert!(store.is_favorite("ev-201").await.unwrap());

        let events = store.list(Some(Category::Events)).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Wedding Decoration");
        assert!(store.list(Some(Category::Food)).await.unwrap().is_empty());

        // Unlike is idempotent
        assert!(store.remove("ev-201").await.unwrap());
        assert!(!store.remove("ev-201").await.unwrap());
        assert!(store.list(None).await.unwrap().is_empty());
    }
}
