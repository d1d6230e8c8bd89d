mod catalog;
mod engine;
mod models;
mod view;

use catalog::{Catalog, MockCatalog};
use engine::aggregate;
use engine::filter::{CountBucket, FilterState};
use engine::{PromotionPlan, SearchQuery};
use models::{ChatCategory, Listing};
use tracing::{info, Level};
use view::{ChatPanel, InquiryForm, ListingsView, LookoutView};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Propmarket - listing query engine demo");
    info!("==========================================");

    let catalog = MockCatalog::new();
    info!("Loading catalog from source: {}", catalog.source_name());
    let listings = catalog.listings()?;
    let profiles = catalog.profiles()?;

    // The same query string the search-results route would receive
    let query = SearchQuery::from_pairs(&[
        ("location", "Bali"),
        ("type", "Villa"),
        ("price", "1000000000-5000000000"),
    ]);
    info!("Search query: {:?}", query);

    let listings_view = ListingsView {
        filter: query.into_filter(),
        ..ListingsView::default()
    };
    let visible = listings_view.refresh(&listings);

    info!("✅ {} of {} listings match\n", visible.len(), listings.len());
    print_listings(&visible);

    // The facet sidebar narrows further: 3 bedrooms or 4+, with a pool
    let facet_view = ListingsView {
        filter: FilterState {
            bedrooms: vec![CountBucket::Exact(3), CountBucket::AtLeast(4)],
            features: vec!["Pool".to_string()],
            ..listings_view.filter.clone()
        },
        ..ListingsView::default()
    };
    let narrowed = facet_view.refresh(&listings);
    info!("With bedroom and feature facets: {} listings", narrowed.len());

    // Facet counts shown next to the price/area sliders
    let price_buckets = aggregate::price_histogram(
        &listings,
        &[0, 1_000_000_000, 3_000_000_000, 5_000_000_000],
    );
    for bucket in &price_buckets {
        match bucket.upper {
            Some(upper) => info!("price {} - {}: {} listings", bucket.lower, upper, bucket.count),
            None => info!("price {}+: {} listings", bucket.lower, bucket.count),
        }
    }
    let area_buckets = aggregate::area_histogram(&listings, &[0, 100, 300]);
    info!(
        "area buckets: {:?}",
        area_buckets.iter().map(|b| b.count).collect::<Vec<_>>()
    );

    // Agent lookout with default rating ordering
    let lookout = LookoutView::default();
    let agents = lookout.refresh(&profiles);
    for (i, profile) in agents.iter().enumerate() {
        println!(
            "{}. {} ({:?}, {:.1}★, {} listings)",
            i + 1,
            profile.name,
            profile.role,
            profile.rating,
            profile.active_listing_count
        );
    }

    // Dashboard chat: badges, plus the generic widget's thread count
    let mut panel = ChatPanel::new(catalog.chat_threads()?);
    for (category, unread) in panel.badges() {
        info!("{:?}: {} unread", category, unread);
    }
    info!(
        "Buyer threads awaiting a reply: {}",
        aggregate::threads_with_unread(&panel.threads, ChatCategory::Buyer)
    );
    panel.send("chat-001", "Yes, it is still available. When would you like to visit?");
    if let Some(thread) = panel.threads.iter().find(|t| t.id == "chat-001") {
        if let Some(message) = thread.messages.last() {
            info!("{} at {}: {}", message.sender, message.sent_at, message.body);
        }
    }

    // A buyer reaches out about the first visible listing
    if let Some(first) = visible.first() {
        let form = InquiryForm {
            listing_id: first.id().to_string(),
            name: "Rina Kusuma".to_string(),
            email: "rina@example.com".to_string(),
            message: "Interested in a viewing next week.".to_string(),
        };
        form.submit();
    }

    // Promotion quote a seller would see for this listing
    let plan = PromotionPlan {
        base_price_per_day: 100_000,
        duration_days: 30,
        homepage_highlight: true,
        regions: vec!["Bali".to_string()],
        ..PromotionPlan::default()
    };
    info!("Promotion quote for 30 days: {} IDR", plan.quote());

    // Save the visible result set, like a page handing it to its renderer
    let json = serde_json::to_string_pretty(&visible)?;
    std::fs::write("search_results.json", json)?;
    info!("💾 Saved {} visible listings to search_results.json", visible.len());

    Ok(())
}

fn print_listings(listings: &[Listing]) {
    for (i, listing) in listings.iter().enumerate() {
        let badge = if listing.promoted() { " [FEATURED]" } else { "" };
        println!(
            "{}. {}{} ({} IDR)",
            i + 1,
            listing.title(),
            badge,
            listing.price()
        );
        match listing {
            Listing::Property(p) => {
                println!(
                    "   {} · {} bed, {} bath, {} m²",
                    p.property_type, p.bedrooms, p.bathrooms, p.area_sqm
                );
            }
            Listing::Project(p) => {
                println!(
                    "   Project · {}/{} units available",
                    p.available_units, p.total_units
                );
            }
        }
        println!("   Location: {}", listing.location());
        if !listing.special_features().is_empty() {
            println!("   Features: {}", listing.special_features().join(", "));
        }
        println!();
    }
}
