use crate::engine::aggregate;
use crate::engine::filter::{self, FilterState, ProfileFilter};
use crate::engine::sort;
use crate::models::{ChatCategory, ChatThread, Listing, Profile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Ordering applied to a filtered listing set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListingOrder {
    /// Catalog order, untouched
    Unsorted,
    /// Promoted entries first, catalog order within each group
    #[default]
    PromotedFirst,
}

/// Ordering applied to the lookout result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProfileOrder {
    #[default]
    RatingDesc,
    PromotedFirst,
}

/// View state for the listings and search-results pages. Plain data, no
/// framework coupling; a page re-runs `refresh` after every interaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingsView {
    pub filter: FilterState,
    pub order: ListingOrder,
}

impl ListingsView {
    /// Filter then order, completing within the event turn that called it.
    pub fn refresh(&self, listings: &[Listing]) -> Vec<Listing> {
        let mut visible = filter::apply(listings, &self.filter);
        match self.order {
            ListingOrder::Unsorted => {}
            ListingOrder::PromotedFirst => sort::promoted_listings_first(&mut visible),
        }
        visible
    }
}

/// View state for the agent-lookout page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookoutView {
    pub filter: ProfileFilter,
    pub order: ProfileOrder,
}

impl LookoutView {
    pub fn refresh(&self, profiles: &[Profile]) -> Vec<Profile> {
        let mut visible = filter::apply_profiles(profiles, &self.filter);
        match self.order {
            ProfileOrder::RatingDesc => sort::by_rating_desc(&mut visible),
            ProfileOrder::PromotedFirst => sort::promoted_profiles_first(&mut visible),
        }
        visible
    }
}

/// The chat widget pinned to the dashboards. Owns its threads for the
/// lifetime of the page; the only mutation is sending a local message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatPanel {
    pub threads: Vec<ChatThread>,
}

impl ChatPanel {
    pub fn new(threads: Vec<ChatThread>) -> Self {
        Self { threads }
    }

    /// Append a locally-authored message to a thread. Returns false for an
    /// unknown thread id.
    pub fn send(&mut self, thread_id: &str, body: &str) -> bool {
        match self.threads.iter_mut().find(|t| t.id == thread_id) {
            Some(thread) => {
                thread.push_local("me", body);
                true
            }
            None => {
                warn!("dropping message for unknown thread {thread_id:?}");
                false
            }
        }
    }

    /// Unread badge numbers per category tab
    pub fn badges(&self) -> BTreeMap<ChatCategory, u32> {
        aggregate::unread_by_category(&self.threads)
    }
}

/// Contact form on a listing page. There is no backend yet, so submission
/// only logs; callers get no error channel to misreport.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InquiryForm {
    pub listing_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl InquiryForm {
    pub fn submit(&self) {
        info!(
            "inquiry for {} from {} <{}>: {}",
            self.listing_id, self.name, self.email, self.message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::filter::FilterState;
    use crate::models::{ProfileRole, Property};

    fn property(id: &str, location: &str, promoted: bool) -> Listing {
        Listing::Property(Property {
            id: id.to_string(),
            title: format!("Listing {id}"),
            location: location.to_string(),
            property_type: "Villa".to_string(),
            price: 1_000,
            bedrooms: 2,
            bathrooms: 1,
            area_sqm: 90,
            special_features: vec![],
            promoted,
        })
    }

    fn profile(id: &str, rating: f32) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Profile {id}"),
            role: ProfileRole::Agent,
            location: "Bali".to_string(),
            specialization: "Residential".to_string(),
            rating,
            active_listing_count: 1,
            promoted: false,
        }
    }

    fn thread(id: &str, unread: u32) -> ChatThread {
        ChatThread {
            id: id.to_string(),
            category: ChatCategory::Buyer,
            messages: vec![],
            unread,
        }
    }

    #[test]
    fn refresh_filters_then_promotes() {
        let listings = vec![
            property("a", "Bali", false),
            property("b", "Jakarta", true),
            property("c", "Bali", true),
        ];
        let view = ListingsView {
            filter: FilterState {
                location: Some("Bali".to_string()),
                ..FilterState::default()
            },
            order: ListingOrder::PromotedFirst,
        };

        let visible = view.refresh(&listings);

        let order: Vec<&str> = visible.iter().map(|l| l.id()).collect();
        assert_eq!(order, vec!["c", "a"]);
    }

    #[test]
    fn default_lookout_view_sorts_by_rating() {
        let profiles = vec![profile("a", 3.5), profile("b", 4.9)];
        let visible = LookoutView::default().refresh(&profiles);

        assert_eq!(visible[0].id, "b");
    }

    #[test]
    fn send_appends_to_the_right_thread_only() {
        let mut panel = ChatPanel::new(vec![thread("t1", 0), thread("t2", 1)]);

        assert!(panel.send("t2", "hello"));
        assert!(panel.threads[0].messages.is_empty());
        assert_eq!(panel.threads[1].messages.len(), 1);
    }

    #[test]
    fn send_to_unknown_thread_is_a_noop() {
        let mut panel = ChatPanel::new(vec![thread("t1", 0)]);

        assert!(!panel.send("nope", "hello"));
        assert!(panel.threads[0].messages.is_empty());
    }

    #[test]
    fn badges_reflect_unread_totals() {
        let panel = ChatPanel::new(vec![thread("t1", 2), thread("t2", 1)]);
        assert_eq!(panel.badges().get(&ChatCategory::Buyer), Some(&3));
    }
}
