use crate::catalog::traits::Catalog;
use crate::models::{
    ChatCategory, ChatMessage, ChatThread, Listing, Profile, ProfileRole, Project, Property,
};
use anyhow::Result;
use chrono::{TimeZone, Utc};
use tracing::debug;

/// In-memory catalog standing in for a backend. The tables below mirror what
/// the marketplace pages render today; promoted and non-promoted entries are
/// interleaved so ordering is exercised.
pub struct MockCatalog;

impl MockCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for MockCatalog {
    fn listings(&self) -> Result<Vec<Listing>> {
        debug!("loading mock listing table");

        Ok(vec![
            Listing::Property(Property {
                id: "prop-001".to_string(),
                title: "Modern Villa Canggu".to_string(),
                location: "Bali".to_string(),
                property_type: "Villa".to_string(),
                price: 4_500_000_000,
                bedrooms: 4,
                bathrooms: 3,
                area_sqm: 320,
                special_features: vec!["Pool".to_string(), "Garden".to_string()],
                promoted: true,
            }),
            Listing::Property(Property {
                id: "prop-002".to_string(),
                title: "City Apartment Sudirman".to_string(),
                location: "Jakarta".to_string(),
                property_type: "Apartment".to_string(),
                price: 1_800_000_000,
                bedrooms: 2,
                bathrooms: 1,
                area_sqm: 76,
                special_features: vec!["Gym".to_string(), "Security".to_string()],
                promoted: false,
            }),
            Listing::Project(Project {
                id: "proj-001".to_string(),
                title: "Green Terraces Residence".to_string(),
                location: "Jakarta".to_string(),
                starting_price: 950_000_000,
                total_units: 240,
                available_units: 85,
                special_features: Some(vec!["Pool".to_string(), "Playground".to_string()]),
                promoted: true,
            }),
            Listing::Property(Property {
                id: "prop-003".to_string(),
                title: "Family House Menteng".to_string(),
                location: "Jakarta".to_string(),
                property_type: "House".to_string(),
                price: 7_200_000_000,
                bedrooms: 5,
                bathrooms: 4,
                area_sqm: 450,
                special_features: vec!["Garden".to_string(), "Garage".to_string()],
                promoted: false,
            }),
            Listing::Property(Property {
                id: "prop-004".to_string(),
                title: "Ubud Jungle Villa".to_string(),
                location: "Bali".to_string(),
                property_type: "Villa".to_string(),
                price: 3_100_000_000,
                bedrooms: 3,
                bathrooms: 3,
                area_sqm: 210,
                special_features: vec!["Pool".to_string()],
                promoted: false,
            }),
            Listing::Project(Project {
                id: "proj-002".to_string(),
                title: "Harbor View Towers".to_string(),
                location: "Surabaya".to_string(),
                starting_price: 620_000_000,
                total_units: 180,
                available_units: 180,
                special_features: None,
                promoted: false,
            }),
            Listing::Property(Property {
                id: "prop-005".to_string(),
                title: "Beachfront Land Uluwatu".to_string(),
                location: "Bali".to_string(),
                property_type: "Land".to_string(),
                price: 2_400_000_000,
                bedrooms: 0,
                bathrooms: 0,
                area_sqm: 1_000,
                special_features: vec![],
                promoted: true,
            }),
            Listing::Property(Property {
                id: "prop-006".to_string(),
                title: "Studio Apartment Seminyak".to_string(),
                location: "Bali".to_string(),
                property_type: "Apartment".to_string(),
                price: 850_000_000,
                bedrooms: 1,
                bathrooms: 1,
                area_sqm: 42,
                special_features: vec!["Pool".to_string(), "Gym".to_string()],
                promoted: false,
            }),
        ])
    }

    fn profiles(&self) -> Result<Vec<Profile>> {
        debug!("loading mock profile table");

        Ok(vec![
            Profile {
                id: "agent-001".to_string(),
                name: "Dewi Lestari".to_string(),
                role: ProfileRole::Agent,
                location: "Bali".to_string(),
                specialization: "Residential".to_string(),
                rating: 4.8,
                active_listing_count: 23,
                promoted: true,
            },
            Profile {
                id: "agent-002".to_string(),
                name: "Budi Santoso".to_string(),
                role: ProfileRole::Agent,
                location: "Jakarta".to_string(),
                specialization: "Commercial".to_string(),
                rating: 4.5,
                active_listing_count: 41,
                promoted: false,
            },
            Profile {
                id: "agent-003".to_string(),
                name: "Made Wirawan".to_string(),
                role: ProfileRole::Agent,
                location: "Bali".to_string(),
                specialization: "Commercial".to_string(),
                rating: 4.1,
                active_listing_count: 12,
                promoted: false,
            },
            Profile {
                id: "dev-001".to_string(),
                name: "Nusantara Development Group".to_string(),
                role: ProfileRole::Developer,
                location: "Jakarta".to_string(),
                specialization: "Residential".to_string(),
                rating: 4.6,
                active_listing_count: 7,
                promoted: true,
            },
            Profile {
                id: "dev-002".to_string(),
                name: "Pesisir Properti".to_string(),
                role: ProfileRole::Developer,
                location: "Surabaya".to_string(),
                specialization: "Mixed Use".to_string(),
                rating: 3.9,
                active_listing_count: 3,
                promoted: false,
            },
            Profile {
                id: "owner-001".to_string(),
                name: "Siti Rahma".to_string(),
                role: ProfileRole::Owner,
                location: "Bali".to_string(),
                specialization: "Residential".to_string(),
                rating: 4.2,
                active_listing_count: 2,
                promoted: false,
            },
        ])
    }

    fn chat_threads(&self) -> Result<Vec<ChatThread>> {
        debug!("loading mock chat table");

        let sent_at = Utc.with_ymd_and_hms(2026, 8, 20, 9, 30, 0).unwrap();
        Ok(vec![
            ChatThread {
                id: "chat-001".to_string(),
                category: ChatCategory::Buyer,
                messages: vec![ChatMessage {
                    id: "chat-001-1".to_string(),
                    sender: "Rina".to_string(),
                    body: "Is the Canggu villa still available?".to_string(),
                    sent_at,
                }],
                unread: 2,
            },
            ChatThread {
                id: "chat-002".to_string(),
                category: ChatCategory::Buyer,
                messages: vec![ChatMessage {
                    id: "chat-002-1".to_string(),
                    sender: "Andre".to_string(),
                    body: "Can we schedule a viewing this weekend?".to_string(),
                    sent_at,
                }],
                unread: 1,
            },
            ChatThread {
                id: "chat-003".to_string(),
                category: ChatCategory::Seller,
                messages: vec![ChatMessage {
                    id: "chat-003-1".to_string(),
                    sender: "Siti".to_string(),
                    body: "Please update the asking price.".to_string(),
                    sent_at,
                }],
                unread: 0,
            },
            ChatThread {
                id: "chat-004".to_string(),
                category: ChatCategory::Agent,
                messages: vec![ChatMessage {
                    id: "chat-004-1".to_string(),
                    sender: "Budi".to_string(),
                    body: "Commission paperwork is ready.".to_string(),
                    sent_at,
                }],
                unread: 3,
            },
            ChatThread {
                id: "chat-005".to_string(),
                category: ChatCategory::Developer,
                messages: vec![],
                unread: 0,
            },
        ])
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_tables_are_non_empty_and_mixed() {
        let catalog = MockCatalog::new();
        let listings = catalog.listings().unwrap();

        let properties = listings
            .iter()
            .filter(|l| matches!(l, Listing::Property(_)))
            .count();
        let projects = listings
            .iter()
            .filter(|l| matches!(l, Listing::Project(_)))
            .count();
        assert!(properties >= 5);
        assert!(projects >= 2);

        let promoted = listings.iter().filter(|l| l.promoted()).count();
        assert!(promoted >= 2 && promoted < listings.len());
    }

    #[test]
    fn profiles_cover_all_three_roles() {
        let profiles = MockCatalog::new().profiles().unwrap();

        for role in [ProfileRole::Agent, ProfileRole::Developer, ProfileRole::Owner] {
            assert!(profiles.iter().any(|p| p.role == role));
        }
    }
}
