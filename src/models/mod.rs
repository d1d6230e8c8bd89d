use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a marketplace profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileRole {
    Agent,
    Developer,
    Owner,
}

/// Category tab a chat thread appears under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChatCategory {
    Buyer,
    Seller,
    Agent,
    Developer,
}

/// A single sellable/rentable unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Type token shown on the listing card (Villa, Apartment, House, Land)
    pub property_type: String,
    /// Price in whole currency units
    pub price: i64,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area_sqm: i32,
    pub special_features: Vec<String>,
    pub promoted: bool,
}

/// A multi-unit development sold off-plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Lowest unit price in whole currency units
    pub starting_price: i64,
    pub total_units: u32,
    pub available_units: u32,
    /// Projects frequently carry no feature tags at all
    pub special_features: Option<Vec<String>>,
    pub promoted: bool,
}

/// Core listing model. The variant is the single source of truth for which
/// numeric fields exist; a listing is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Listing {
    Property(Property),
    Project(Project),
}

impl Listing {
    pub fn id(&self) -> &str {
        match self {
            Listing::Property(p) => &p.id,
            Listing::Project(p) => &p.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Listing::Property(p) => &p.title,
            Listing::Project(p) => &p.title,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Listing::Property(p) => &p.location,
            Listing::Project(p) => &p.location,
        }
    }

    /// Asking price for a property, starting price for a project
    pub fn price(&self) -> i64 {
        match self {
            Listing::Property(p) => p.price,
            Listing::Project(p) => p.starting_price,
        }
    }

    pub fn promoted(&self) -> bool {
        match self {
            Listing::Property(p) => p.promoted,
            Listing::Project(p) => p.promoted,
        }
    }

    /// Feature tags, empty when the listing carries none
    pub fn special_features(&self) -> &[String] {
        match self {
            Listing::Property(p) => &p.special_features,
            Listing::Project(p) => p.special_features.as_deref().unwrap_or(&[]),
        }
    }
}

/// Agent, developer, or owner profile shown on the lookout page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub role: ProfileRole,
    pub location: String,
    pub specialization: String,
    /// Rating in 0.0..=5.0
    pub rating: f32,
    pub active_listing_count: u32,
    pub promoted: bool,
}

/// A message inside a chat thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// A chat thread pinned under one category tab. The only mutation the
/// dashboards perform is appending a locally-authored message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatThread {
    pub id: String,
    pub category: ChatCategory,
    pub messages: Vec<ChatMessage>,
    /// Count of messages the local user has not read yet
    pub unread: u32,
}

impl ChatThread {
    /// Append a message authored by the local user. Never touches `unread`;
    /// only incoming traffic (out of scope here) would.
    pub fn push_local(&mut self, sender: impl Into<String>, body: impl Into<String>) {
        let seq = self.messages.len() + 1;
        self.messages.push(ChatMessage {
            id: format!("{}-{}", self.id, seq),
            sender: sender.into(),
            body: body.into(),
            sent_at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_local_appends_without_touching_unread() {
        let mut t = ChatThread {
            id: "t1".to_string(),
            category: ChatCategory::Buyer,
            messages: vec![],
            unread: 2,
        };
        t.push_local("me", "is this still available?");

        assert_eq!(t.messages.len(), 1);
        assert_eq!(t.messages[0].id, "t1-1");
        assert_eq!(t.unread, 2);
    }

    #[test]
    fn project_without_features_exposes_empty_slice() {
        let listing = Listing::Project(Project {
            id: "pr1".to_string(),
            title: "Green Terraces".to_string(),
            location: "Bali".to_string(),
            starting_price: 900_000_000,
            total_units: 40,
            available_units: 12,
            special_features: None,
            promoted: false,
        });

        assert!(listing.special_features().is_empty());
        assert_eq!(listing.price(), 900_000_000);
    }
}
