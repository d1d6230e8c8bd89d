use crate::models::{Listing, Profile};
use serde::{Deserialize, Serialize};

/// Bedroom/bathroom facet bucket: the facet bar offers exact counts plus a
/// trailing "4+" style bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountBucket {
    Exact(u8),
    AtLeast(u8),
}

impl CountBucket {
    pub fn matches(self, count: u8) -> bool {
        match self {
            CountBucket::Exact(n) => count == n,
            CountBucket::AtLeast(n) => count >= n,
        }
    }
}

/// Active facet selections for a listings view. Created empty on page mount,
/// mutated by user interaction, discarded on navigation.
///
/// Semantics: selections within one facet OR together, facets AND together,
/// and an empty facet is ignored entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub property_types: Vec<String>,
    pub bedrooms: Vec<CountBucket>,
    pub bathrooms: Vec<CountBucket>,
    pub features: Vec<String>,
    pub location: Option<String>,
    /// Inclusive price bounds in whole currency units
    pub price_range: Option<(i64, i64)>,
    /// Inclusive area bounds in square meters
    pub area_range: Option<(i32, i32)>,
}

impl FilterState {
    /// True when no facet is active, i.e. the filter is the identity.
    pub fn is_empty(&self) -> bool {
        self.property_types.is_empty()
            && self.bedrooms.is_empty()
            && self.bathrooms.is_empty()
            && self.features.is_empty()
            && self.location.is_none()
            && self.price_range.is_none()
            && self.area_range.is_none()
    }
}

/// Whether a listing passes every active facet.
///
/// Listings missing a filtered attribute (a project against the bedroom
/// facet, say) fail that facet while it is active and pass otherwise.
pub fn matches_listing(listing: &Listing, filter: &FilterState) -> bool {
    if !filter.property_types.is_empty() {
        match listing {
            Listing::Property(p) => {
                if !filter.property_types.iter().any(|t| *t == p.property_type) {
                    return false;
                }
            }
            Listing::Project(_) => return false,
        }
    }

    if !filter.bedrooms.is_empty() {
        match listing {
            Listing::Property(p) => {
                if !filter.bedrooms.iter().any(|b| b.matches(p.bedrooms)) {
                    return false;
                }
            }
            Listing::Project(_) => return false,
        }
    }

    if !filter.bathrooms.is_empty() {
        match listing {
            Listing::Property(p) => {
                if !filter.bathrooms.iter().any(|b| b.matches(p.bathrooms)) {
                    return false;
                }
            }
            Listing::Project(_) => return false,
        }
    }

    // OR across selected features: any overlap keeps the listing
    if !filter.features.is_empty() {
        let features = listing.special_features();
        if !features.iter().any(|f| filter.features.contains(f)) {
            return false;
        }
    }

    if let Some(location) = &filter.location {
        if listing.location() != location {
            return false;
        }
    }

    if let Some((min, max)) = filter.price_range {
        let price = listing.price();
        if price < min || price > max {
            return false;
        }
    }

    if let Some((min, max)) = filter.area_range {
        match listing {
            Listing::Property(p) => {
                if p.area_sqm < min || p.area_sqm > max {
                    return false;
                }
            }
            Listing::Project(_) => return false,
        }
    }

    true
}

/// Single linear pass over the catalog; input order is preserved.
pub fn apply(listings: &[Listing], filter: &FilterState) -> Vec<Listing> {
    if filter.is_empty() {
        return listings.to_vec();
    }
    listings
        .iter()
        .filter(|l| matches_listing(l, filter))
        .cloned()
        .collect()
}

/// Active facets on the agent-lookout page. `None` is the "all" sentinel and
/// is ignored; facets AND together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileFilter {
    pub location: Option<String>,
    pub specialization: Option<String>,
    pub min_rating: Option<f32>,
}

pub fn matches_profile(profile: &Profile, filter: &ProfileFilter) -> bool {
    if let Some(location) = &filter.location {
        if profile.location != *location {
            return false;
        }
    }
    if let Some(specialization) = &filter.specialization {
        if profile.specialization != *specialization {
            return false;
        }
    }
    if let Some(min_rating) = filter.min_rating {
        if profile.rating < min_rating {
            return false;
        }
    }
    true
}

pub fn apply_profiles(profiles: &[Profile], filter: &ProfileFilter) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|p| matches_profile(p, filter))
        .cloned()
        .collect()
}
