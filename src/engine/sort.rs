use crate::models::{Listing, Profile};

/// Stable partition: promoted items first, original order preserved within
/// each group. Not a full sort by any other key.
pub fn promoted_first<T>(items: &mut [T], is_promoted: impl Fn(&T) -> bool) {
    items.sort_by_key(|item| !is_promoted(item));
}

pub fn promoted_listings_first(listings: &mut [Listing]) {
    promoted_first(listings, |l| l.promoted());
}

pub fn promoted_profiles_first(profiles: &mut [Profile]) {
    promoted_first(profiles, |p| p.promoted);
}

/// Stable sort by rating, highest first. Equal ratings keep input order.
pub fn by_rating_desc(profiles: &mut [Profile]) {
    profiles.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}
