use crate::engine::filter::FilterState;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The query parameters the search-results route understands: `location`,
/// `type`, and `price` as `min-max` with either side omittable
/// (`-5000000`, `1000000-`). Everything else in the query string is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub price: Option<(i64, i64)>,
}

impl SearchQuery {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut query = SearchQuery::default();
        for (key, value) in pairs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match *key {
                "location" => query.location = Some(value.to_string()),
                "type" => query.property_type = Some(value.to_string()),
                "price" => query.price = parse_price_range(value),
                _ => {}
            }
        }
        query
    }

    /// Lower into the facet representation the listings filter runs on.
    pub fn into_filter(self) -> FilterState {
        FilterState {
            property_types: self.property_type.into_iter().collect(),
            location: self.location,
            price_range: self.price,
            ..FilterState::default()
        }
    }
}

/// `min-max` with inclusive bounds; an omitted side falls back to 0 or
/// i64::MAX. Malformed input is dropped rather than guessed at.
fn parse_price_range(raw: &str) -> Option<(i64, i64)> {
    let Some((min_part, max_part)) = raw.split_once('-') else {
        warn!("ignoring price range without separator: {raw:?}");
        return None;
    };
    if min_part.is_empty() && max_part.is_empty() {
        warn!("ignoring empty price range");
        return None;
    }

    let min = if min_part.is_empty() {
        0
    } else {
        match min_part.parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                warn!("ignoring unparsable price range: {raw:?}");
                return None;
            }
        }
    };
    let max = if max_part.is_empty() {
        i64::MAX
    } else {
        match max_part.parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                warn!("ignoring unparsable price range: {raw:?}");
                return None;
            }
        }
    };

    if min > max {
        warn!("ignoring inverted price range: {raw:?}");
        return None;
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_known_keys() {
        let query = SearchQuery::from_pairs(&[
            ("location", "Bali"),
            ("type", "Villa"),
            ("price", "1000000-5000000"),
            ("utm_source", "newsletter"),
        ]);

        assert_eq!(query.location.as_deref(), Some("Bali"));
        assert_eq!(query.property_type.as_deref(), Some("Villa"));
        assert_eq!(query.price, Some((1_000_000, 5_000_000)));
    }

    #[test]
    fn open_ended_price_ranges_fill_in_extremes() {
        let low = SearchQuery::from_pairs(&[("price", "-5000000")]);
        assert_eq!(low.price, Some((0, 5_000_000)));

        let high = SearchQuery::from_pairs(&[("price", "1000000-")]);
        assert_eq!(high.price, Some((1_000_000, i64::MAX)));
    }

    #[test]
    fn malformed_price_is_dropped() {
        assert_eq!(SearchQuery::from_pairs(&[("price", "cheap")]).price, None);
        assert_eq!(SearchQuery::from_pairs(&[("price", "-")]).price, None);
        assert_eq!(
            SearchQuery::from_pairs(&[("price", "9000-100")]).price,
            None
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        let query = SearchQuery::from_pairs(&[("location", "  "), ("type", "")]);
        assert_eq!(query, SearchQuery::default());
    }

    #[test]
    fn lowers_into_filter_state() {
        let filter = SearchQuery {
            location: Some("Bali".to_string()),
            property_type: Some("Villa".to_string()),
            price: Some((0, 2_000_000)),
        }
        .into_filter();

        assert_eq!(filter.property_types, vec!["Villa".to_string()]);
        assert_eq!(filter.location.as_deref(), Some("Bali"));
        assert_eq!(filter.price_range, Some((0, 2_000_000)));
        assert!(filter.features.is_empty());
    }
}
