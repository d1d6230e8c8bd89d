use crate::models::{ChatCategory, ChatThread, Listing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-category sum of unread message counts. This is the badge number the
/// agent/developer dashboards show ("N unread messages"); categories with
/// nothing unread are absent from the map.
pub fn unread_by_category(threads: &[ChatThread]) -> BTreeMap<ChatCategory, u32> {
    let mut totals = BTreeMap::new();
    for thread in threads {
        if thread.unread > 0 {
            *totals.entry(thread.category).or_insert(0) += thread.unread;
        }
    }
    totals
}

/// Number of threads in a category with at least one unread message, the
/// compact variant the generic chat bubble renders.
pub fn threads_with_unread(threads: &[ChatThread], category: ChatCategory) -> usize {
    threads
        .iter()
        .filter(|t| t.category == category && t.unread > 0)
        .count()
}

/// One histogram bucket; `upper` is `None` for the trailing open-ended bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub lower: i64,
    pub upper: Option<i64>,
    pub count: usize,
}

/// Count values into half-open buckets `[bounds[i], bounds[i+1])` plus a
/// final `[bounds[last], ∞)` bucket. Values below the first bound are not
/// counted. Bounds must be ascending.
fn histogram(values: impl Iterator<Item = i64>, bounds: &[i64]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = bounds
        .windows(2)
        .map(|w| Bucket {
            lower: w[0],
            upper: Some(w[1]),
            count: 0,
        })
        .collect();
    if let Some(&last) = bounds.last() {
        buckets.push(Bucket {
            lower: last,
            upper: None,
            count: 0,
        });
    }

    for value in values {
        for bucket in buckets.iter_mut() {
            let above_lower = value >= bucket.lower;
            let below_upper = bucket.upper.map(|u| value < u).unwrap_or(true);
            if above_lower && below_upper {
                bucket.count += 1;
                break;
            }
        }
    }

    buckets
}

/// Price distribution across the whole catalog (properties and projects).
pub fn price_histogram(listings: &[Listing], bounds: &[i64]) -> Vec<Bucket> {
    histogram(listings.iter().map(|l| l.price()), bounds)
}

/// Area distribution; projects carry no area and are skipped.
pub fn area_histogram(listings: &[Listing], bounds: &[i64]) -> Vec<Bucket> {
    histogram(
        listings.iter().filter_map(|l| match l {
            Listing::Property(p) => Some(p.area_sqm as i64),
            Listing::Project(_) => None,
        }),
        bounds,
    )
}
