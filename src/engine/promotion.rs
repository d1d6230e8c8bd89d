use serde::{Deserialize, Serialize};

/// Multiplier boost for the homepage-highlight option
pub const HOMEPAGE_HIGHLIGHT_BOOST: f64 = 0.5;
/// Multiplier boost for the search-priority option
pub const SEARCH_PRIORITY_BOOST: f64 = 0.3;
/// Multiplier boost for the featured-badge option
pub const FEATURED_BADGE_BOOST: f64 = 0.2;
/// Multiplier boost per selected targeting facet (region, demographic, type)
pub const TARGETING_FACET_BOOST: f64 = 0.1;

/// Everything the promote-listing page lets a seller pick. The quote is a
/// pure function of this struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromotionPlan {
    /// Price per day in whole currency units
    pub base_price_per_day: i64,
    pub duration_days: u32,
    pub homepage_highlight: bool,
    pub search_priority: bool,
    pub featured_badge: bool,
    pub regions: Vec<String>,
    pub demographics: Vec<String>,
    pub property_types: Vec<String>,
}

impl PromotionPlan {
    /// Starts at 1.0 and accumulates a fixed increment per boolean option
    /// plus 0.1 per selected targeting facet.
    pub fn multiplier(&self) -> f64 {
        let mut multiplier = 1.0;
        if self.homepage_highlight {
            multiplier += HOMEPAGE_HIGHLIGHT_BOOST;
        }
        if self.search_priority {
            multiplier += SEARCH_PRIORITY_BOOST;
        }
        if self.featured_badge {
            multiplier += FEATURED_BADGE_BOOST;
        }
        let facet_count = self.regions.len() + self.demographics.len() + self.property_types.len();
        multiplier + TARGETING_FACET_BOOST * facet_count as f64
    }

    /// Total price: base × days × multiplier, rounded to whole currency
    /// units at the very end (half away from zero).
    pub fn quote(&self) -> i64 {
        let raw = self.base_price_per_day as f64 * self.duration_days as f64 * self.multiplier();
        raw.round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_plan() -> PromotionPlan {
        PromotionPlan {
            base_price_per_day: 100_000,
            duration_days: 30,
            ..PromotionPlan::default()
        }
    }

    #[test]
    fn bare_plan_is_base_times_days() {
        assert_eq!(base_plan().quote(), 3_000_000);
    }

    #[test]
    fn homepage_highlight_adds_half() {
        let plan = PromotionPlan {
            homepage_highlight: true,
            ..base_plan()
        };
        assert_eq!(plan.quote(), 4_500_000);
    }

    #[test]
    fn each_targeting_facet_adds_a_tenth() {
        let plan = PromotionPlan {
            regions: vec!["Bali".to_string(), "Jakarta".to_string()],
            demographics: vec!["Expats".to_string()],
            ..base_plan()
        };
        // 1.0 + 3 × 0.1
        assert_eq!(plan.quote(), 3_900_000);
    }

    #[test]
    fn every_option_strictly_increases_the_quote() {
        let mut plan = base_plan();
        let mut last = plan.quote();

        plan.search_priority = true;
        assert!(plan.quote() > last);
        last = plan.quote();

        plan.featured_badge = true;
        assert!(plan.quote() > last);
        last = plan.quote();

        plan.property_types.push("Villa".to_string());
        assert!(plan.quote() > last);
    }

    #[test]
    fn quote_rounds_to_whole_currency_units() {
        let plan = PromotionPlan {
            base_price_per_day: 333,
            duration_days: 1,
            homepage_highlight: true,
            ..PromotionPlan::default()
        };
        // 333 × 1.5 = 499.5, rounds away from zero
        assert_eq!(plan.quote(), 500);
    }
}
