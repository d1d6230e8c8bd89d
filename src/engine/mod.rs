pub mod aggregate;
pub mod filter;
pub mod promotion;
pub mod query;
pub mod sort;

pub use filter::{FilterState, ProfileFilter};
pub use promotion::PromotionPlan;
pub use query::SearchQuery;
