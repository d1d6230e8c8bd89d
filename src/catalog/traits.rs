use crate::models::{ChatThread, Listing, Profile};
use anyhow::Result;

/// Common trait for all marketplace data sources.
/// This allows swapping the in-memory mock for a real backend later.
pub trait Catalog {
    /// Every listing the source knows about, properties and projects mixed
    fn listings(&self) -> Result<Vec<Listing>>;

    /// Agent/developer/owner profiles for the lookout page
    fn profiles(&self) -> Result<Vec<Profile>>;

    /// Chat threads for the dashboards
    fn chat_threads(&self) -> Result<Vec<ChatThread>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
