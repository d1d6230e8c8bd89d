pub mod mock;
pub mod traits;

pub use mock::MockCatalog;
pub use traits::Catalog;
