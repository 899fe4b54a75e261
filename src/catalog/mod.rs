pub mod criteria;
pub mod filter;
pub mod sort;
pub mod source;
pub mod store;
pub mod window;

pub use criteria::{CatalogQuery, Criteria, PriceRange, SortKey};
pub use source::{CatalogError, SnapshotSource};
pub use store::{CatalogStore, CatalogView, StoreStatus};
pub use window::DEFAULT_PAGE_SIZE;
