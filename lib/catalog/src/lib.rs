pub mod document;
pub mod sample;
pub mod store;

pub use document::{load_catalog, CatalogDocument, ItemRecord};
pub use sample::{sample_catalog, sample_candidates};
pub use store::{CatalogSource, CatalogStore};
