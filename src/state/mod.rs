/// Catalog state module
///
/// This module handles everything read from the Lightroom catalog:
/// - Database connections and queries (catalog.rs)
/// - Shared data structures (data.rs)

pub mod catalog;
pub mod data;

pub use catalog::{Catalog, CatalogError};
pub use data::CatalogRecord;
