//! Catalog domain: the static grocery catalog and browsing filters.

pub mod data;
pub mod errors;
pub mod service;

pub use errors::CatalogServiceError;
pub use service::{CatalogService, InMemoryCatalogService, MockCatalogService};
