//! Catalog errors.

use thiserror::Error;

/// Failures of the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogServiceError {
    /// No catalog item carries the requested identifier.
    #[error("item not found")]
    NotFound,
}
