//! Cart errors.

use thiserror::Error;

use smartbasket::quotes::ValidationError;

/// Failures of the carts service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartsServiceError {
    /// No cart carries the requested identifier.
    #[error("cart not found")]
    NotFound,

    /// The item is not in the catalog, or not in the cart.
    #[error("unknown item: {item_id}")]
    UnknownItem {
        /// The offending item identifier.
        item_id: String,
    },

    /// A quantity that makes no sense for the operation (e.g. adding zero).
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// A structurally malformed cart line.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
