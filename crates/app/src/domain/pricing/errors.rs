//! Pricing errors.

use thiserror::Error;

use smartbasket::quotes::ValidationError;

/// Failures of the pricing service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingServiceError {
    /// A structurally malformed quote or comparison request.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The price history store could not be read.
    #[error("price history store unavailable")]
    HistoryUnavailable,
}
