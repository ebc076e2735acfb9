//! App Context

use std::sync::Arc;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use smartbasket::sampler::{QuoteSource, RandomQuoteSource, SamplerProfile};

use crate::domain::{
    auth::{AuthService, InMemoryAuthService, LogOtpSender},
    carts::{CartsService, InMemoryCartsService},
    catalog::{CatalogService, InMemoryCatalogService},
    pricing::{InMemoryPriceHistory, PricingService, SamplerPricingService},
};

/// A point-in-time health report for the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Whether the service can take requests.
    pub healthy: bool,
    /// When the report was taken.
    pub checked_at: Timestamp,
}

/// The service graph handed to the HTTP layer.
///
/// Catalog browsing and cart adds sample through the cheaper preview profile;
/// the pricing endpoints use the full profile.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub carts: Arc<dyn CartsService>,
    pub pricing: Arc<dyn PricingService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Builds the in-memory service graph with entropy-seeded samplers.
    #[must_use]
    pub fn new() -> Self {
        Self::from_sources(
            Arc::new(RandomQuoteSource::new(SamplerProfile::preview())),
            Arc::new(RandomQuoteSource::new(SamplerProfile::full())),
        )
    }

    /// A deterministic context for tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_sources(
            Arc::new(RandomQuoteSource::seeded(SamplerProfile::preview(), seed)),
            Arc::new(RandomQuoteSource::seeded(SamplerProfile::full(), seed)),
        )
    }

    fn from_sources(preview: Arc<dyn QuoteSource>, full: Arc<dyn QuoteSource>) -> Self {
        let catalog = Arc::new(InMemoryCatalogService::new(Arc::clone(&preview)));

        Self {
            carts: Arc::new(InMemoryCartsService::new(catalog.clone(), preview)),
            catalog,
            pricing: Arc::new(SamplerPricingService::new(
                full,
                Arc::new(InMemoryPriceHistory::new()),
            )),
            auth: Arc::new(InMemoryAuthService::new(Arc::new(LogOtpSender))),
        }
    }

    /// The current health report.
    #[must_use]
    pub fn health(&self) -> ServiceHealth {
        ServiceHealth {
            healthy: true,
            checked_at: Timestamp::now(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use smartbasket::catalog::FilterSpec;

    use super::*;

    #[tokio::test]
    async fn seeded_context_serves_the_catalog() -> TestResult {
        let context = AppContext::seeded(42);

        let items = context.catalog.list_items(FilterSpec::default()).await?;

        assert_eq!(items.len(), 8);
        assert!(context.health().healthy);

        Ok(())
    }
}
