//! Price history repository.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use smartbasket::{platforms::Platform, quotes::PlatformQuote};

use crate::domain::pricing::errors::PricingServiceError;

/// One stored quote observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceObservation {
    /// The quoting platform.
    pub platform: Platform,
    /// Observed price.
    pub price: Decimal,
    /// When the observation was recorded.
    pub recorded_at: Timestamp,
}

#[automock]
#[async_trait]
pub trait PriceHistoryRepository: Send + Sync {
    /// Records one observation per quote under the item.
    async fn record(
        &self,
        item_id: String,
        quotes: Vec<PlatformQuote>,
    ) -> Result<(), PricingServiceError>;

    /// Retrieves the observations for an item recorded at or after `since`.
    async fn observations_since(
        &self,
        item_id: &str,
        since: Timestamp,
    ) -> Result<Vec<PriceObservation>, PricingServiceError>;
}

/// Price observations held in process memory, keyed by item identifier.
#[derive(Debug, Default)]
pub struct InMemoryPriceHistory {
    store: RwLock<FxHashMap<String, Vec<PriceObservation>>>,
}

impl InMemoryPriceHistory {
    /// An empty history store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn record_at(&self, item_id: String, quotes: Vec<PlatformQuote>, at: Timestamp) {
        let mut store = self.store.write().await;
        let observations = store.entry(item_id).or_default();

        observations.extend(quotes.into_iter().map(|quote| PriceObservation {
            platform: quote.platform,
            price: quote.price,
            recorded_at: at,
        }));
    }
}

#[async_trait]
impl PriceHistoryRepository for InMemoryPriceHistory {
    async fn record(
        &self,
        item_id: String,
        quotes: Vec<PlatformQuote>,
    ) -> Result<(), PricingServiceError> {
        self.record_at(item_id, quotes, Timestamp::now()).await;

        Ok(())
    }

    async fn observations_since(
        &self,
        item_id: &str,
        since: Timestamp,
    ) -> Result<Vec<PriceObservation>, PricingServiceError> {
        let store = self.store.read().await;

        let observations = store
            .get(item_id)
            .map(|observations| {
                observations
                    .iter()
                    .filter(|observation| observation.recorded_at >= since)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(observations)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use smartbasket::{
        platforms::{DeliveryEstimate, Platform},
        quotes::PlatformQuote,
    };

    use super::*;

    fn quote(price: &str) -> PlatformQuote {
        PlatformQuote::undiscounted(
            Platform::Amazon,
            price.parse().unwrap_or_default(),
            DeliveryEstimate::SameDay,
        )
    }

    #[tokio::test]
    async fn observations_outside_the_window_are_dropped() -> TestResult {
        let history = InMemoryPriceHistory::new();
        let now = Timestamp::now();
        let old = now - jiff::SignedDuration::from_hours(48);

        history
            .record_at("1".into(), vec![quote("10.00")], old)
            .await;
        history
            .record_at("1".into(), vec![quote("11.00")], now)
            .await;

        let since = now - jiff::SignedDuration::from_hours(24);
        let observations = history.observations_since("1", since).await?;

        assert_eq!(observations.len(), 1);
        assert_eq!(
            observations.first().map(|observation| observation.price),
            Some("11.00".parse()?)
        );

        Ok(())
    }

    #[tokio::test]
    async fn unseen_item_has_no_observations() -> TestResult {
        let history = InMemoryPriceHistory::new();

        let observations = history.observations_since("404", Timestamp::MIN).await?;

        assert!(observations.is_empty());

        Ok(())
    }
}
