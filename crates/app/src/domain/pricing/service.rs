//! Pricing service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::warn;

use smartbasket::{
    basket::CartLine,
    compare::compare,
    platforms::Platform,
    quotes::{QuoteRequest, QuoteSummary},
    sampler::QuoteSource,
    totals::{aggregate, best_deal_by_regret},
};

use crate::domain::pricing::{
    errors::PricingServiceError,
    history::PriceHistoryRepository,
    models::{
        BulkComparison, CompareItem, ItemQuoteRequest, ItemQuotes, PlatformPriceHistory,
        PricePoint,
    },
};

/// History windows are capped to a year.
const MAX_HISTORY_DAYS: u32 = 365;

/// Pricing over a [`QuoteSource`], recording sampled quotes into a
/// [`PriceHistoryRepository`] when asked to.
pub struct SamplerPricingService {
    quotes: Arc<dyn QuoteSource>,
    history: Arc<dyn PriceHistoryRepository>,
}

impl SamplerPricingService {
    /// A pricing service sampling from `quotes` and recording into `history`.
    #[must_use]
    pub fn new(quotes: Arc<dyn QuoteSource>, history: Arc<dyn PriceHistoryRepository>) -> Self {
        Self { quotes, history }
    }
}

impl Debug for SamplerPricingService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SamplerPricingService").finish_non_exhaustive()
    }
}

#[async_trait]
impl PricingService for SamplerPricingService {
    async fn quote_item(
        &self,
        request: ItemQuoteRequest,
    ) -> Result<ItemQuotes, PricingServiceError> {
        let quote_request =
            QuoteRequest::new(request.item_id, request.item_name, request.base_price)?;

        let quotes = self.quotes.quotes(&quote_request);

        if request.save {
            // Recording is best-effort and must never fail the request.
            let history = Arc::clone(&self.history);
            let item_id = quote_request.item_id.clone();
            let saved = quotes.clone();

            tokio::spawn(async move {
                if let Err(error) = history.record(item_id.clone(), saved).await {
                    warn!(item_id, %error, "failed to record price history");
                }
            });
        }

        Ok(ItemQuotes {
            item_id: quote_request.item_id,
            summary: QuoteSummary::of(&quotes),
            quotes,
        })
    }

    async fn compare(
        &self,
        items: Vec<CompareItem>,
    ) -> Result<BulkComparison, PricingServiceError> {
        let mut comparisons = Vec::with_capacity(items.len());

        for item in items {
            let request = QuoteRequest::new(item.item_id, item.item_name, item.base_price)?;
            let quotes = self.quotes.quotes(&request);
            let quantity = item.quantity.max(1);

            let line = CartLine::new(
                request.item_id,
                request.item_name,
                request.base_price,
                quantity,
                quotes,
            );

            comparisons.push(compare(&line)?);
        }

        let totals = aggregate(&comparisons);
        let alternate = best_deal_by_regret(&comparisons);

        Ok(BulkComparison {
            comparisons,
            totals,
            alternate,
        })
    }

    async fn history(
        &self,
        item_id: &str,
        days: u32,
    ) -> Result<Vec<PlatformPriceHistory>, PricingServiceError> {
        let days = days.clamp(1, MAX_HISTORY_DAYS);
        let since = Timestamp::now()
            .checked_sub(SignedDuration::from_hours(i64::from(days) * 24))
            .unwrap_or(Timestamp::MIN);

        let observations = self.history.observations_since(item_id, since).await?;

        let mut grouped: FxHashMap<Platform, Vec<PricePoint>> = FxHashMap::default();

        for observation in observations {
            grouped.entry(observation.platform).or_default().push(PricePoint {
                price: observation.price,
                recorded_at: observation.recorded_at,
            });
        }

        let mut histories: Vec<PlatformPriceHistory> = grouped
            .into_iter()
            .map(|(platform, mut points)| {
                points.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

                PlatformPriceHistory { platform, points }
            })
            .collect();

        histories.sort_by_key(|history| history.platform);

        Ok(histories)
    }
}

#[automock]
#[async_trait]
pub trait PricingService: Send + Sync {
    /// Samples quotes for one item, optionally recording them.
    async fn quote_item(
        &self,
        request: ItemQuoteRequest,
    ) -> Result<ItemQuotes, PricingServiceError>;

    /// Compares a list of items across platforms.
    async fn compare(&self, items: Vec<CompareItem>)
    -> Result<BulkComparison, PricingServiceError>;

    /// Retrieves an item's recorded prices per platform, newest first.
    async fn history(
        &self,
        item_id: &str,
        days: u32,
    ) -> Result<Vec<PlatformPriceHistory>, PricingServiceError>;
}
