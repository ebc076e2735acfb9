//! Catalog service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;

use smartbasket::{
    catalog::{FilterSpec, Item},
    quotes::QuoteRequest,
    sampler::QuoteSource,
};

use crate::domain::catalog::{data, errors::CatalogServiceError};

/// An in-memory catalog seeded with the static grocery items.
///
/// The delivery and availability filter facets depend on quotes, so the
/// service samples preview quotes through its [`QuoteSource`] when a filter
/// asks for them.
pub struct InMemoryCatalogService {
    items: Vec<Item>,
    quotes: Arc<dyn QuoteSource>,
}

impl InMemoryCatalogService {
    /// A catalog over the seed items, sampling facet quotes from `quotes`.
    #[must_use]
    pub fn new(quotes: Arc<dyn QuoteSource>) -> Self {
        Self {
            items: data::seed_items(),
            quotes,
        }
    }

    fn facet_quotes_match(&self, filter: &FilterSpec, item: &Item) -> bool {
        let Ok(request) = QuoteRequest::new(
            item.id.clone(),
            Some(item.name.clone()),
            Some(item.base_price),
        ) else {
            return false;
        };

        filter.matches_quotes(&self.quotes.quotes(&request))
    }
}

impl Debug for InMemoryCatalogService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("InMemoryCatalogService")
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn list_items(&self, filter: FilterSpec) -> Result<Vec<Item>, CatalogServiceError> {
        let items = self
            .items
            .iter()
            .filter(|item| filter.matches_item(item))
            .filter(|item| !filter.needs_quotes() || self.facet_quotes_match(&filter, item))
            .cloned()
            .collect();

        Ok(items)
    }

    async fn get_item(&self, item_id: &str) -> Result<Item, CatalogServiceError> {
        self.items
            .iter()
            .find(|item| item.id == item_id)
            .cloned()
            .ok_or(CatalogServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves the catalog items passing the filter.
    async fn list_items(&self, filter: FilterSpec) -> Result<Vec<Item>, CatalogServiceError>;

    /// Retrieves a single catalog item.
    async fn get_item(&self, item_id: &str) -> Result<Item, CatalogServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use smartbasket::sampler::{RandomQuoteSource, SamplerProfile};

    use super::*;

    fn service() -> InMemoryCatalogService {
        InMemoryCatalogService::new(Arc::new(RandomQuoteSource::seeded(
            SamplerProfile::preview(),
            42,
        )))
    }

    #[tokio::test]
    async fn unfiltered_list_returns_whole_catalog() -> TestResult {
        let items = service().list_items(FilterSpec::default()).await?;

        assert_eq!(items.len(), 8);

        Ok(())
    }

    #[tokio::test]
    async fn category_filter_narrows_the_list() -> TestResult {
        let filter = FilterSpec {
            category: Some("Dairy".into()),
            ..FilterSpec::default()
        };

        let items = service().list_items(filter).await?;

        assert_eq!(items.len(), 2, "the seed catalog has two dairy items");
        assert!(items.iter().all(|item| item.category == "Dairy"));

        Ok(())
    }

    #[tokio::test]
    async fn inverted_price_bounds_return_empty_list() -> TestResult {
        let filter = FilterSpec {
            min_price: Some(Decimal::ONE_HUNDRED),
            max_price: Some(Decimal::TEN),
            ..FilterSpec::default()
        };

        let items = service().list_items(filter).await?;

        assert!(items.is_empty(), "min > max matches nothing");

        Ok(())
    }

    #[tokio::test]
    async fn get_item_returns_seeded_item() -> TestResult {
        let item = service().get_item("4").await?;

        assert_eq!(item.name, "Fresh Milk");
        assert_eq!(item.base_price, Decimal::new(2800, 2));

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_item_returns_not_found() {
        let result = service().get_item("999").await;

        assert_eq!(result, Err(CatalogServiceError::NotFound));
    }
}
