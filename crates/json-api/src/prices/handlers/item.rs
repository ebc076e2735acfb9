//! Single Item Quotes Handler

use std::sync::Arc;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use smartbasket::quotes::{PlatformQuote, QuoteSummary};
use smartbasket_app::domain::pricing::ItemQuoteRequest;

use crate::{extensions::*, prices::errors::into_status_error, state::State};

/// One platform's quote for an item.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlatformQuoteResponse {
    /// Platform display name
    pub platform: String,

    /// Quoted price, after any discount
    pub price: f64,

    /// Pre-discount price, when a discount applies
    pub original_price: Option<f64>,

    /// Discount percent, when one applies
    pub discount: Option<u8>,

    /// Whether the platform lists the item
    pub availability: bool,

    /// Whether the item is in stock
    pub in_stock: bool,

    /// Advertised delivery window
    pub delivery_time: String,

    /// Average customer rating, when known
    pub rating: Option<f64>,

    /// Number of customer reviews, when known
    pub review_count: Option<u32>,

    /// Platform display logo
    pub logo: String,

    /// Platform brand colour
    pub color: String,
}

impl From<PlatformQuote> for PlatformQuoteResponse {
    fn from(quote: PlatformQuote) -> Self {
        PlatformQuoteResponse {
            platform: quote.platform.to_string(),
            price: quote.price.to_f64().unwrap_or_default(),
            original_price: quote.original_price.and_then(|price| price.to_f64()),
            discount: quote.discount,
            availability: quote.availability,
            in_stock: quote.in_stock,
            delivery_time: quote.delivery_time.to_string(),
            rating: quote.rating.and_then(|rating| rating.to_f64()),
            review_count: quote.review_count,
            logo: quote.logo,
            color: quote.color,
        }
    }
}

/// Headline statistics over an item's quotes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteSummaryResponse {
    /// Cheapest quoted price
    pub lowest_price: f64,

    /// Most expensive quoted price
    pub highest_price: f64,

    /// Mean quoted price
    pub average_price: f64,

    /// Number of viable quotes
    pub available_platforms: usize,
}

impl From<QuoteSummary> for QuoteSummaryResponse {
    fn from(summary: QuoteSummary) -> Self {
        QuoteSummaryResponse {
            lowest_price: summary.lowest_price.to_f64().unwrap_or_default(),
            highest_price: summary.highest_price.to_f64().unwrap_or_default(),
            average_price: summary.average_price.to_f64().unwrap_or_default(),
            available_platforms: summary.available_platforms,
        }
    }
}

/// Quotes for a single item.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemQuotesResponse {
    /// Item identifier
    pub item_id: String,

    /// Quotes sorted ascending by price
    pub quotes: Vec<PlatformQuoteResponse>,

    /// Headline statistics; absent when no platform quoted
    pub summary: Option<QuoteSummaryResponse>,
}

/// Single Item Quotes Handler
///
/// Samples live quotes for one item across every platform.
#[endpoint(tags("prices"), summary = "Get Item Quotes")]
pub(crate) async fn handler(
    item: PathParam<String>,
    name: QueryParam<String, false>,
    base_price: QueryParam<f64, false>,
    save: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<ItemQuotesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = ItemQuoteRequest {
        item_id: item.into_inner(),
        item_name: name.into_inner(),
        base_price: base_price.into_inner().and_then(Decimal::from_f64_retain),
        save: save.into_inner().unwrap_or(false),
    };

    let quotes = state
        .app
        .pricing
        .quote_item(request)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ItemQuotesResponse {
        item_id: quotes.item_id,
        quotes: quotes.quotes.into_iter().map(Into::into).collect(),
        summary: quotes.summary.map(Into::into),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use smartbasket::{
        platforms::{DeliveryEstimate, Platform},
        quotes::ValidationError,
    };
    use smartbasket_app::domain::pricing::{ItemQuotes, MockPricingService, PricingServiceError};

    use crate::test_helpers::pricing_service;

    use super::*;

    fn make_quotes(item_id: &str) -> ItemQuotes {
        let quotes = vec![
            PlatformQuote::undiscounted(
                Platform::BigBasket,
                "47.50".parse().unwrap_or_default(),
                DeliveryEstimate::SameDay,
            ),
            PlatformQuote::undiscounted(
                Platform::Amazon,
                "52.00".parse().unwrap_or_default(),
                DeliveryEstimate::OneToTwoDays,
            ),
        ];

        ItemQuotes {
            item_id: item_id.to_string(),
            summary: QuoteSummary::of(&quotes),
            quotes,
        }
    }

    fn make_service(pricing: MockPricingService) -> Service {
        pricing_service(pricing, Router::with_path("prices/item/{item}").get(handler))
    }

    #[tokio::test]
    async fn test_item_quotes_returns_sorted_quotes() -> TestResult {
        let mut pricing = MockPricingService::new();

        pricing
            .expect_quote_item()
            .once()
            .withf(|request| request.item_id == "1" && !request.save)
            .return_once(|request| Ok(make_quotes(&request.item_id)));

        let response: ItemQuotesResponse = TestClient::get("http://example.com/prices/item/1")
            .send(&make_service(pricing))
            .await
            .take_json()
            .await?;

        assert_eq!(response.quotes.len(), 2, "expected two quotes");
        assert_eq!(
            response.quotes.first().map(|quote| quote.platform.as_str()),
            Some("BigBasket")
        );

        let summary = response.summary.ok_or("expected a summary")?;

        assert_eq!(summary.available_platforms, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_item_quotes_forwards_save_flag() -> TestResult {
        let mut pricing = MockPricingService::new();

        pricing
            .expect_quote_item()
            .once()
            .withf(|request| {
                request.save
                    && request.item_name.as_deref() == Some("Basmati Rice")
                    && request.base_price.is_some()
            })
            .return_once(|request| Ok(make_quotes(&request.item_id)));

        let res = TestClient::get(
            "http://example.com/prices/item/1?name=Basmati%20Rice&base_price=89.99&save=true",
        )
        .send(&make_service(pricing))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_item_id_returns_400() -> TestResult {
        let mut pricing = MockPricingService::new();

        pricing.expect_quote_item().once().return_once(|_| {
            Err(PricingServiceError::Validation(ValidationError::missing(
                "item_id",
            )))
        });

        let res = TestClient::get("http://example.com/prices/item/%20")
            .send(&make_service(pricing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
