//! Bulk Comparison Handler

use std::sync::Arc;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use smartbasket::{
    compare::ComparisonResult,
    totals::{CartComparison, PlatformRegret, PlatformTotal},
};
use smartbasket_app::domain::pricing::{BulkComparison, CompareItem};

use crate::{
    extensions::*, prices::errors::into_status_error, prices::handlers::item::PlatformQuoteResponse,
    state::State,
};

/// One item of a bulk comparison request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompareItemRequest {
    /// Item identifier.
    pub item_id: String,
    /// Display name; defaulted when absent.
    pub item_name: Option<String>,
    /// Reference price; defaulted when absent.
    pub base_price: Option<f64>,
    /// Units wanted; defaults to one.
    pub quantity: Option<u32>,
}

impl From<CompareItemRequest> for CompareItem {
    fn from(request: CompareItemRequest) -> Self {
        CompareItem {
            item_id: request.item_id,
            item_name: request.item_name,
            base_price: request.base_price.and_then(Decimal::from_f64_retain),
            quantity: request.quantity.unwrap_or(1),
        }
    }
}

/// Bulk Comparison Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompareRequest {
    /// Items to compare.
    pub items: Vec<CompareItemRequest>,
}

/// One item's comparison across platforms.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ComparisonEntryResponse {
    /// Item identifier
    pub item_id: String,

    /// Units compared
    pub quantity: u32,

    /// Every platform's quote, sorted ascending by price
    pub platforms: Vec<PlatformQuoteResponse>,

    /// The cheapest viable quote, when one exists
    pub cheapest: Option<PlatformQuoteResponse>,
}

impl From<ComparisonResult> for ComparisonEntryResponse {
    fn from(result: ComparisonResult) -> Self {
        ComparisonEntryResponse {
            item_id: result.item_id,
            quantity: result.quantity,
            platforms: result.all_platforms.into_iter().map(Into::into).collect(),
            cheapest: result.cheapest_viable.map(Into::into),
        }
    }
}

/// One platform's basket total.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlatformTotalResponse {
    /// Platform display name
    pub platform: String,

    /// Basket total across viable lines
    pub total: f64,

    /// Number of lines the platform could fulfil
    pub items: u32,

    /// Platform brand colour
    pub color: String,
}

impl From<PlatformTotal> for PlatformTotalResponse {
    fn from(total: PlatformTotal) -> Self {
        PlatformTotalResponse {
            platform: total.platform.to_string(),
            total: total.total.to_f64().unwrap_or_default(),
            items: total.items,
            color: total.color,
        }
    }
}

/// Basket totals and the primary recommendation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartComparisonResponse {
    /// Per-platform totals, cheapest first
    pub platform_totals: Vec<PlatformTotalResponse>,

    /// The cheapest platform, when totals exist
    pub best_platform: Option<String>,

    /// Spread between the dearest and cheapest platform totals
    pub total_savings: f64,
}

impl From<CartComparison> for CartComparisonResponse {
    fn from(comparison: CartComparison) -> Self {
        CartComparisonResponse {
            platform_totals: comparison
                .platform_totals
                .into_iter()
                .map(Into::into)
                .collect(),
            best_platform: comparison
                .best_platform
                .map(|platform| platform.to_string()),
            total_savings: comparison.total_savings.to_f64().unwrap_or_default(),
        }
    }
}

/// The lowest-aggregate-overcharge recommendation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlatformRegretResponse {
    /// Platform display name
    pub platform: String,

    /// Total overcharge versus per-line minima
    pub regret: f64,
}

impl From<PlatformRegret> for PlatformRegretResponse {
    fn from(regret: PlatformRegret) -> Self {
        PlatformRegretResponse {
            platform: regret.platform.to_string(),
            regret: regret.regret.to_f64().unwrap_or_default(),
        }
    }
}

/// Bulk Comparison Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompareResponse {
    /// Per-item comparison results
    pub comparisons: Vec<ComparisonEntryResponse>,

    /// Basket totals and recommendation
    pub totals: CartComparisonResponse,

    /// Alternate recommendation by aggregate overcharge
    pub alternate: Option<PlatformRegretResponse>,
}

impl From<BulkComparison> for CompareResponse {
    fn from(comparison: BulkComparison) -> Self {
        CompareResponse {
            comparisons: comparison.comparisons.into_iter().map(Into::into).collect(),
            totals: comparison.totals.into(),
            alternate: comparison.alternate.map(Into::into),
        }
    }
}

/// Bulk Comparison Handler
///
/// Compares a list of items across every platform.
#[endpoint(
    tags("prices"),
    summary = "Compare Items",
    responses(
        (status_code = StatusCode::OK, description = "Comparison computed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty or malformed item list"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CompareRequest>,
    depot: &mut Depot,
) -> Result<Json<CompareResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if request.items.is_empty() {
        return Err(StatusError::bad_request().brief("items must not be empty"));
    }

    let comparison = state
        .app
        .pricing
        .compare(request.items.into_iter().map(Into::into).collect())
        .await
        .map_err(into_status_error)?;

    Ok(Json(comparison.into()))
}
