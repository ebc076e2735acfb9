//! Price History Handler

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use smartbasket_app::domain::pricing::{PlatformPriceHistory, PricePoint};

use crate::{extensions::*, prices::errors::into_status_error, state::State};

/// Days of history returned when the query does not say.
const DEFAULT_HISTORY_DAYS: u32 = 30;

/// One recorded price observation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PricePointResponse {
    /// Observed price
    pub price: f64,

    /// When the observation was recorded
    pub recorded_at: String,
}

impl From<PricePoint> for PricePointResponse {
    fn from(point: PricePoint) -> Self {
        PricePointResponse {
            price: point.price.to_f64().unwrap_or_default(),
            recorded_at: point.recorded_at.to_string(),
        }
    }
}

/// One platform's price history.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlatformHistoryResponse {
    /// Platform display name
    pub platform: String,

    /// Observations, newest first
    pub points: Vec<PricePointResponse>,
}

impl From<PlatformPriceHistory> for PlatformHistoryResponse {
    fn from(history: PlatformPriceHistory) -> Self {
        PlatformHistoryResponse {
            platform: history.platform.to_string(),
            points: history.points.into_iter().map(Into::into).collect(),
        }
    }
}

/// Price History Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceHistoryResponse {
    /// Item identifier
    pub item_id: String,

    /// Days of history covered
    pub days: u32,

    /// Per-platform observations
    pub platforms: Vec<PlatformHistoryResponse>,
}

/// Price History Handler
///
/// Returns an item's recorded prices per platform, newest first.
#[endpoint(
    tags("prices"),
    summary = "Get Price History",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    item: PathParam<String>,
    days: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<PriceHistoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.user_uuid_or_401()?;

    let item_id = item.into_inner();
    let days = days.into_inner().unwrap_or(DEFAULT_HISTORY_DAYS);

    let platforms = state
        .app
        .pricing
        .history(&item_id, days)
        .await
        .map_err(into_status_error)?;

    Ok(Json(PriceHistoryResponse {
        item_id,
        days,
        platforms: platforms.into_iter().map(Into::into).collect(),
    }))
}
