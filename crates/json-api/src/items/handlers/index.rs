//! Item Index Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use smartbasket::catalog::FilterSpec;

use crate::{extensions::*, items::get::ItemResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemsResponse {
    /// The list of catalog items
    pub items: Vec<ItemResponse>,
}

/// Item Index Handler
///
/// Returns the catalog items passing the query filters.
#[endpoint(tags("items"), summary = "List Items")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    brand: QueryParam<String, false>,
    min_price: QueryParam<f64, false>,
    max_price: QueryParam<f64, false>,
    delivery_time: QueryParam<String, false>,
    available_only: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<ItemsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let delivery_time = delivery_time
        .into_inner()
        .map(|value| {
            serde_json::from_value(serde_json::Value::String(value))
                .map_err(|_unknown| StatusError::bad_request().brief("Unknown delivery_time"))
        })
        .transpose()?;

    let filter = FilterSpec {
        category: category.into_inner(),
        brand: brand.into_inner(),
        min_price: min_price.into_inner().and_then(Decimal::from_f64_retain),
        max_price: max_price.into_inner().and_then(Decimal::from_f64_retain),
        delivery_time,
        available_only: available_only.into_inner().unwrap_or(false),
    };

    let items = state
        .app
        .catalog
        .list_items(filter)
        .await
        .or_500("failed to list catalog items")?;

    Ok(Json(ItemsResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}
