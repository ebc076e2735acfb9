//! Get Item Handler

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use smartbasket::catalog::Item;

use crate::{extensions::*, items::errors::into_status_error, state::State};

/// A catalog item.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// The unique identifier of the item
    pub id: String,

    /// Display name
    pub name: String,

    /// Category, e.g. "Dairy"
    pub category: String,

    /// Brand name
    pub brand: String,

    /// Sales unit, e.g. "1 kg"
    pub unit: String,

    /// Reference price quotes are sampled around
    pub base_price: f64,

    /// Product image URL
    pub image: String,

    /// Short description
    pub description: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        ItemResponse {
            id: item.id,
            name: item.name,
            category: item.category,
            brand: item.brand,
            unit: item.unit,
            base_price: item.base_price.to_f64().unwrap_or_default(),
            image: item.image,
            description: item.description,
        }
    }
}

/// Get Item Handler
///
/// Returns a catalog item.
#[endpoint(tags("items"), summary = "Get Item")]
pub(crate) async fn handler(
    item: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .catalog
        .get_item(&item.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
