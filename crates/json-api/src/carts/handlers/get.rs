//! Get Cart Handler

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use smartbasket::basket::CartLine;
use smartbasket_app::domain::carts::Cart;

use crate::{
    carts::errors::into_status_error, extensions::*,
    prices::handlers::item::PlatformQuoteResponse, state::State,
};

/// One line of a cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// Item identifier
    pub item_id: String,

    /// Display name
    pub item_name: String,

    /// Reference price the quotes were sampled from
    pub base_price: f64,

    /// Units in the cart
    pub quantity: u32,

    /// Quotes attached when the item was added
    pub quotes: Vec<PlatformQuoteResponse>,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        CartLineResponse {
            item_id: line.item_id,
            item_name: line.item_name,
            base_price: line.base_price.to_f64().unwrap_or_default(),
            quantity: line.quantity,
            quotes: line.quotes.into_iter().map(Into::into).collect(),
        }
    }
}

/// A shopping cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// Lines in the cart, in insertion order
    pub lines: Vec<CartLineResponse>,

    /// When the cart was created
    pub created_at: String,

    /// When the cart last changed
    pub updated_at: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        CartResponse {
            uuid: cart.uuid,
            lines: cart.lines.into_iter().map(Into::into).collect(),
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}

/// Get Cart Handler
///
/// Returns a cart.
#[endpoint(tags("carts"), summary = "Get Cart")]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart(cart.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
