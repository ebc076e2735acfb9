//! Watchlist Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{auth::errors::into_status_error, extensions::*, state::State};

/// Watchlist Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WatchlistRequest {
    /// Item identifier to watch.
    pub item_id: String,
}

/// Watchlist Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WatchlistResponse {
    /// The watched item identifiers after the addition.
    pub saved_items: Vec<String>,
}

/// Watchlist Handler
///
/// Adds an item to the authenticated user's price watchlist.
#[endpoint(
    tags("prices"),
    summary = "Watch Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item added to watchlist"),
        (status_code = StatusCode::CONFLICT, description = "Item already watched"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<WatchlistRequest>,
    depot: &mut Depot,
) -> Result<Json<WatchlistResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let profile = state
        .app
        .auth
        .add_watchlist_item(user, &json.into_inner().item_id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(WatchlistResponse {
        saved_items: profile.saved_items,
    }))
}
