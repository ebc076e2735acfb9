//! Logout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{errors::into_status_error, middleware::extract_bearer_token},
    extensions::*,
    state::State,
};

/// Logout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LogoutResponse {
    /// Confirmation message.
    pub message: String,
}

/// Logout Handler
///
/// Closes the session behind the presented bearer token.
#[endpoint(
    tags("auth"),
    summary = "Logout",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LogoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    // The middleware has already authenticated this token.
    let token = extract_bearer_token(req)
        .ok_or_else(|| StatusError::unauthorized().brief("Missing Authorization header"))?;

    state
        .app
        .auth
        .logout(token)
        .await
        .map_err(into_status_error)?;

    Ok(Json(LogoutResponse {
        message: "Logged out".to_string(),
    }))
}
