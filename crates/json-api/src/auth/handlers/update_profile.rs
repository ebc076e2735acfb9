//! Update Profile Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use smartbasket_app::domain::auth::ProfileUpdate;

use crate::{
    auth::{errors::into_status_error, handlers::profile::UserResponse},
    extensions::*,
    state::State,
};

/// Update Profile Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProfileRequest {
    /// New display name.
    pub name: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// Replacement watched-item list.
    pub saved_items: Option<Vec<String>>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            name: request.name,
            email: request.email,
            saved_items: request.saved_items,
        }
    }
}

/// Update Profile Handler
///
/// Applies a partial update to the authenticated user's profile.
#[endpoint(
    tags("auth"),
    summary = "Update Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let profile = state
        .app
        .auth
        .update_profile(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(profile.into()))
}
