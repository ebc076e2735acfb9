//! Get Profile Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use smartbasket_app::domain::auth::User;

use crate::{auth::errors::into_status_error, extensions::*, state::State};

/// A user profile.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub uuid: Uuid,

    /// Verified phone number
    pub phone: String,

    /// Display name
    pub name: String,

    /// Contact email, if provided
    pub email: Option<String>,

    /// Watched item identifiers
    pub saved_items: Vec<String>,

    /// When the user registered
    pub created_at: String,

    /// When the user last signed in
    pub last_login: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            uuid: user.uuid,
            phone: user.phone,
            name: user.name,
            email: user.email,
            saved_items: user.saved_items,
            created_at: user.created_at.to_string(),
            last_login: user.last_login.to_string(),
        }
    }
}

/// Get Profile Handler
///
/// Returns the authenticated user's profile.
#[endpoint(
    tags("auth"),
    summary = "Get Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let profile = state
        .app
        .auth
        .profile(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(profile.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use smartbasket_app::domain::auth::{AuthServiceError, MockAuthService};

    use crate::test_helpers::{TEST_USER_UUID, authed_auth_service, make_user};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        authed_auth_service(auth, Router::with_path("auth/profile").get(handler))
    }

    #[tokio::test]
    async fn test_profile_returns_user() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_profile()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|uuid| Ok(make_user(uuid)));

        let response: UserResponse = TestClient::get("http://example.com/auth/profile")
            .send(&make_service(auth))
            .await
            .take_json()
            .await?;

        assert_eq!(response.uuid, TEST_USER_UUID);
        assert_eq!(response.phone, "9876543210");

        Ok(())
    }

    #[tokio::test]
    async fn test_profile_for_stale_session_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_profile()
            .once()
            .return_once(|_| Err(AuthServiceError::Unauthorized));

        let res = TestClient::get("http://example.com/auth/profile")
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
