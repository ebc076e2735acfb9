//! Verify OTP Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{
        errors::into_status_error,
        handlers::{profile::UserResponse, send_otp::OtpPurposeParam},
    },
    extensions::*,
    state::State,
};

/// Verify OTP Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyOtpRequest {
    /// Ten-digit phone number.
    pub phone: String,
    /// Six-digit one-time password.
    pub otp: String,
    /// Whether this is a login or a registration.
    pub purpose: OtpPurposeParam,
    /// Display name; required when registering.
    pub name: Option<String>,
}

/// Verify OTP Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyOtpResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The signed-in user.
    pub user: UserResponse,
}

/// Verify OTP Handler
///
/// Verifies a one-time password and opens a session.
#[endpoint(
    tags("auth"),
    summary = "Verify OTP",
    responses(
        (status_code = StatusCode::OK, description = "Session opened"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed phone, OTP or name"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Wrong, expired or locked OTP"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<VerifyOtpRequest>,
    depot: &mut Depot,
) -> Result<Json<VerifyOtpResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let session = state
        .app
        .auth
        .verify_otp(
            &request.phone,
            &request.otp,
            request.purpose.into(),
            request.name,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(VerifyOtpResponse {
        token: session.token,
        user: session.user.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use smartbasket_app::domain::auth::{
        AuthServiceError, AuthSession, MockAuthService, OtpPurpose,
    };

    use crate::test_helpers::{auth_routes_service, make_user};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        auth_routes_service(auth, Router::with_path("auth/verify-otp").post(handler))
    }

    #[tokio::test]
    async fn test_verify_otp_opens_a_session() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut auth = MockAuthService::new();

        auth.expect_verify_otp()
            .once()
            .withf(|phone, otp, purpose, name| {
                phone == "9876543210"
                    && otp == "123456"
                    && *purpose == OtpPurpose::Register
                    && name.as_deref() == Some("Priya")
            })
            .return_once(move |_, _, _, _| {
                Ok(AuthSession {
                    token: "sessiontoken".to_string(),
                    user: make_user(uuid),
                })
            });

        let response: VerifyOtpResponse = TestClient::post("http://example.com/auth/verify-otp")
            .json(&json!({
                "phone": "9876543210",
                "otp": "123456",
                "purpose": "register",
                "name": "Priya"
            }))
            .send(&make_service(auth))
            .await
            .take_json()
            .await?;

        assert_eq!(response.token, "sessiontoken");
        assert_eq!(response.user.uuid, uuid);

        Ok(())
    }

    #[tokio::test]
    async fn test_wrong_otp_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_verify_otp()
            .once()
            .return_once(|_, _, _, _| Err(AuthServiceError::OtpMismatch { remaining: 2 }));

        let res = TestClient::post("http://example.com/auth/verify-otp")
            .json(&json!({ "phone": "9876543210", "otp": "000000", "purpose": "login" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_otp_returns_400() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_verify_otp()
            .once()
            .return_once(|_, _, _, _| Err(AuthServiceError::InvalidOtp));

        let res = TestClient::post("http://example.com/auth/verify-otp")
            .json(&json!({ "phone": "9876543210", "otp": "12", "purpose": "login" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
