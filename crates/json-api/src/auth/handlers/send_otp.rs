//! Send OTP Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use smartbasket_app::domain::auth::OtpPurpose;

use crate::{auth::errors::into_status_error, extensions::*, state::State};

/// Why an OTP is being requested.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OtpPurposeParam {
    /// Sign in an existing user.
    Login,
    /// Create a new user.
    Register,
}

impl From<OtpPurposeParam> for OtpPurpose {
    fn from(purpose: OtpPurposeParam) -> Self {
        match purpose {
            OtpPurposeParam::Login => OtpPurpose::Login,
            OtpPurposeParam::Register => OtpPurpose::Register,
        }
    }
}

/// Send OTP Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SendOtpRequest {
    /// Ten-digit phone number.
    pub phone: String,
    /// Whether this is a login or a registration.
    pub purpose: OtpPurposeParam,
}

/// Send OTP Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SendOtpResponse {
    /// Confirmation message.
    pub message: String,
}

/// Send OTP Handler
///
/// Issues a one-time password to the given phone number.
#[endpoint(
    tags("auth"),
    summary = "Send OTP",
    responses(
        (status_code = StatusCode::OK, description = "OTP sent"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid phone number"),
        (status_code = StatusCode::TOO_MANY_REQUESTS, description = "OTP already sent recently"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SendOtpRequest>,
    depot: &mut Depot,
) -> Result<Json<SendOtpResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    state
        .app
        .auth
        .send_otp(&request.phone, request.purpose.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(SendOtpResponse {
        message: "OTP sent successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use smartbasket_app::domain::auth::{AuthServiceError, MockAuthService};

    use crate::test_helpers::auth_routes_service;

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        auth_routes_service(auth, Router::with_path("auth/send-otp").post(handler))
    }

    #[tokio::test]
    async fn test_send_otp_returns_200() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_send_otp()
            .once()
            .withf(|phone, purpose| phone == "9876543210" && *purpose == OtpPurpose::Register)
            .return_once(|_, _| Ok(()));

        let res = TestClient::post("http://example.com/auth/send-otp")
            .json(&json!({ "phone": "9876543210", "purpose": "register" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_phone_returns_400() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_send_otp()
            .once()
            .return_once(|_, _| Err(AuthServiceError::InvalidPhone));

        let res = TestClient::post("http://example.com/auth/send-otp")
            .json(&json!({ "phone": "12345", "purpose": "login" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_rate_limited_returns_429() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_send_otp()
            .once()
            .return_once(|_, _| Err(AuthServiceError::RateLimited { retry_after: 42 }));

        let res = TestClient::post("http://example.com/auth/send-otp")
            .json(&json!({ "phone": "9876543210", "purpose": "login" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::TOO_MANY_REQUESTS));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_for_unknown_phone_returns_404() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_send_otp()
            .once()
            .return_once(|_, _| Err(AuthServiceError::UserNotFound));

        let res = TestClient::post("http://example.com/auth/send-otp")
            .json(&json!({ "phone": "9876543210", "purpose": "login" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
