//! Auth Errors

use salvo::http::StatusError;

use smartbasket_app::domain::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidPhone
        | AuthServiceError::InvalidOtp
        | AuthServiceError::InvalidName => StatusError::bad_request().brief(error.to_string()),
        AuthServiceError::RateLimited { .. } => {
            StatusError::too_many_requests().brief(error.to_string())
        }
        AuthServiceError::UserNotFound | AuthServiceError::ChallengeNotFound => {
            StatusError::not_found().brief(error.to_string())
        }
        AuthServiceError::UserAlreadyExists | AuthServiceError::DuplicateWatchlistItem => {
            StatusError::conflict().brief(error.to_string())
        }
        AuthServiceError::OtpExpired
        | AuthServiceError::OtpMismatch { .. }
        | AuthServiceError::TooManyAttempts
        | AuthServiceError::Unauthorized => StatusError::unauthorized().brief(error.to_string()),
    }
}
