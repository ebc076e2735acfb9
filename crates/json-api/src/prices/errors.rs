//! Pricing Errors

use salvo::http::StatusError;
use tracing::error;

use smartbasket_app::domain::pricing::PricingServiceError;

pub(crate) fn into_status_error(error: PricingServiceError) -> StatusError {
    match error {
        PricingServiceError::Validation(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        PricingServiceError::HistoryUnavailable => {
            error!("price history store unavailable");

            StatusError::internal_server_error()
        }
    }
}
