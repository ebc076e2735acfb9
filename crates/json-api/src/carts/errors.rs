//! Cart Errors

use salvo::http::StatusError;

use smartbasket_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::UnknownItem { item_id } => {
            StatusError::not_found().brief(format!("Unknown item: {item_id}"))
        }
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be at least 1")
        }
        CartsServiceError::Validation(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
    }
}
