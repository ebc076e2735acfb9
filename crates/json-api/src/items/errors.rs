//! Item Errors

use salvo::http::StatusError;

use smartbasket_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found().brief("Item not found"),
    }
}
