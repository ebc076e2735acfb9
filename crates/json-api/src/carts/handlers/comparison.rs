//! Cart Comparison Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use smartbasket_app::domain::carts::CartComparisonReport;

use crate::{
    carts::errors::into_status_error,
    extensions::*,
    prices::handlers::compare::{
        CartComparisonResponse, ComparisonEntryResponse, PlatformRegretResponse,
    },
    state::State,
};

/// The outcome of comparing a stored cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartComparisonReportResponse {
    /// When the comparison ran
    pub generated_at: String,

    /// Per-line comparison results
    pub comparisons: Vec<ComparisonEntryResponse>,

    /// Basket totals and recommendation
    pub totals: CartComparisonResponse,

    /// Alternate recommendation by aggregate overcharge
    pub alternate: Option<PlatformRegretResponse>,
}

impl From<CartComparisonReport> for CartComparisonReportResponse {
    fn from(report: CartComparisonReport) -> Self {
        CartComparisonReportResponse {
            generated_at: report.generated_at.to_string(),
            comparisons: report.comparisons.into_iter().map(Into::into).collect(),
            totals: report.totals.into(),
            alternate: report.alternate.map(Into::into),
        }
    }
}

/// Cart Comparison Handler
///
/// Runs the comparison pipeline over a stored cart.
#[endpoint(tags("carts"), summary = "Compare Cart")]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartComparisonReportResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let report = state
        .app
        .carts
        .compare_cart(cart.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(report.into()))
}
