//! Cart Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use smartbasket::{
    basket::CartLine,
    compare::ComparisonResult,
    totals::{CartComparison, PlatformRegret},
};

/// A shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Cart identifier.
    pub uuid: Uuid,
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,
    /// When the cart was created.
    pub created_at: Timestamp,
    /// When the cart last changed.
    pub updated_at: Timestamp,
}

/// The outcome of comparing a stored cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartComparisonReport {
    /// When the comparison ran.
    pub generated_at: Timestamp,
    /// Per-line comparison results.
    pub comparisons: Vec<ComparisonResult>,
    /// Per-platform totals and the primary recommendation.
    pub totals: CartComparison,
    /// The alternate, lowest-aggregate-overcharge recommendation.
    pub alternate: Option<PlatformRegret>,
}
