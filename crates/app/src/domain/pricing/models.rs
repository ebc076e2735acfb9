//! Pricing Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use smartbasket::{
    compare::ComparisonResult,
    platforms::Platform,
    quotes::{PlatformQuote, QuoteSummary},
    totals::{CartComparison, PlatformRegret},
};

/// A request for the live quotes of a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuoteRequest {
    /// Item identifier.
    pub item_id: String,
    /// Display name; defaulted when absent.
    pub item_name: Option<String>,
    /// Reference price the sampled quotes vary around; defaulted when absent.
    pub base_price: Option<Decimal>,
    /// Whether to record the sampled quotes in the price history.
    pub save: bool,
}

/// Sorted quotes for a single item with their headline statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuotes {
    /// Item identifier.
    pub item_id: String,
    /// Quotes sorted ascending by price.
    pub quotes: Vec<PlatformQuote>,
    /// Headline statistics; `None` when no platform quoted.
    pub summary: Option<QuoteSummary>,
}

/// One item of a bulk comparison request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareItem {
    /// Item identifier.
    pub item_id: String,
    /// Display name; defaulted when absent.
    pub item_name: Option<String>,
    /// Reference price; defaulted when absent.
    pub base_price: Option<Decimal>,
    /// Units wanted; zero is treated as one.
    pub quantity: u32,
}

/// The outcome of a bulk comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkComparison {
    /// Per-item comparison results.
    pub comparisons: Vec<ComparisonResult>,
    /// Per-platform totals and the primary recommendation.
    pub totals: CartComparison,
    /// The alternate, lowest-aggregate-overcharge recommendation.
    pub alternate: Option<PlatformRegret>,
}

/// A single historical price observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observed price.
    pub price: Decimal,
    /// When the observation was recorded.
    pub recorded_at: Timestamp,
}

/// One platform's price history for an item, newest observation first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPriceHistory {
    /// The quoting platform.
    pub platform: Platform,
    /// Observations, newest first.
    pub points: Vec<PricePoint>,
}
