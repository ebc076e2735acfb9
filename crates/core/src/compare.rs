//! Per-item comparison
//!
//! Selects, for one cart line, the cheapest quote among platforms that both
//! list the item and have it in stock.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    basket::CartLine,
    quotes::{PlatformQuote, ValidationError, sort_by_price},
};

/// Every quote for a cart line was unavailable or out of stock.
///
/// Callers must either exclude the line from totals or present an explicit
/// "currently unavailable" state; silently picking a non-viable quote as
/// cheapest is never correct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no platform is currently available and in stock for item {item_id}")]
pub struct NoViablePlatform {
    /// The affected item.
    pub item_id: String,
}

/// The comparison outcome for one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// The compared item.
    pub item_id: String,
    /// Quantity from the owning cart line; totals multiply by it.
    pub quantity: u32,
    /// Every quote, viable or not, sorted ascending by price.
    pub all_platforms: Vec<PlatformQuote>,
    /// The cheapest viable quote, absent when nothing is viable.
    pub cheapest_viable: Option<PlatformQuote>,
}

impl ComparisonResult {
    /// The cheapest viable quote, or [`NoViablePlatform`] when every quote is
    /// unavailable or out of stock.
    ///
    /// # Errors
    ///
    /// Returns [`NoViablePlatform`] when the viable subset is empty.
    pub fn require_viable(&self) -> Result<&PlatformQuote, NoViablePlatform> {
        self.cheapest_viable.as_ref().ok_or_else(|| NoViablePlatform {
            item_id: self.item_id.clone(),
        })
    }
}

/// Compares the quotes of one cart line.
///
/// The cheapest viable quote is the minimum-price element of the viable
/// subset; price ties break by platform declaration order. `all_platforms`
/// keeps viable and non-viable quotes interleaved, sorted ascending by price.
///
/// Pure and idempotent: the same line always yields the same result.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the line's item identifier is empty.
pub fn compare(line: &CartLine) -> Result<ComparisonResult, ValidationError> {
    if line.item_id.trim().is_empty() {
        return Err(ValidationError::missing("item_id"));
    }

    let mut all_platforms = line.quotes.clone();
    sort_by_price(&mut all_platforms);

    let cheapest_viable = {
        let viable: SmallVec<[&PlatformQuote; 8]> = all_platforms
            .iter()
            .filter(|quote| quote.is_viable())
            .collect();

        viable
            .iter()
            .min_by(|a, b| a.price.cmp(&b.price).then(a.platform.cmp(&b.platform)))
            .map(|quote| (*quote).clone())
    };

    Ok(ComparisonResult {
        item_id: line.item_id.clone(),
        quantity: line.quantity,
        all_platforms,
        cheapest_viable,
    })
}
