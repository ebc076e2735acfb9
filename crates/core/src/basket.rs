//! Cart lines
//!
//! A cart line is one catalog item plus a quantity plus the quotes attached
//! when the item was added (or re-fetched on comparison).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quotes::PlatformQuote;

/// One item in a shopping cart, with its per-platform quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog item identifier.
    pub item_id: String,
    /// Display name of the item.
    pub item_name: String,
    /// Catalog base price the quotes were sampled from.
    pub base_price: Decimal,
    /// Number of units in the cart; a line with quantity zero is removed by
    /// its owning store.
    pub quantity: u32,
    /// Quotes attached at add time or re-fetched on comparison.
    pub quotes: Vec<PlatformQuote>,
}

impl CartLine {
    /// Builds a line with the given quantity and quotes.
    #[must_use]
    pub fn new(
        item_id: impl Into<String>,
        item_name: impl Into<String>,
        base_price: Decimal,
        quantity: u32,
        quotes: Vec<PlatformQuote>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            base_price,
            quantity,
            quotes,
        }
    }
}
