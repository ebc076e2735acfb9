//! Catalog items and browsing filters

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    platforms::DeliveryEstimate,
    quotes::PlatformQuote,
};

/// A catalog entry. Immutable once defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Browsing category (e.g. "Dairy").
    pub category: String,
    /// Brand name.
    pub brand: String,
    /// Unit label (e.g. "1kg", "500ml").
    pub unit: String,
    /// Reference price quotes are sampled from.
    pub base_price: Decimal,
    /// Product image URL.
    pub image: String,
    /// Short marketing description.
    pub description: String,
}

/// A catalog browsing filter: a pure predicate composition over the static
/// catalog, with no effect on pricing.
///
/// `min_price > max_price` is accepted and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Keep only items in this category.
    pub category: Option<String>,
    /// Keep only items of this brand.
    pub brand: Option<String>,
    /// Keep only items with a base price at or above this bound.
    pub min_price: Option<Decimal>,
    /// Keep only items with a base price at or below this bound.
    pub max_price: Option<Decimal>,
    /// Keep only items some platform can deliver at least this fast.
    pub delivery_time: Option<DeliveryEstimate>,
    /// Keep only items with at least one viable quote.
    pub available_only: bool,
}

impl FilterSpec {
    /// Whether the item's static attributes pass the filter.
    #[must_use]
    pub fn matches_item(&self, item: &Item) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|category| item.category == *category);
        let brand_ok = self.brand.as_ref().is_none_or(|brand| item.brand == *brand);
        let min_ok = self.min_price.is_none_or(|min| item.base_price >= min);
        let max_ok = self.max_price.is_none_or(|max| item.base_price <= max);

        category_ok && brand_ok && min_ok && max_ok
    }

    /// Whether the item's quotes pass the delivery and availability facets.
    #[must_use]
    pub fn matches_quotes(&self, quotes: &[PlatformQuote]) -> bool {
        let delivery_ok = self.delivery_time.is_none_or(|preference| {
            quotes.iter().any(|quote| quote.delivery_time <= preference)
        });
        let availability_ok = !self.available_only || quotes.iter().any(PlatformQuote::is_viable);

        delivery_ok && availability_ok
    }

    /// Whether any facet that needs quotes is set at all.
    #[must_use]
    pub const fn needs_quotes(&self) -> bool {
        self.delivery_time.is_some() || self.available_only
    }
}
