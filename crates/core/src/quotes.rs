//! Price quotes
//!
//! A [`PlatformQuote`] is one platform's price and availability snapshot for
//! one item at one point in time. Quotes are ephemeral: they are regenerated
//! on every pricing request and are not an authoritative price feed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platforms::{DeliveryEstimate, Platform};

/// Base price substituted when a request carries none, or a non-positive one.
pub const DEFAULT_BASE_PRICE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Item name substituted when a request carries none.
pub const DEFAULT_ITEM_NAME: &str = "Unknown Item";

/// A structurally malformed input, naming the missing field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field: {field}")]
pub struct ValidationError {
    /// The field that was missing or empty.
    pub field: &'static str,
}

impl ValidationError {
    /// A validation failure for the named missing field.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self { field }
    }
}

/// Input to quote generation: which item to price, and from what base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Catalog item identifier.
    pub item_id: String,
    /// Display name of the item.
    pub item_name: String,
    /// Reference price the per-platform variation is applied to.
    pub base_price: Decimal,
}

impl QuoteRequest {
    /// Builds a request, substituting defaults for a missing name or a
    /// missing/non-positive base price.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the item identifier is empty.
    pub fn new(
        item_id: impl Into<String>,
        item_name: Option<String>,
        base_price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let item_id = item_id.into();

        if item_id.trim().is_empty() {
            return Err(ValidationError::missing("item_id"));
        }

        let item_name = match item_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_ITEM_NAME.to_string(),
        };

        let base_price = match base_price {
            Some(price) if price > Decimal::ZERO => price,
            _ => DEFAULT_BASE_PRICE,
        };

        Ok(Self {
            item_id,
            item_name,
            base_price,
        })
    }
}

/// One platform's price and availability snapshot for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformQuote {
    /// The quoting platform.
    pub platform: Platform,
    /// Quoted price, after any discount.
    pub price: Decimal,
    /// Pre-discount price, present only when a discount applies.
    pub original_price: Option<Decimal>,
    /// Discount percent (0-100), present only when a discount applies.
    pub discount: Option<u8>,
    /// Whether the platform lists the item at all.
    pub availability: bool,
    /// Whether the item is currently in stock.
    pub in_stock: bool,
    /// Advertised delivery window.
    pub delivery_time: DeliveryEstimate,
    /// Average customer rating (0.0-5.0), when known.
    pub rating: Option<Decimal>,
    /// Number of customer reviews, when known.
    pub review_count: Option<u32>,
    /// Platform display logo.
    pub logo: String,
    /// Platform brand colour.
    pub color: String,
}

impl PlatformQuote {
    /// Builds an undiscounted, viable quote with presentation data filled in
    /// from the platform.
    #[must_use]
    pub fn undiscounted(platform: Platform, price: Decimal, delivery_time: DeliveryEstimate) -> Self {
        Self {
            platform,
            price,
            original_price: None,
            discount: None,
            availability: true,
            in_stock: true,
            delivery_time,
            rating: None,
            review_count: None,
            logo: platform.logo().to_string(),
            color: platform.color().to_string(),
        }
    }

    /// Applies a discount percent, back-computing the original price so that
    /// `price == round(original * (1 - discount/100), 2)` holds.
    #[must_use]
    pub fn with_discount(mut self, percent: u8) -> Self {
        let percent = percent.min(100);

        if percent == 0 {
            return self;
        }

        let fraction = Decimal::ONE - Decimal::from(percent) / Decimal::ONE_HUNDRED;

        self.original_price = Some(round_price(self.price / fraction));
        self.discount = Some(percent);

        self
    }

    /// A quote is viable when the platform both lists the item and has it in
    /// stock. Only viable quotes participate in totals.
    #[must_use]
    pub const fn is_viable(&self) -> bool {
        self.availability && self.in_stock
    }
}

/// Rounds a price to two decimal places, midpoint away from zero.
#[must_use]
pub fn round_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sorts quotes ascending by price. The sort is stable, so equal prices keep
/// their input order.
pub fn sort_by_price(quotes: &mut [PlatformQuote]) {
    quotes.sort_by(|a, b| a.price.cmp(&b.price));
}

/// Headline statistics over a price-sorted quote list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    /// Cheapest quoted price.
    pub lowest_price: Decimal,
    /// Most expensive quoted price.
    pub highest_price: Decimal,
    /// Mean quoted price, rounded to two decimal places.
    pub average_price: Decimal,
    /// Number of viable quotes.
    pub available_platforms: usize,
}

impl QuoteSummary {
    /// Summarizes a price-sorted quote list. Returns `None` for an empty list.
    #[must_use]
    pub fn of(quotes: &[PlatformQuote]) -> Option<Self> {
        let first = quotes.first()?;
        let last = quotes.last()?;

        let sum: Decimal = quotes.iter().map(|quote| quote.price).sum();

        Some(Self {
            lowest_price: first.price,
            highest_price: last.price,
            average_price: round_price(sum / Decimal::from(quotes.len())),
            available_platforms: quotes.iter().filter(|quote| quote.is_viable()).count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn quote(platform: Platform, price: &str) -> PlatformQuote {
        PlatformQuote::undiscounted(
            platform,
            price.parse().unwrap_or_default(),
            DeliveryEstimate::SameDay,
        )
    }

    #[test]
    fn request_with_empty_id_is_rejected() {
        let result = QuoteRequest::new("  ", None, None);

        assert_eq!(result, Err(ValidationError::missing("item_id")));
    }

    #[test]
    fn request_defaults_name_and_base_price() -> TestResult {
        let request = QuoteRequest::new("1", None, None)?;

        assert_eq!(request.item_name, DEFAULT_ITEM_NAME);
        assert_eq!(request.base_price, DEFAULT_BASE_PRICE);

        Ok(())
    }

    #[test]
    fn request_rejects_non_positive_base_price() -> TestResult {
        let request = QuoteRequest::new("1", None, Some("-4.20".parse()?))?;

        assert_eq!(request.base_price, DEFAULT_BASE_PRICE);

        Ok(())
    }

    #[test]
    fn request_keeps_valid_inputs() -> TestResult {
        let request = QuoteRequest::new("1", Some("Basmati Rice".into()), Some("89.99".parse()?))?;

        assert_eq!(request.item_name, "Basmati Rice");
        assert_eq!(request.base_price, "89.99".parse::<Decimal>()?);

        Ok(())
    }

    #[test]
    fn discount_back_computes_original_price() -> TestResult {
        let discounted = quote(Platform::Amazon, "80.00").with_discount(20);

        assert_eq!(discounted.discount, Some(20));
        assert_eq!(discounted.original_price, Some("100.00".parse()?));

        // The invariant holds: round(original * (1 - d/100), 2) == price.
        let original = discounted.original_price.unwrap_or_default();
        let reconstructed = round_price(original * "0.80".parse::<Decimal>()?);

        assert!(
            (reconstructed - discounted.price).abs() <= "0.01".parse::<Decimal>()?,
            "invariant broken: {reconstructed} vs {}",
            discounted.price
        );

        Ok(())
    }

    #[test]
    fn zero_discount_leaves_quote_unchanged() {
        let q = quote(Platform::Amazon, "80.00").with_discount(0);

        assert_eq!(q.discount, None);
        assert_eq!(q.original_price, None);
    }

    #[test]
    fn sort_is_stable_on_equal_prices() {
        let mut quotes = vec![
            quote(Platform::Blinkit, "10.00"),
            quote(Platform::Amazon, "10.00"),
            quote(Platform::Zepto, "9.00"),
        ];

        sort_by_price(&mut quotes);

        let order: Vec<Platform> = quotes.iter().map(|q| q.platform).collect();

        assert_eq!(
            order,
            vec![Platform::Zepto, Platform::Blinkit, Platform::Amazon],
            "stable sort keeps input order for ties"
        );
    }

    #[test]
    fn summary_over_sorted_quotes() -> TestResult {
        let mut out_of_stock = quote(Platform::JioMart, "30.00");
        out_of_stock.in_stock = false;

        let quotes = vec![
            quote(Platform::Amazon, "10.00"),
            quote(Platform::Blinkit, "20.00"),
            out_of_stock,
        ];

        let summary = QuoteSummary::of(&quotes).ok_or("expected a summary")?;

        assert_eq!(summary.lowest_price, "10.00".parse()?);
        assert_eq!(summary.highest_price, "30.00".parse()?);
        assert_eq!(summary.average_price, "20.00".parse()?);
        assert_eq!(summary.available_platforms, 2);

        Ok(())
    }

    #[test]
    fn summary_of_empty_list_is_none() {
        assert_eq!(QuoteSummary::of(&[]), None);
    }
}
