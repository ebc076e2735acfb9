//! Retail platforms
//!
//! The fixed set of storefronts that can quote a price for an item, plus the
//! delivery estimates they advertise. Logos and brand colours are static
//! presentation data, never randomized.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A retail storefront capable of quoting a price for an item.
///
/// Declaration order is significant: it is the documented tie-break rule
/// wherever two platforms quote the same price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Amazon Fresh
    Amazon,
    /// BigBasket
    BigBasket,
    /// JioMart
    JioMart,
    /// Blinkit
    Blinkit,
    /// Flipkart Grocery
    Flipkart,
    /// Zepto
    Zepto,
    /// Swiggy Instamart
    #[serde(rename = "Swiggy Instamart")]
    SwiggyInstamart,
}

impl Platform {
    /// Every supported platform, in declaration order.
    pub const ALL: [Platform; 7] = [
        Platform::Amazon,
        Platform::BigBasket,
        Platform::JioMart,
        Platform::Blinkit,
        Platform::Flipkart,
        Platform::Zepto,
        Platform::SwiggyInstamart,
    ];

    /// Customer-facing platform name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::BigBasket => "BigBasket",
            Platform::JioMart => "JioMart",
            Platform::Blinkit => "Blinkit",
            Platform::Flipkart => "Flipkart",
            Platform::Zepto => "Zepto",
            Platform::SwiggyInstamart => "Swiggy Instamart",
        }
    }

    /// Display logo for listings.
    #[must_use]
    pub const fn logo(self) -> &'static str {
        match self {
            Platform::Amazon => "🛒",
            Platform::BigBasket => "🛍️",
            Platform::JioMart => "🏪",
            Platform::Blinkit => "⚡",
            Platform::Flipkart => "📦",
            Platform::Zepto => "🚀",
            Platform::SwiggyInstamart => "🍽️",
        }
    }

    /// Brand colour as a hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Platform::Amazon => "#FF9900",
            Platform::BigBasket => "#84C341",
            Platform::JioMart => "#0066CC",
            Platform::Blinkit => "#F8CA00",
            Platform::Flipkart => "#2874F0",
            Platform::Zepto => "#6C5CE7",
            Platform::SwiggyInstamart => "#FC8019",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// An advertised delivery window for a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeliveryEstimate {
    /// Delivered the same day.
    #[serde(rename = "Same day")]
    SameDay,
    /// Delivered within one to two days.
    #[serde(rename = "1-2 days")]
    OneToTwoDays,
    /// Delivered within two to three days.
    #[serde(rename = "2-3 days")]
    TwoToThreeDays,
    /// Delivered within three to five days.
    #[serde(rename = "3-5 days")]
    ThreeToFiveDays,
}

impl DeliveryEstimate {
    /// Every delivery window, fastest first.
    pub const ALL: [DeliveryEstimate; 4] = [
        DeliveryEstimate::SameDay,
        DeliveryEstimate::OneToTwoDays,
        DeliveryEstimate::TwoToThreeDays,
        DeliveryEstimate::ThreeToFiveDays,
    ];

    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DeliveryEstimate::SameDay => "Same day",
            DeliveryEstimate::OneToTwoDays => "1-2 days",
            DeliveryEstimate::TwoToThreeDays => "2-3 days",
            DeliveryEstimate::ThreeToFiveDays => "3-5 days",
        }
    }
}

impl Display for DeliveryEstimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn platform_order_follows_declaration() {
        assert!(Platform::Amazon < Platform::SwiggyInstamart, "declaration order is the tie-break");
    }

    #[test]
    fn platform_serializes_to_display_name() -> TestResult {
        let json = serde_json::to_string(&Platform::SwiggyInstamart)?;

        assert_eq!(json, "\"Swiggy Instamart\"");

        Ok(())
    }

    #[test]
    fn delivery_estimate_serializes_to_label() -> TestResult {
        let json = serde_json::to_string(&DeliveryEstimate::OneToTwoDays)?;

        assert_eq!(json, "\"1-2 days\"");

        Ok(())
    }

    #[test]
    fn every_platform_has_presentation_data() {
        for platform in Platform::ALL {
            assert!(!platform.logo().is_empty(), "missing logo for {platform}");
            assert!(platform.color().starts_with('#'), "missing colour for {platform}");
        }
    }
}
