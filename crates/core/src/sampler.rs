//! Quote sampling
//!
//! Synthetic per-platform quote generation standing in for real retailer
//! integrations. Randomness lives behind the [`QuoteSource`] seam so the
//! comparator and aggregator never depend on it; tests use a seeded source.

use std::{
    ops::RangeInclusive,
    sync::{Mutex, PoisonError},
};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive, prelude::ToPrimitive};

use crate::{
    platforms::{DeliveryEstimate, Platform},
    quotes::{DEFAULT_BASE_PRICE, PlatformQuote, QuoteRequest, round_price, sort_by_price},
};

/// Tuning for a sampling run: which platforms quote, how far prices wander
/// from the base price, and how often a discount applies.
#[derive(Debug, Clone)]
pub struct SamplerProfile {
    /// Platforms to draw a quote from, in declaration order.
    pub platforms: &'static [Platform],
    /// Relative price variation bound; prices land in `base * (1 ± variation)`.
    pub variation: f64,
    /// Probability that a quote carries a discount.
    pub discount_probability: f64,
    /// Discount percent range drawn from when a discount applies.
    pub discount_range: RangeInclusive<u8>,
}

impl SamplerProfile {
    /// The full comparison profile: all seven platforms, ±20% variation,
    /// 40% discount chance of 5-30%.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            platforms: &Platform::ALL,
            variation: 0.20,
            discount_probability: 0.4,
            discount_range: 5..=30,
        }
    }

    /// The catalog preview profile: the five storefront platforms, ±15%
    /// variation, 30% discount chance of 1-20%.
    #[must_use]
    pub const fn preview() -> Self {
        const PREVIEW_PLATFORMS: [Platform; 5] = [
            Platform::Amazon,
            Platform::BigBasket,
            Platform::JioMart,
            Platform::Blinkit,
            Platform::Flipkart,
        ];

        Self {
            platforms: &PREVIEW_PLATFORMS,
            variation: 0.15,
            discount_probability: 0.3,
            discount_range: 1..=20,
        }
    }
}

/// A source of per-platform quotes for an item.
///
/// This is the capability seam between pricing and quote acquisition; today's
/// only implementation samples synthetic quotes, a real API-backed adapter
/// would slot in here.
pub trait QuoteSource: Send + Sync {
    /// Produces one quote per platform of the source's profile, sorted
    /// ascending by price.
    fn quotes(&self, request: &QuoteRequest) -> Vec<PlatformQuote>;
}

/// A [`QuoteSource`] backed by a PRNG. Seed it for deterministic output.
#[derive(Debug)]
pub struct RandomQuoteSource {
    profile: SamplerProfile,
    rng: Mutex<StdRng>,
}

impl RandomQuoteSource {
    /// A source seeded from system entropy.
    #[must_use]
    pub fn new(profile: SamplerProfile) -> Self {
        Self {
            profile,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A deterministic source for tests and reproducible runs.
    #[must_use]
    pub fn seeded(profile: SamplerProfile, seed: u64) -> Self {
        Self {
            profile,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl QuoteSource for RandomQuoteSource {
    fn quotes(&self, request: &QuoteRequest) -> Vec<PlatformQuote> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        sample_quotes(&mut *rng, &self.profile, request)
    }
}

/// Samples one quote per platform of `profile`, sorted ascending by price.
/// Equal prices keep platform declaration order (the sort is stable and
/// quotes are generated in declaration order).
pub fn sample_quotes<R: Rng>(
    rng: &mut R,
    profile: &SamplerProfile,
    request: &QuoteRequest,
) -> Vec<PlatformQuote> {
    let base = request
        .base_price
        .to_f64()
        .filter(|base| base.is_finite() && *base > 0.0)
        .unwrap_or_else(|| DEFAULT_BASE_PRICE.to_f64().unwrap_or(50.0));

    let mut quotes: Vec<PlatformQuote> = profile
        .platforms
        .iter()
        .map(|&platform| sample_platform_quote(rng, profile, platform, base))
        .collect();

    sort_by_price(&mut quotes);

    quotes
}

fn sample_platform_quote<R: Rng>(
    rng: &mut R,
    profile: &SamplerProfile,
    platform: Platform,
    base: f64,
) -> PlatformQuote {
    let variation = rng.gen_range(-profile.variation..=profile.variation);
    let price = Decimal::from_f64(base * (1.0 + variation)).map_or(DEFAULT_BASE_PRICE, round_price);

    let delivery_time = DeliveryEstimate::ALL
        .choose(rng)
        .copied()
        .unwrap_or(DeliveryEstimate::SameDay);

    let mut quote = PlatformQuote::undiscounted(platform, price, delivery_time);

    if rng.gen_bool(profile.discount_probability) {
        quote = quote.with_discount(rng.gen_range(profile.discount_range.clone()));
    }

    quote.availability = rng.gen_bool(0.9);
    quote.in_stock = rng.gen_bool(0.95);
    quote.rating = Decimal::from_f64(rng.gen_range(3.0..=5.0_f64))
        .map(|rating| rating.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero));
    quote.review_count = Some(rng.gen_range(50..1050));

    quote
}
