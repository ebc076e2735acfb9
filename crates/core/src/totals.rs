//! Cart aggregation
//!
//! Rolls per-item comparison results up into per-platform cart totals, a
//! best-overall-platform recommendation, and the savings against the most
//! expensive platform. A secondary ranking by aggregate "regret" (how much a
//! platform overcharges versus each item's cheapest viable price) backs the
//! alternate recommendation view.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{compare::ComparisonResult, platforms::Platform, quotes::round_price};

/// Accumulated cart total for one platform across a comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformTotal {
    /// The platform.
    pub platform: Platform,
    /// Sum of `price × quantity` over the platform's viable quotes, rounded
    /// to two decimal places once, at the end of the run.
    pub total: Decimal,
    /// Accumulated item quantity behind the total.
    pub items: u32,
    /// Platform brand colour, for presentation.
    pub color: String,
}

/// The aggregate outcome of a comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartComparison {
    /// Per-platform totals, sorted ascending by total. Platforms observed in
    /// any quote list are present even when nothing was viable (total 0).
    pub platform_totals: Vec<PlatformTotal>,
    /// The platform with the lowest total, absent for an empty run.
    pub best_platform: Option<Platform>,
    /// Difference between the most and least expensive platform totals, zero
    /// unless at least two platforms have a nonzero viable total.
    pub total_savings: Decimal,
}

/// Aggregates per-item comparison results into per-platform totals.
///
/// Only viable quotes contribute; a cart line with no viable quote
/// contributes nothing. Totals are accumulated unrounded and rounded once at
/// the end, so per-addition rounding error never compounds across items.
///
/// An empty input is "nothing to compare", not an error: empty totals, no
/// best platform, zero savings.
#[must_use]
pub fn aggregate(results: &[ComparisonResult]) -> CartComparison {
    let mut accumulated: FxHashMap<Platform, (Decimal, u32)> = FxHashMap::default();

    for result in results {
        let quantity = Decimal::from(result.quantity);

        for quote in &result.all_platforms {
            // Every observed platform gets an entry, viable or not.
            let entry = accumulated.entry(quote.platform).or_default();

            if quote.is_viable() {
                entry.0 += quote.price * quantity;
                entry.1 += result.quantity;
            }
        }
    }

    let mut platform_totals: Vec<PlatformTotal> = accumulated
        .into_iter()
        .map(|(platform, (total, items))| PlatformTotal {
            platform,
            total: round_price(total),
            items,
            color: platform.color().to_string(),
        })
        .collect();

    platform_totals.sort_by(|a, b| a.total.cmp(&b.total).then(a.platform.cmp(&b.platform)));

    let best_platform = platform_totals.first().map(|entry| entry.platform);

    let nonzero = platform_totals
        .iter()
        .filter(|entry| entry.total > Decimal::ZERO)
        .count();

    let total_savings = match (platform_totals.first(), platform_totals.last()) {
        (Some(first), Some(last)) if nonzero >= 2 => round_price(last.total - first.total),
        _ => Decimal::ZERO,
    };

    CartComparison {
        platform_totals,
        best_platform,
        total_savings,
    }
}

/// A platform's aggregate overcharge versus each item's cheapest viable
/// price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRegret {
    /// The platform.
    pub platform: Platform,
    /// Sum of `(platform price - cheapest viable price) × quantity` over the
    /// platform's viable quotes, rounded to two decimal places.
    pub regret: Decimal,
}

/// The alternate recommendation: the platform whose viable quotes overcharge
/// the least in aggregate, rather than the one with the lowest total.
///
/// Lines with no viable quote are skipped. Returns `None` when nothing was
/// viable at all. Ties break by platform declaration order.
#[must_use]
pub fn best_deal_by_regret(results: &[ComparisonResult]) -> Option<PlatformRegret> {
    let mut regrets: FxHashMap<Platform, Decimal> = FxHashMap::default();

    for result in results {
        let Some(cheapest) = &result.cheapest_viable else {
            continue;
        };

        let quantity = Decimal::from(result.quantity);

        for quote in &result.all_platforms {
            if quote.is_viable() {
                *regrets.entry(quote.platform).or_default() +=
                    (quote.price - cheapest.price) * quantity;
            }
        }
    }

    regrets
        .into_iter()
        .map(|(platform, regret)| PlatformRegret {
            platform,
            regret: round_price(regret),
        })
        .min_by(|a, b| a.regret.cmp(&b.regret).then(a.platform.cmp(&b.platform)))
}
