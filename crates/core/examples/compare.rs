//! Cart Comparison Example
//!
//! Samples quotes for a small cart with a seeded source, compares each line,
//! and prints the per-platform totals and recommendation.

use anyhow::Result;
use rust_decimal::Decimal;

use smartbasket::{
    basket::CartLine,
    compare::compare,
    quotes::QuoteRequest,
    sampler::{QuoteSource, RandomQuoteSource, SamplerProfile},
    totals::{aggregate, best_deal_by_regret},
};

/// Cart Comparison Example
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> Result<()> {
    let source = RandomQuoteSource::seeded(SamplerProfile::full(), 2024);

    let cart = [
        ("1", "Basmati Rice", Decimal::new(8999, 2), 2),
        ("4", "Fresh Milk", Decimal::new(2800, 2), 6),
        ("8", "Green Tea Bags", Decimal::new(12500, 2), 1),
    ];

    let mut results = Vec::new();

    for (id, name, base_price, quantity) in cart {
        let request = QuoteRequest::new(id, Some(name.to_string()), Some(base_price))?;
        let quotes = source.quotes(&request);
        let result = compare(&CartLine::new(id, name, base_price, quantity, quotes))?;

        match result.require_viable() {
            Ok(cheapest) => {
                println!("{quantity} x {name}: cheapest on {} at {}", cheapest.platform, cheapest.price);
            }
            Err(unavailable) => println!("{quantity} x {name}: {unavailable}"),
        }

        results.push(result);
    }

    let comparison = aggregate(&results);

    println!("\nPer-platform totals:");

    for total in &comparison.platform_totals {
        println!("  {:<18} {:>10} ({} items)", total.platform.to_string(), total.total, total.items);
    }

    if let Some(best) = comparison.best_platform {
        println!("\nBest overall platform: {best} (save {})", comparison.total_savings);
    }

    if let Some(alternate) = best_deal_by_regret(&results) {
        println!("Lowest aggregate overcharge: {} ({})", alternate.platform, alternate.regret);
    }

    Ok(())
}
