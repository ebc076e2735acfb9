//! Pricing domain: on-demand quotes, bulk comparison and price history.

pub mod errors;
pub mod history;
pub mod models;
pub mod service;

pub use errors::PricingServiceError;
pub use history::{InMemoryPriceHistory, MockPriceHistoryRepository, PriceHistoryRepository};
pub use models::{BulkComparison, CompareItem, ItemQuoteRequest, ItemQuotes, PlatformPriceHistory, PricePoint};
pub use service::{MockPricingService, PricingService, SamplerPricingService};
