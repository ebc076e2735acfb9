//! SmartBasket
//!
//! SmartBasket is a grocery price-comparison engine: it samples per-platform
//! price quotes for catalog items, picks the cheapest viable platform per cart
//! line, and rolls per-item choices up into per-platform cart totals and a
//! best-overall-platform recommendation.

pub mod basket;
pub mod catalog;
pub mod compare;
pub mod platforms;
pub mod quotes;
pub mod sampler;
pub mod totals;
