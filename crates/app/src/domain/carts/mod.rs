//! Carts domain: mutable shopping carts and their comparison runs.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CartsServiceError;
pub use models::{Cart, CartComparisonReport};
pub use service::{CartsService, InMemoryCartsService, MockCartsService};
