//! Shared application domain modules for the SmartBasket services.

pub mod context;
pub mod domain;
