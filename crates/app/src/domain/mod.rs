//! Application domains.

pub mod auth;
pub mod carts;
pub mod catalog;
pub mod pricing;
