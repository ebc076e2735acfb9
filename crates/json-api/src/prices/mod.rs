//! Pricing routes: live quotes, bulk comparison, history and watchlist.

pub(crate) mod errors;
pub(crate) mod handlers;

pub(crate) use handlers::{compare, history, item, watchlist};
