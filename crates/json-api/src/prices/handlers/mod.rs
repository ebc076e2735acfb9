//! Pricing Handlers

pub(crate) mod compare;
pub(crate) mod history;
pub(crate) mod item;
pub(crate) mod watchlist;
