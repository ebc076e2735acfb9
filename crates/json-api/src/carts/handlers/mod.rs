//! Cart Handlers

pub(crate) mod comparison;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
