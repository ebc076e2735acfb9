//! Cart routes.

pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod items;

pub(crate) use handlers::{comparison, create, delete, get};
