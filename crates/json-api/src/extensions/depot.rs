//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use uuid::Uuid;

const USER_UUID_KEY: &str = "authenticated_user_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Stores the authenticated user's UUID for downstream handlers.
    fn insert_user_uuid(&mut self, user: Uuid);

    /// The authenticated user's UUID, or a 401 when the auth middleware did
    /// not run.
    fn user_uuid_or_401(&self) -> Result<Uuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_uuid(&mut self, user: Uuid) {
        self.insert(USER_UUID_KEY, user);
    }

    fn user_uuid_or_401(&self) -> Result<Uuid, StatusError> {
        self.get::<Uuid>(USER_UUID_KEY)
            .copied()
            .map_err(|_missing| StatusError::unauthorized().brief("Authentication required"))
    }
}
