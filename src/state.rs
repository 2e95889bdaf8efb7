//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::storage::UrlRepository;

/// Credentials for the basic-auth-gated `/modify` routes.
#[derive(Clone)]
pub struct AdminCredentials {
    pub user: String,
    pub password: String,
}

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn UrlRepository>,
    pub admin: AdminCredentials,
}

impl AppState {
    pub fn new(storage: Arc<dyn UrlRepository>, admin: AdminCredentials) -> Self {
        Self { storage, admin }
    }
}
