use std::sync::Arc;

use crate::application::services::{AuthService, DomainService};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub domain_service: Arc<DomainService>,
    pub auth_service: Arc<AuthService>,
}
