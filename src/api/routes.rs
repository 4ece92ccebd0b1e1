//! API route configuration.
//!
//! Admin endpoints require a valid session cookie via
//! [`crate::api::middleware::auth`]; the public group is reachable
//! anonymously.

use crate::api::handlers::{
    batch_create_domains_handler, create_domain_handler, delete_domain_handler,
    domain_list_handler, first_domain_handler, login_handler, logout_handler,
    update_domain_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Anonymous API routes.
///
/// # Endpoints
///
/// - `POST /login`        - Establish an admin session
/// - `GET  /first-domain` - Current redirect target as data
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/first-domain", get(first_domain_handler))
}

/// Admin API routes, protected by session cookie authentication.
///
/// # Endpoints
///
/// - `POST   /logout`        - Destroy the current session
/// - `GET    /domains`       - List stored domains
/// - `POST   /domains`       - Register a domain
/// - `POST   /domains/batch` - Register several domains at once
/// - `PUT    /domains/{id}`  - Toggle a domain's enabled flag
/// - `DELETE /domains/{id}`  - Remove a domain
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout_handler))
        .route(
            "/domains",
            get(domain_list_handler).post(create_domain_handler),
        )
        .route("/domains/batch", post(batch_create_domains_handler))
        .route(
            "/domains/{id}",
            put(update_domain_handler).delete(delete_domain_handler),
        )
}
