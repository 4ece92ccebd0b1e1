//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Redirect to the first enabled domain (public)
//! - `GET  /ping`    - Liveness probe (public)
//! - `GET  /health`  - Component health report (public)
//! - `/api/*`        - REST API (session cookie required for admin routes)
//! - `/admin/*`      - Static admin UI assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Session cookie on admin routes

use crate::api;
use crate::api::handlers::{health_handler, ping_handler, root_redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied by the server on top of this
/// router so that tests can drive it directly.
pub fn app_router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .merge(api::routes::public_routes());

    Router::new()
        .route("/", get(root_redirect_handler))
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/admin", ServeDir::new("static/admin"))
        .with_state(state)
        .layer(tracing::layer())
}
