//! Handlers for operator login and logout.

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
};
use tracing::info;

use crate::api::dto::auth::{AuthResponse, LoginRequest};
use crate::api::middleware::auth::{SESSION_COOKIE, session_token_from_headers};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticates the operator and establishes a session.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// On success the opaque session token is returned as an `HttpOnly` cookie
/// scoped to the whole site; it must accompany every admin request until
/// logout or expiry.
///
/// # Errors
///
/// Returns 401 if the password does not match the configured secret. No
/// session is created in that case.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.auth_service.login(&payload.password)?;

    info!("Operator logged in");

    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        state.auth_service.ttl_seconds()
    );

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthResponse { success: true }),
    ))
}

/// Destroys the presented session and clears the cookie.
///
/// # Endpoint
///
/// `POST /api/logout`
///
/// Gated by the session middleware, so the cookie is known to be present and
/// valid when this handler runs.
pub async fn logout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Some(token) = session_token_from_headers(&headers) {
        state.auth_service.logout(&token);
    }

    info!("Operator logged out");

    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");

    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthResponse { success: true }),
    )
}
