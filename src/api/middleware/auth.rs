//! Session cookie authentication middleware.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    http::header::COOKIE,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Name of the cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Extracts the session token from a request's `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and picking the
/// [`SESSION_COOKIE`] key-value pair; other cookies are ignored.
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}

/// Authenticates admin requests using the session cookie.
///
/// # Authentication Flow
///
/// 1. Extract the `session_token` cookie from the request
/// 2. Validate the token against the server-side session table
/// 3. On success, continue to the handler
/// 4. On missing/unknown/expired token, answer `401 Unauthorized`
///
/// No store mutation happens on a failed check; the handler is never reached.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = api::routes::protected_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = session_token_from_headers(req.headers()).ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Login required"}),
        )
    })?;

    st.auth_service.authenticate(&token)?;

    Ok(next.run(req).await)
}
