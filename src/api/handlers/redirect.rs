//! Handlers for redirect resolution.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::api::dto::domain::FirstDomainResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Plain-text body served when no domain is enabled.
const NO_TARGET_MESSAGE: &str = "No redirect target is currently enabled";

/// Forwards anonymous visitors to the current redirect target.
///
/// # Endpoint
///
/// `GET /`
///
/// The target is the earliest-created enabled domain. When no domain is
/// enabled the handler answers 200 with a plain-text notice, since an empty
/// domain list is an expected operating state rather than a failure.
///
/// # Errors
///
/// Returns 500 only on store errors.
pub async fn root_redirect_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.domain_service.first_enabled().await? {
        Some(target) => {
            debug!("Redirecting to {}", target.url);
            Ok(Redirect::temporary(&target.url).into_response())
        }
        None => Ok(NO_TARGET_MESSAGE.into_response()),
    }
}

/// Returns the current redirect target as data.
///
/// # Endpoint
///
/// `GET /api/first-domain`
///
/// Anonymous; the admin UI and external probes use it to display the active
/// destination without following a redirect.
///
/// # Response
///
/// ```json
/// { "url": "https://a.example.com" }
/// ```
///
/// or, when nothing is enabled:
///
/// ```json
/// { "url": null, "message": "No redirect target is currently enabled" }
/// ```
pub async fn first_domain_handler(
    State(state): State<AppState>,
) -> Result<Json<FirstDomainResponse>, AppError> {
    let response = match state.domain_service.first_enabled().await? {
        Some(target) => FirstDomainResponse {
            url: Some(target.url),
            message: None,
        },
        None => FirstDomainResponse {
            url: None,
            message: Some(NO_TARGET_MESSAGE.to_string()),
        },
    };

    Ok(Json(response))
}
