//! Handlers for liveness and health endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Bare liveness probe.
///
/// # Endpoint
///
/// `GET /ping`
///
/// Answers `pong` unconditionally; external keep-alive pingers hit this to
/// stop the host from idling the process.
pub async fn ping_handler() -> &'static str {
    "pong"
}

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: all components healthy
/// - **503 Service Unavailable**: one or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: round-trips a domain listing through the store
/// 2. **Sessions**: reports the size of the server-side session table
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let session_check = CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "Active sessions: {}",
            state.auth_service.session_count()
        )),
    };

    let all_healthy = db_check.status == "ok" && session_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            sessions: session_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks store reachability by listing domains.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.domain_service.list_domains().await {
        Ok(domains) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {} domains stored", domains.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {}", e)),
        },
    }
}
