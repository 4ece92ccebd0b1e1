//! Handlers for domain management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::domain::{
    BatchCreateRequest, BatchCreateResponse, BatchSummary, CreateDomainRequest, DomainItem,
    DomainListResponse, DomainResponse, MessageResponse, UpdateDomainRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Parses a path id, rejecting malformed values before any store access.
///
/// The store keys records by a positive integer; anything else (including the
/// literal `undefined` a broken admin UI may send) is a 400, distinct from
/// the 404 of a well-formed id that does not resolve.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request("Invalid domain id", json!({"id": raw})))
}

/// Lists all stored domains, ascending by creation time.
///
/// # Endpoint
///
/// `GET /api/domains`
pub async fn domain_list_handler(
    State(state): State<AppState>,
) -> Result<Json<DomainListResponse>, AppError> {
    let domains = state.domain_service.list_domains().await?;

    Ok(Json(DomainListResponse {
        domains: domains.into_iter().map(DomainItem::from).collect(),
    }))
}

/// Registers a single domain.
///
/// # Endpoint
///
/// `POST /api/domains`
///
/// The url is normalized (`https://` prepended when no scheme is present)
/// before storage.
///
/// # Errors
///
/// Returns 400 if the url is empty.
/// Returns 409 if the normalized url already exists.
pub async fn create_domain_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateDomainRequest>,
) -> Result<(StatusCode, Json<DomainResponse>), AppError> {
    let domain = state.domain_service.add_domain(&payload.url).await?;

    Ok((
        StatusCode::CREATED,
        Json(DomainResponse {
            message: "Domain added".to_string(),
            domain: domain.into(),
        }),
    ))
}

/// Registers several domains in one request.
///
/// # Endpoint
///
/// `POST /api/domains/batch`
///
/// Accepts `{"urls": [...]}` or `{"urls": "one\nper\nline"}`. Entries are
/// processed independently; duplicates are skipped and reported rather than
/// aborting their siblings.
///
/// # Response Codes
///
/// - **201 Created**: every entry was inserted
/// - **207 Multi-Status**: some entries were inserted, some skipped
/// - **400 Bad Request**: the list was empty after trimming, or every entry
///   already existed
pub async fn batch_create_domains_handler(
    State(state): State<AppState>,
    Json(payload): Json<BatchCreateRequest>,
) -> Result<(StatusCode, Json<BatchCreateResponse>), AppError> {
    let outcome = state
        .domain_service
        .add_domains_batch(payload.urls.into_vec())
        .await?;

    if outcome.inserted.is_empty() {
        return Err(AppError::bad_request(
            "All domains already exist",
            json!({"skipped": outcome.skipped}),
        ));
    }

    let total = outcome.total();
    let status = if outcome.skipped.is_empty() {
        StatusCode::CREATED
    } else {
        StatusCode::MULTI_STATUS
    };

    let response = BatchCreateResponse {
        message: format!("Added {} of {} domains", outcome.inserted.len(), total),
        summary: BatchSummary {
            total,
            inserted: outcome.inserted.len(),
            skipped: outcome.skipped.len(),
        },
        domains: outcome.inserted.into_iter().map(DomainItem::from).collect(),
        skipped: outcome.skipped,
    };

    Ok((status, Json(response)))
}

/// Toggles a domain's enabled flag.
///
/// # Endpoint
///
/// `PUT /api/domains/{id}`
///
/// # Errors
///
/// Returns 400 if the `enabled` flag is missing or the id is malformed.
/// Returns 404 if the id does not resolve.
pub async fn update_domain_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateDomainRequest>,
) -> Result<Json<DomainResponse>, AppError> {
    let id = parse_id(&id)?;

    let enabled = payload.enabled.ok_or_else(|| {
        AppError::bad_request("Missing enabled flag", json!({"field": "enabled"}))
    })?;

    let domain = state.domain_service.set_enabled(id, enabled).await?;

    Ok(Json(DomainResponse {
        message: "Domain status updated".to_string(),
        domain: domain.into(),
    }))
}

/// Removes a domain.
///
/// # Endpoint
///
/// `DELETE /api/domains/{id}`
///
/// # Errors
///
/// Returns 400 if the id is malformed.
/// Returns 404 if the id does not resolve.
pub async fn delete_domain_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;

    state.domain_service.remove_domain(id).await?;

    Ok(Json(MessageResponse {
        message: "Domain deleted".to_string(),
    }))
}
