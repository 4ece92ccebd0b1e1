//! DTOs for domain management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::DomainRecord;

/// Individual domain information.
#[derive(Debug, Serialize)]
pub struct DomainItem {
    pub id: i64,
    pub url: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DomainRecord> for DomainItem {
    fn from(record: DomainRecord) -> Self {
        Self {
            id: record.id,
            url: record.url,
            enabled: record.enabled,
            created_at: record.created_at,
        }
    }
}

/// Response containing the full domain list.
#[derive(Debug, Serialize)]
pub struct DomainListResponse {
    pub domains: Vec<DomainItem>,
}

/// Request to register a single domain.
#[derive(Debug, Deserialize)]
pub struct CreateDomainRequest {
    pub url: String,
}

/// Response for operations returning a single domain.
#[derive(Debug, Serialize)]
pub struct DomainResponse {
    pub message: String,
    pub domain: DomainItem,
}

/// Request to register several domains at once.
///
/// The admin UI posts either a JSON array or one newline-delimited textarea
/// blob; both shapes deserialize into [`UrlsInput`].
#[derive(Debug, Deserialize)]
pub struct BatchCreateRequest {
    pub urls: UrlsInput,
}

/// Batch input, as a list of strings or one newline-delimited string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UrlsInput {
    List(Vec<String>),
    Lines(String),
}

impl UrlsInput {
    /// Splits the input into raw candidate entries. Trimming and blank-line
    /// filtering happen in the service.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            UrlsInput::List(urls) => urls,
            UrlsInput::Lines(text) => text.lines().map(str::to_string).collect(),
        }
    }
}

/// Summary statistics for a batch registration.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub inserted: usize,
    pub skipped: usize,
}

/// Response containing batch registration results.
#[derive(Debug, Serialize)]
pub struct BatchCreateResponse {
    pub message: String,
    pub summary: BatchSummary,
    pub domains: Vec<DomainItem>,
    pub skipped: Vec<String>,
}

/// Request to toggle a domain's enabled flag.
///
/// The flag is optional at the serde level so that its absence maps to a 400
/// rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct UpdateDomainRequest {
    pub enabled: Option<bool>,
}

/// Plain acknowledgement message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for the anonymous redirect-target query.
#[derive(Debug, Serialize)]
pub struct FirstDomainResponse {
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
