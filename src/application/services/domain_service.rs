//! Domain management and redirect-target selection service.

use crate::domain::entities::DomainRecord;
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;
use crate::utils::url_norm::normalize_url;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a batch insert.
///
/// `skipped` holds the normalized urls that already existed; their failure
/// does not abort sibling insertions.
#[derive(Debug)]
pub struct BatchInsert {
    pub inserted: Vec<DomainRecord>,
    pub skipped: Vec<String>,
}

impl BatchInsert {
    /// Number of urls processed, inserted or skipped.
    pub fn total(&self) -> usize {
        self.inserted.len() + self.skipped.len()
    }
}

/// Service for managing candidate redirect targets.
///
/// Normalizes destination urls before storage, enforces url uniqueness, and
/// resolves the current redirect target (first enabled record by creation
/// time).
pub struct DomainService {
    repository: Arc<dyn DomainRepository>,
}

impl DomainService {
    /// Creates a new domain service.
    pub fn new(repository: Arc<dyn DomainRepository>) -> Self {
        Self { repository }
    }

    /// Registers a single destination domain.
    ///
    /// The url is trimmed and normalized (`https://` prepended when no scheme
    /// is present) before the uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the url is empty after trimming.
    /// Returns [`AppError::Conflict`] if the normalized url already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn add_domain(&self, url: &str) -> Result<DomainRecord, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request(
                "Domain url must not be empty",
                json!({}),
            ));
        }

        let normalized = normalize_url(url);

        if self.repository.find_by_url(&normalized).await?.is_some() {
            return Err(AppError::conflict(
                "Domain already exists",
                json!({"url": normalized}),
            ));
        }

        debug!("Registering domain {normalized}");
        self.repository.insert(&normalized).await
    }

    /// Registers a batch of destination domains, one at a time.
    ///
    /// Blank entries are dropped before processing. Duplicates (within the
    /// batch or against the store) are skipped without aborting the rest;
    /// any other storage error aborts the batch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no entry survives trimming.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn add_domains_batch(&self, urls: Vec<String>) -> Result<BatchInsert, AppError> {
        let candidates: Vec<String> = urls
            .iter()
            .map(|u| u.trim())
            .filter(|u| !u.is_empty())
            .map(normalize_url)
            .collect();

        if candidates.is_empty() {
            return Err(AppError::bad_request(
                "Domain list must not be empty",
                json!({}),
            ));
        }

        let mut inserted = Vec::new();
        let mut skipped = Vec::new();

        // Sequential on purpose: partial-failure accounting stays deterministic.
        for url in candidates {
            if self.repository.find_by_url(&url).await?.is_some() {
                skipped.push(url);
                continue;
            }

            match self.repository.insert(&url).await {
                Ok(record) => inserted.push(record),
                Err(AppError::Conflict { .. }) => skipped.push(url),
                Err(e) => return Err(e),
            }
        }

        debug!(
            "Batch insert: {} added, {} skipped",
            inserted.len(),
            skipped.len()
        );

        Ok(BatchInsert { inserted, skipped })
    }

    /// Lists every stored domain, ascending by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_domains(&self) -> Result<Vec<DomainRecord>, AppError> {
        self.repository.list_all().await
    }

    /// Resolves the current redirect target.
    ///
    /// Returns the earliest-created enabled record, or `None` when no record
    /// is enabled. An empty result is an expected operating state, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn first_enabled(&self) -> Result<Option<DomainRecord>, AppError> {
        let enabled = self.repository.list_enabled().await?;
        Ok(enabled.into_iter().next())
    }

    /// Toggles the enabled flag on an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn set_enabled(&self, id: i64, enabled: bool) -> Result<DomainRecord, AppError> {
        self.repository.update_enabled(id, enabled).await
    }

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn remove_domain(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
