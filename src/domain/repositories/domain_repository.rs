//! Repository trait for domain record storage.

use crate::domain::entities::DomainRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the domain store.
///
/// Holds the ordered collection of candidate redirect targets. All listing
/// operations return records in ascending `created_at` order with `id` as the
/// tie-break, which also defines redirect-target selection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDomainRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryDomainRepository`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Lists every stored record, ascending by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_all(&self) -> Result<Vec<DomainRecord>, AppError>;

    /// Lists enabled records only, ascending by creation time.
    ///
    /// The first element, when present, is the current redirect target.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_enabled(&self) -> Result<Vec<DomainRecord>, AppError>;

    /// Finds a record by its normalized url.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<DomainRecord>, AppError>;

    /// Inserts a new record for an already-normalized url.
    ///
    /// The store assigns `id` and `created_at`; the record starts enabled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with that url already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, url: &str) -> Result<DomainRecord, AppError>;

    /// Sets the enabled flag on an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_enabled(&self, id: i64, enabled: bool) -> Result<DomainRecord, AppError>;

    /// Deletes a record. Ids are never reused afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
