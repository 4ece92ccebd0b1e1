//! In-process implementation of the domain repository.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

use crate::domain::entities::DomainRecord;
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;
use serde_json::json;

/// A domain store held entirely in process memory.
///
/// Implements the same contract as [`super::PgDomainRepository`]: url
/// uniqueness, insertion-ordered listing, and ids that are never reused after
/// deletion (a monotonic counter survives deletes).
///
/// # Use Cases
///
/// - Integration tests that exercise handlers without a database
/// - Ephemeral deployments where durability is not required
pub struct MemoryDomainRepository {
    inner: RwLock<Store>,
}

struct Store {
    next_id: i64,
    records: Vec<DomainRecord>,
}

impl MemoryDomainRepository {
    /// Creates an empty in-process store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Store {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryDomainRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DomainRepository for MemoryDomainRepository {
    async fn list_all(&self) -> Result<Vec<DomainRecord>, AppError> {
        let store = self.inner.read().expect("store lock poisoned");

        let mut records = store.records.clone();
        records.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(records)
    }

    async fn list_enabled(&self) -> Result<Vec<DomainRecord>, AppError> {
        let records = self.list_all().await?;
        Ok(records.into_iter().filter(|r| r.enabled).collect())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<DomainRecord>, AppError> {
        let store = self.inner.read().expect("store lock poisoned");

        Ok(store.records.iter().find(|r| r.url == url).cloned())
    }

    async fn insert(&self, url: &str) -> Result<DomainRecord, AppError> {
        let mut store = self.inner.write().expect("store lock poisoned");

        if store.records.iter().any(|r| r.url == url) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "url": url }),
            ));
        }

        let record = DomainRecord::new(store.next_id, url.to_string(), true, Utc::now());
        store.next_id += 1;
        store.records.push(record.clone());

        Ok(record)
    }

    async fn update_enabled(&self, id: i64, enabled: bool) -> Result<DomainRecord, AppError> {
        let mut store = self.inner.write().expect("store lock poisoned");

        match store.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.enabled = enabled;
                Ok(record.clone())
            }
            None => Err(AppError::not_found("Domain not found", json!({"id": id}))),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut store = self.inner.write().expect("store lock poisoned");

        let before = store.records.len();
        store.records.retain(|r| r.id != id);

        if store.records.len() == before {
            return Err(AppError::not_found("Domain not found", json!({"id": id})));
        }

        Ok(())
    }
}
