//! Entity representing a candidate redirect target.

use chrono::{DateTime, Utc};

/// A stored candidate destination domain.
///
/// Anonymous traffic on the root path is forwarded to the earliest-created
/// record whose `enabled` flag is set. `id` and `created_at` are assigned by
/// the store at insertion and never change; `enabled` is the only mutable
/// field.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainRecord {
    pub id: i64,
    pub url: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl DomainRecord {
    /// Creates a new DomainRecord instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let record = DomainRecord::new(1, "https://example.com".to_string(), true, Utc::now());
    /// ```
    pub fn new(id: i64, url: String, enabled: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            url,
            enabled,
            created_at,
        }
    }
}
