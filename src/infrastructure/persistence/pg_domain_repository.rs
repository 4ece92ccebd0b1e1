//! PostgreSQL implementation of the domain repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::DomainRecord;
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;
use serde_json::json;

/// PostgreSQL repository for domain records.
///
/// Uniqueness of `url` is enforced by a unique index, so concurrent inserts
/// of the same url resolve to exactly one stored record. Ids come from a
/// `BIGSERIAL` sequence and are never reused after deletion.
pub struct PgDomainRepository {
    pool: Arc<PgPool>,
}

impl PgDomainRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DomainRow {
    id: i64,
    url: String,
    enabled: bool,
    created_at: DateTime<Utc>,
}

impl From<DomainRow> for DomainRecord {
    fn from(row: DomainRow) -> Self {
        DomainRecord::new(row.id, row.url, row.enabled, row.created_at)
    }
}

#[async_trait]
impl DomainRepository for PgDomainRepository {
    async fn list_all(&self) -> Result<Vec<DomainRecord>, AppError> {
        let rows = sqlx::query_as::<_, DomainRow>(
            r#"
            SELECT id, url, enabled, created_at
            FROM domains
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_enabled(&self) -> Result<Vec<DomainRecord>, AppError> {
        let rows = sqlx::query_as::<_, DomainRow>(
            r#"
            SELECT id, url, enabled, created_at
            FROM domains
            WHERE enabled
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<DomainRecord>, AppError> {
        let row = sqlx::query_as::<_, DomainRow>(
            r#"
            SELECT id, url, enabled, created_at
            FROM domains
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, url: &str) -> Result<DomainRecord, AppError> {
        // The unique index turns a lost race into a Conflict via the sqlx
        // error mapping.
        let row = sqlx::query_as::<_, DomainRow>(
            r#"
            INSERT INTO domains (url)
            VALUES ($1)
            RETURNING id, url, enabled, created_at
            "#,
        )
        .bind(url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update_enabled(&self, id: i64, enabled: bool) -> Result<DomainRecord, AppError> {
        let row = sqlx::query_as::<_, DomainRow>(
            r#"
            UPDATE domains SET enabled = $2
            WHERE id = $1
            RETURNING id, url, enabled, created_at
            "#,
        )
        .bind(id)
        .bind(enabled)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("Domain not found", json!({"id": id})))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM domains WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Domain not found", json!({"id": id})));
        }

        Ok(())
    }
}
