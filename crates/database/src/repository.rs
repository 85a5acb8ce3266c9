use crate::codec::{JsonCodec, PayloadCodec};
use crate::store::{RangeRecord, RangeStore, RangeSummary};
use crate::DbError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_types::RangeContract;
use sqlx::FromRow;
use sqlx::postgres::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the `ranges` table. It encapsulates all SQL and payload encoding.
#[derive(Clone)]
pub struct DbRepository {
    pool: PgPool,
    codec: Arc<dyn PayloadCodec>,
}

// This struct represents a row fetched from the ranges table.
#[derive(FromRow, Debug, Clone)]
struct DbRange {
    id: Uuid,
    name: String,
    payload_json: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DbRepository {
    /// Creates a new `DbRepository` that stores payloads as JSON.
    pub fn new(pool: PgPool) -> Self {
        Self::with_codec(pool, Arc::new(JsonCodec))
    }

    pub fn with_codec(pool: PgPool, codec: Arc<dyn PayloadCodec>) -> Self {
        Self { pool, codec }
    }

    fn decode(&self, row: DbRange) -> Result<RangeRecord, DbError> {
        let payload = self.codec.decode(&row.payload_json)?;
        Ok(RangeRecord {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
            payload,
        })
    }
}

#[async_trait]
impl RangeStore for DbRepository {
    async fn insert(&self, range: &RangeContract) -> Result<RangeRecord, DbError> {
        let payload_json = self.codec.encode(range)?;
        let row = sqlx::query_as::<_, DbRange>(
            r#"
            INSERT INTO ranges (id, name, payload_json, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, name, payload_json, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&range.name)
        .bind(&payload_json)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        self.decode(row)
    }

    async fn update(&self, id: Uuid, range: &RangeContract) -> Result<RangeRecord, DbError> {
        let payload_json = self.codec.encode(range)?;
        let row = sqlx::query_as::<_, DbRange>(
            r#"
            UPDATE ranges
            SET name = $2, payload_json = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, name, payload_json, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&range.name)
        .bind(&payload_json)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound)?;

        self.decode(row)
    }

    async fn get(&self, id: Uuid) -> Result<RangeRecord, DbError> {
        let row = sqlx::query_as::<_, DbRange>(
            "SELECT id, name, payload_json, created_at, updated_at FROM ranges WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| if let sqlx::Error::RowNotFound = e { DbError::NotFound } else { e.into() })?;

        self.decode(row)
    }

    async fn list(&self) -> Result<Vec<RangeSummary>, DbError> {
        let summaries = sqlx::query_as::<_, RangeSummary>(
            "SELECT id, name, created_at, updated_at FROM ranges ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(summaries)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM ranges WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(%id, "Delete requested for a range that does not exist.");
        }
        Ok(())
    }
}
