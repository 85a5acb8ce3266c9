use crate::DbError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_types::RangeContract;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved range with its decoded contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeRecord {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub payload: RangeContract,
}

/// The listing view of a saved range; the payload is not decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RangeSummary {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persistence for ranges.
///
/// Implementations assign ids and timestamps themselves. Callers are expected
/// to have validated the contract already; stores accept whatever they are given.
#[async_trait]
pub trait RangeStore: Send + Sync {
    /// Saves a new range with a fresh id; `created_at == updated_at`.
    async fn insert(&self, range: &RangeContract) -> Result<RangeRecord, DbError>;

    /// Replaces the name and payload of an existing range and refreshes
    /// `updated_at`. Returns `DbError::NotFound` for an unknown id.
    async fn update(&self, id: Uuid, range: &RangeContract) -> Result<RangeRecord, DbError>;

    /// Returns `DbError::NotFound` for an unknown id.
    async fn get(&self, id: Uuid) -> Result<RangeRecord, DbError>;

    /// Every saved range, most recently updated first.
    async fn list(&self) -> Result<Vec<RangeSummary>, DbError>;

    /// Removes the range if it exists. Deleting an unknown id succeeds.
    async fn delete(&self, id: Uuid) -> Result<(), DbError>;
}
