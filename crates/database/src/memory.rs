use crate::codec::{JsonCodec, PayloadCodec};
use crate::store::{RangeRecord, RangeStore, RangeSummary};
use crate::DbError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_types::RangeContract;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredRange {
    name: String,
    payload: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// A process-local `RangeStore`, used for demos and tests.
///
/// Payloads still go through the codec, so a range read back from here looks
/// exactly like one read back from PostgreSQL.
#[derive(Clone)]
pub struct InMemoryStore {
    ranges: Arc<RwLock<HashMap<Uuid, StoredRange>>>,
    codec: Arc<dyn PayloadCodec>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_codec(Arc::new(JsonCodec))
    }

    pub fn with_codec(codec: Arc<dyn PayloadCodec>) -> Self {
        Self {
            ranges: Arc::new(RwLock::new(HashMap::new())),
            codec,
        }
    }

    fn to_record(&self, id: Uuid, stored: &StoredRange) -> Result<RangeRecord, DbError> {
        Ok(RangeRecord {
            id,
            name: stored.name.clone(),
            created_at: stored.created_at,
            updated_at: stored.updated_at,
            payload: self.codec.decode(&stored.payload)?,
        })
    }
}

#[async_trait]
impl RangeStore for InMemoryStore {
    async fn insert(&self, range: &RangeContract) -> Result<RangeRecord, DbError> {
        let now = Utc::now();
        let stored = StoredRange {
            name: range.name.clone(),
            payload: self.codec.encode(range)?,
            created_at: now,
            updated_at: now,
        };
        let id = Uuid::new_v4();
        let record = self.to_record(id, &stored)?;
        self.ranges.write().await.insert(id, stored);
        Ok(record)
    }

    async fn update(&self, id: Uuid, range: &RangeContract) -> Result<RangeRecord, DbError> {
        let payload = self.codec.encode(range)?;
        let mut ranges = self.ranges.write().await;
        let stored = ranges.get_mut(&id).ok_or(DbError::NotFound)?;
        stored.name = range.name.clone();
        stored.payload = payload;
        // Keep updated_at strictly increasing even if the clock has not ticked.
        stored.updated_at = Utc::now().max(stored.updated_at + chrono::Duration::microseconds(1));
        self.to_record(id, stored)
    }

    async fn get(&self, id: Uuid) -> Result<RangeRecord, DbError> {
        let ranges = self.ranges.read().await;
        let stored = ranges.get(&id).ok_or(DbError::NotFound)?;
        self.to_record(id, stored)
    }

    async fn list(&self) -> Result<Vec<RangeSummary>, DbError> {
        let ranges = self.ranges.read().await;
        let mut summaries: Vec<RangeSummary> = ranges
            .iter()
            .map(|(id, stored)| RangeSummary {
                id: *id,
                name: stored.name.clone(),
                created_at: stored.created_at,
                updated_at: stored.updated_at,
            })
            .collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        if self.ranges.write().await.remove(&id).is_none() {
            tracing::debug!(%id, "Delete requested for a range that does not exist.");
        }
        Ok(())
    }
}
