use crate::error::AppError;
use analyzer::error::ContractViolation;
use analyzer::{RangeAnalyzer, RangeStats};
use core_types::RangeContract;
use database::{RangeRecord, RangeStore, RangeSummary};
use std::sync::Arc;
use uuid::Uuid;

/// Request-level orchestration: validate with the analyzer, then hit the store.
///
/// Nothing reaches the store unless it passed validation.
#[derive(Clone)]
pub struct RangeService {
    store: Arc<dyn RangeStore>,
    analyzer: RangeAnalyzer,
}

impl RangeService {
    pub fn new(store: Arc<dyn RangeStore>, analyzer: RangeAnalyzer) -> Self {
        Self { store, analyzer }
    }

    pub async fn create(&self, payload: &RangeContract) -> Result<RangeRecord, AppError> {
        self.validate(payload)?;
        let record = self.store.insert(payload).await?;
        tracing::info!(id = %record.id, name = %record.name, hands = payload.hand_count(), "Range created.");
        Ok(record)
    }

    pub async fn update(&self, id: Uuid, payload: &RangeContract) -> Result<RangeRecord, AppError> {
        self.validate(payload)?;
        let record = self.store.update(id, payload).await?;
        tracing::info!(%id, name = %record.name, hands = payload.hand_count(), "Range updated.");
        Ok(record)
    }

    pub async fn get(&self, id: Uuid) -> Result<RangeRecord, AppError> {
        tracing::debug!(%id, "Fetching range.");
        Ok(self.store.get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<RangeSummary>, AppError> {
        let summaries = self.store.list().await?;
        tracing::debug!(count = summaries.len(), "Listed ranges.");
        Ok(summaries)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete(id).await?;
        tracing::info!(%id, "Range deleted.");
        Ok(())
    }

    /// Runs the contract checks without touching the store.
    pub fn validate(&self, payload: &RangeContract) -> Result<(), AppError> {
        self.analyzer
            .validate(payload)
            .map_err(|violation| reject(payload, violation))
    }

    pub fn stats(&self, payload: &RangeContract) -> Result<RangeStats, AppError> {
        self.analyzer
            .stats(payload)
            .map_err(|violation| reject(payload, violation))
    }
}

fn reject(payload: &RangeContract, violation: ContractViolation) -> AppError {
    tracing::warn!(
        range = %payload.name,
        kind = violation.kind(),
        hand = violation.hand().unwrap_or("-"),
        "Range rejected: {violation}"
    );
    AppError::from(violation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{ActionType, HandAction};
    use database::InMemoryStore;

    fn service() -> RangeService {
        RangeService::new(Arc::new(InMemoryStore::new()), RangeAnalyzer::default())
    }

    fn valid() -> RangeContract {
        RangeContract::new("CO open")
            .with_hand(
                "AKs",
                vec![
                    HandAction::new(ActionType::Open, 50.0),
                    HandAction::new(ActionType::Fold, 50.0),
                ],
            )
            .with_hand("A5s", vec![HandAction::new(ActionType::Open, 100.0)])
    }

    fn invalid() -> RangeContract {
        RangeContract::new("bad").with_hand("AKs", vec![HandAction::new(ActionType::Open, 90.0)])
    }

    #[tokio::test]
    async fn invalid_payload_is_never_persisted() {
        let service = service();
        assert!(matches!(service.create(&invalid()).await, Err(AppError::Contract(_))));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_update_leaves_record_untouched() {
        let service = service();
        let created = service.create(&valid()).await.unwrap();

        assert!(service.update(created.id, &invalid()).await.is_err());
        assert_eq!(service.get(created.id).await.unwrap().payload, valid());
    }

    #[tokio::test]
    async fn unknown_id_maps_to_not_found() {
        let service = service();
        let id = Uuid::new_v4();
        assert!(matches!(service.get(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.update(id, &valid()).await, Err(AppError::NotFound(_))));
        assert!(service.delete(id).await.is_ok());
    }

    #[test]
    fn stats_reject_an_invalid_range() {
        let err = service().stats(&invalid()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Contract(ContractViolation::WeightSumMismatch { .. })
        ));
    }

    #[test]
    fn stats_match_the_analyzer() {
        let stats = service().stats(&valid()).unwrap();
        assert_eq!(stats.vpip, 75.0);
        assert_eq!(stats.by_action.get(ActionType::Fold), 25.0);
    }
}
