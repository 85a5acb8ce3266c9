use crate::{AppState, error::AppError};
use analyzer::RangeStats;
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use core_types::RangeContract;
use database::{RangeRecord, RangeSummary};
use std::sync::Arc;
use uuid::Uuid;

/// Request bodies and path ids arrive as `Result` so that parse failures go through
/// `AppError` and share its response shape.
type Payload = Result<Json<RangeContract>, JsonRejection>;
type RangeId = Result<Path<Uuid>, PathRejection>;

/// # GET /api/health
pub async fn health() -> &'static str {
    "OK"
}

/// # GET /api/ranges
/// Lists every saved range, most recently updated first.
pub async fn list_ranges(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RangeSummary>>, AppError> {
    let ranges = state.service.list().await?;
    Ok(Json(ranges))
}

/// # POST /api/ranges
pub async fn create_range(
    State(state): State<Arc<AppState>>,
    payload: Payload,
) -> Result<(StatusCode, Json<RangeRecord>), AppError> {
    let Json(payload) = payload?;
    let record = state.service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// # GET /api/ranges/:id
pub async fn get_range(
    id: RangeId,
    State(state): State<Arc<AppState>>,
) -> Result<Json<RangeRecord>, AppError> {
    let Path(id) = id?;
    let record = state.service.get(id).await?;
    Ok(Json(record))
}

/// # PUT /api/ranges/:id
pub async fn update_range(
    id: RangeId,
    State(state): State<Arc<AppState>>,
    payload: Payload,
) -> Result<Json<RangeRecord>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let record = state.service.update(id, &payload).await?;
    Ok(Json(record))
}

/// # DELETE /api/ranges/:id
pub async fn delete_range(
    id: RangeId,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// # POST /api/ranges/validate
/// Checks the contract only; nothing is saved.
pub async fn validate_range(
    State(state): State<Arc<AppState>>,
    payload: Payload,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    state.service.validate(&payload)?;
    Ok(StatusCode::NO_CONTENT)
}

/// # POST /api/ranges/stats
/// VPIP plus the range-wide average weight of every action.
pub async fn range_stats(
    State(state): State<Arc<AppState>>,
    payload: Payload,
) -> Result<Json<RangeStats>, AppError> {
    let Json(payload) = payload?;
    let stats = state.service.stats(&payload)?;
    Ok(Json(stats))
}
