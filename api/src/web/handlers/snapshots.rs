// Snapshot endpoints

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use tracing::debug;

use super::common::{error_response, ApiResponse, ApiResult, SnapshotsQuery};
use crate::constants::response::SNAPSHOT_KEYS;
use crate::services::SnapshotSummary;
use crate::snapshot::{NodeRecord, RECORD_KEYS};
use crate::web::AppState;

/// List snapshot summaries, newest first
pub async fn list_snapshots(
    Query(query): Query<SnapshotsQuery>,
    State(state): State<AppState>,
) -> ApiResult<Vec<SnapshotSummary>> {
    debug!(
        "Snapshot listing requested (before: {:?}, limit: {:?})",
        query.before, query.limit
    );

    match state
        .listing_service
        .list_snapshots(query.before.as_deref(), query.limit.as_deref())
        .await
    {
        Ok(snapshots) => Ok(Json(ApiResponse::success(&SNAPSHOT_KEYS, snapshots))),
        Err(e) => Err(error_response("Failed to list snapshots", &e)),
    }
}

/// Get the reachable nodes of one snapshot (`latest` or a snapshot id)
pub async fn get_reachable_nodes(
    Path(snapshot_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Vec<NodeRecord>> {
    match state
        .reachable_service
        .get_reachable_nodes(&snapshot_id)
        .await
    {
        Ok(nodes) => Ok(Json(ApiResponse::success(&RECORD_KEYS, nodes))),
        Err(e) => Err(error_response(
            &format!("Failed to load reachable nodes for snapshot {}", snapshot_id),
            &e,
        )),
    }
}
