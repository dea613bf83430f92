//! Snapshot and revision endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::{RevisionInfo, StateSnapshot};
use crate::AppState;

/// GET /api/state - Full state snapshot.
pub async fn get_state(State(state): State<AppState>) -> ApiResult<StateSnapshot> {
    let snapshot = state.store.snapshot();
    let revision = snapshot.revision;
    success(snapshot, revision)
}

/// GET /api/state/revision - Current revision for cheap change detection.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision = state.store.revision();
    success(RevisionInfo { revision }, revision)
}
