//! Notification API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateNotificationRequest, Notification};
use crate::AppState;

/// GET /api/notifications - List the queued notifications in display order.
pub async fn list_notifications(State(state): State<AppState>) -> ApiResult<Vec<Notification>> {
    let snapshot = state.store.snapshot();
    success(snapshot.notifications, snapshot.revision)
}

/// POST /api/notifications - Queue a notification.
pub async fn create_notification(
    State(state): State<AppState>,
    Json(request): Json<CreateNotificationRequest>,
) -> ApiResult<Notification> {
    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            state.store.revision(),
        );
    }

    let notification = state
        .store
        .add_notification(request.kind, request.title, request.message);
    success(notification, state.store.revision())
}

/// DELETE /api/notifications/:id - Dismiss a notification.
///
/// Succeeds whether or not the id is still queued: dismissal races the
/// frontend's own toast timeout, so double-deletes are normal traffic.
pub async fn remove_notification(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<()> {
    state.store.remove_notification(id);
    success((), state.store.revision())
}

/// DELETE /api/notifications - Dismiss everything at once.
pub async fn clear_notifications(State(state): State<AppState>) -> ApiResult<()> {
    state.store.clear_notifications();
    success((), state.store.revision())
}
