//! Webinar API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateWebinarRequest, Webinar};
use crate::AppState;

/// GET /api/webinars - List all webinars.
pub async fn list_webinars(State(state): State<AppState>) -> ApiResult<Vec<Webinar>> {
    let snapshot = state.store.snapshot();
    success(snapshot.webinars, snapshot.revision)
}

/// POST /api/webinars - Schedule a new webinar.
pub async fn create_webinar(
    State(state): State<AppState>,
    Json(request): Json<CreateWebinarRequest>,
) -> ApiResult<Webinar> {
    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            state.store.revision(),
        );
    }
    if request.date.trim().is_empty() {
        return error(
            AppError::Validation("Date is required".to_string()),
            state.store.revision(),
        );
    }

    let webinar = state.store.add_webinar(request);
    success(webinar, state.store.revision())
}

/// POST /api/webinars/:id/register - Count one registration.
pub async fn register_webinar(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Webinar> {
    match state.store.register_webinar_attendee(id) {
        Some(webinar) => success(webinar, state.store.revision()),
        None => error(
            AppError::NotFound(format!("Webinar {} not found", id)),
            state.store.revision(),
        ),
    }
}
