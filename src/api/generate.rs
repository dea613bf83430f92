//! Content generation API endpoints.
//!
//! Thin wrappers around the `generate` module. Each endpoint sleeps for the
//! configured delay to mimic inference latency, then returns the typed
//! record. None of them touch the store.

use std::time::Duration;

use axum::{extract::State, Json};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::generate::{
    self, AutomationTask, BrandingKit, CommunityPostDraft, CourseOutline, WebinarAgenda,
};
use crate::AppState;

/// Request body for the generation endpoints.
///
/// The frontend sends the field under different names per feature, so all
/// of them land on `prompt`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(alias = "topic", alias = "content", alias = "keyword", alias = "title")]
    pub prompt: String,
}

async fn inference_delay(state: &AppState) {
    let delay = state.config.generation_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
}

/// POST /api/generate/course-outline - Generate a course outline.
pub async fn generate_course_outline(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<CourseOutline> {
    if request.prompt.trim().is_empty() {
        return error(
            AppError::Validation("Prompt is required".to_string()),
            state.store.revision(),
        );
    }

    inference_delay(&state).await;
    success(
        generate::course_outline(&request.prompt),
        state.store.revision(),
    )
}

/// POST /api/generate/webinar-agenda - Generate a webinar agenda.
pub async fn generate_webinar_agenda(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<WebinarAgenda> {
    if request.prompt.trim().is_empty() {
        return error(
            AppError::Validation("Prompt is required".to_string()),
            state.store.revision(),
        );
    }

    inference_delay(&state).await;
    success(
        generate::webinar_agenda(&request.prompt),
        state.store.revision(),
    )
}

/// POST /api/generate/branding-kit - Generate a branding kit.
pub async fn generate_branding_kit(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<BrandingKit> {
    if request.prompt.trim().is_empty() {
        return error(
            AppError::Validation("Prompt is required".to_string()),
            state.store.revision(),
        );
    }

    inference_delay(&state).await;
    success(
        generate::branding_kit(&request.prompt),
        state.store.revision(),
    )
}

/// POST /api/generate/automation-task - Generate a scheduled-post task.
pub async fn generate_automation_task(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<AutomationTask> {
    if request.prompt.trim().is_empty() {
        return error(
            AppError::Validation("Prompt is required".to_string()),
            state.store.revision(),
        );
    }

    inference_delay(&state).await;
    success(
        generate::automation_task(&request.prompt),
        state.store.revision(),
    )
}

/// POST /api/generate/idea-suggestions - Generate idea suggestions.
pub async fn generate_idea_suggestions(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Vec<String>> {
    if request.prompt.trim().is_empty() {
        return error(
            AppError::Validation("Prompt is required".to_string()),
            state.store.revision(),
        );
    }

    inference_delay(&state).await;
    success(
        generate::idea_suggestions(&request.prompt),
        state.store.revision(),
    )
}

/// POST /api/generate/community-post - Generate a community post draft.
pub async fn generate_community_post(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<CommunityPostDraft> {
    if request.prompt.trim().is_empty() {
        return error(
            AppError::Validation("Prompt is required".to_string()),
            state.store.revision(),
        );
    }

    inference_delay(&state).await;
    success(
        generate::community_post(&request.prompt),
        state.store.revision(),
    )
}
