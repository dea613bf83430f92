//! Course API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Course, CreateCourseRequest, UpdateCourseRequest};
use crate::AppState;

/// GET /api/courses - List all courses.
pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Vec<Course>> {
    let snapshot = state.store.snapshot();
    success(snapshot.courses, snapshot.revision)
}

/// POST /api/courses - Create a new course.
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> ApiResult<Course> {
    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            state.store.revision(),
        );
    }

    let course = state.store.add_course(request);
    success(course, state.store.revision())
}

/// PUT /api/courses/:id - Partially update a course.
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateCourseRequest>,
) -> ApiResult<Course> {
    if let Some(title) = &request.title {
        if title.trim().is_empty() {
            return error(
                AppError::Validation("Title cannot be empty".to_string()),
                state.store.revision(),
            );
        }
    }

    match state.store.update_course(id, request) {
        Some(course) => success(course, state.store.revision()),
        None => error(
            AppError::NotFound(format!("Course {} not found", id)),
            state.store.revision(),
        ),
    }
}
