//! Community feed API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CommunityPost, CreateCommentRequest, CreatePostRequest};
use crate::AppState;

/// GET /api/community/posts - List all community posts.
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Vec<CommunityPost>> {
    let snapshot = state.store.snapshot();
    success(snapshot.community_posts, snapshot.revision)
}

/// POST /api/community/posts - Publish a community post.
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> ApiResult<CommunityPost> {
    if request.content.trim().is_empty() {
        return error(
            AppError::Validation("Content is required".to_string()),
            state.store.revision(),
        );
    }

    let post = state.store.add_community_post(request);
    success(post, state.store.revision())
}

/// POST /api/community/posts/:id/like - Count one like.
pub async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<CommunityPost> {
    match state.store.like_post(id) {
        Some(post) => success(post, state.store.revision()),
        None => error(
            AppError::NotFound(format!("Post {} not found", id)),
            state.store.revision(),
        ),
    }
}

/// POST /api/community/posts/:id/comments - Comment on a post.
pub async fn comment_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<CreateCommentRequest>,
) -> ApiResult<CommunityPost> {
    if request.text.trim().is_empty() {
        return error(
            AppError::Validation("Comment text is required".to_string()),
            state.store.revision(),
        );
    }

    match state.store.comment_post(id, request.author, request.text) {
        Some(post) => success(post, state.store.revision()),
        None => error(
            AppError::NotFound(format!("Post {} not found", id)),
            state.store.revision(),
        ),
    }
}
