//! Idea API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateCommentRequest, CreateIdeaRequest, Idea, VoteIdeaRequest};
use crate::AppState;

/// Query parameters for listing ideas.
#[derive(Debug, Deserialize)]
pub struct ListIdeasQuery {
    /// Free-text search over title and description.
    #[serde(default)]
    pub q: Option<String>,
    /// Category filter; absent or "all" matches everything.
    #[serde(default)]
    pub category: Option<String>,
    /// Sort order: "votes", "comments" or "recent" (default).
    #[serde(default)]
    pub sort: Option<String>,
}

/// GET /api/ideas - List ideas with optional filter and sort.
pub async fn list_ideas(
    State(state): State<AppState>,
    Query(query): Query<ListIdeasQuery>,
) -> ApiResult<Vec<Idea>> {
    let snapshot = state.store.snapshot();
    let mut ideas = snapshot.ideas;

    if let Some(q) = query.q.as_deref().filter(|q| !q.is_empty()) {
        let needle = q.to_lowercase();
        ideas.retain(|idea| {
            idea.title.to_lowercase().contains(&needle)
                || idea.description.to_lowercase().contains(&needle)
        });
    }

    if let Some(category) = query.category.as_deref() {
        let category = category.to_lowercase();
        if !category.is_empty() && category != "all" {
            ideas.retain(|idea| idea.category.to_lowercase() == category);
        }
    }

    match query.sort.as_deref() {
        Some("votes") => ideas.sort_by(|a, b| b.votes.cmp(&a.votes)),
        Some("comments") => ideas.sort_by(|a, b| b.comments.len().cmp(&a.comments.len())),
        // "recent" and anything else: newest first. Ids are assigned in
        // creation order, so they sort finer than second-resolution dates.
        _ => ideas.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    success(ideas, snapshot.revision)
}

/// POST /api/ideas - Submit a new idea.
pub async fn create_idea(
    State(state): State<AppState>,
    Json(request): Json<CreateIdeaRequest>,
) -> ApiResult<Idea> {
    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            state.store.revision(),
        );
    }

    let idea = state.store.add_idea(request);
    success(idea, state.store.revision())
}

/// POST /api/ideas/:id/vote - Apply a signed vote delta.
pub async fn vote_idea(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<VoteIdeaRequest>,
) -> ApiResult<Idea> {
    if request.vote == 0 {
        return error(
            AppError::Validation("Vote must be non-zero".to_string()),
            state.store.revision(),
        );
    }

    match state.store.vote_idea(id, request.vote) {
        Some(idea) => success(idea, state.store.revision()),
        None => error(
            AppError::NotFound(format!("Idea {} not found", id)),
            state.store.revision(),
        ),
    }
}

/// POST /api/ideas/:id/comments - Comment on an idea.
pub async fn comment_idea(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<CreateCommentRequest>,
) -> ApiResult<Idea> {
    if request.text.trim().is_empty() {
        return error(
            AppError::Validation("Comment text is required".to_string()),
            state.store.revision(),
        );
    }

    match state.store.comment_idea(id, request.author, request.text) {
        Some(idea) => success(idea, state.store.revision()),
        None => error(
            AppError::NotFound(format!("Idea {} not found", id)),
            state.store.revision(),
        ),
    }
}
