//! Idea model matching the frontend Idea interface.

use serde::{Deserialize, Serialize};

use super::Comment;

/// A content idea submitted for community voting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    /// Net vote count. Unclamped: downvotes may push it below zero.
    pub votes: i64,
    pub comments: Vec<Comment>,
    pub created_at: String,
}

/// Request body for submitting a new idea.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_author")]
    pub author: String,
}

fn default_author() -> String {
    "Current User".to_string()
}

/// Request body for voting on an idea.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteIdeaRequest {
    /// Signed vote delta, typically +1 or -1.
    pub vote: i64,
}
