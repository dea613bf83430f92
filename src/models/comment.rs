//! Comment model shared by ideas and community posts.

use serde::{Deserialize, Serialize};

/// A comment attached to an idea or a community post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub text: String,
    pub created_at: String,
}

/// Request body for commenting on an idea or community post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default = "default_author")]
    pub author: String,
    pub text: String,
}

fn default_author() -> String {
    "Current User".to_string()
}
