//! Community post model matching the frontend feed items.

use serde::{Deserialize, Serialize};

use super::Comment;

/// A post on the community feed with store-maintained like counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: u64,
    pub content: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Like count, starts at zero.
    pub likes: u64,
    pub comments: Vec<Comment>,
    pub created_at: String,
}

/// Request body for publishing a community post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

fn default_author() -> String {
    "Current User".to_string()
}
