//! Notification model for the ephemeral toast queue.

use serde::{Deserialize, Serialize};

/// Severity classes the toast renderer maps to visual styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

/// A queued notification.
///
/// Ids are store-assigned and strictly increasing, so creation order and
/// display order agree. Notifications are session-scoped and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    /// Wire name is `type` to match the frontend payloads.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: String,
}

/// Request body for pushing a notification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}
