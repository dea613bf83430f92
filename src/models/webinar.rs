//! Webinar model matching the frontend Webinar interface.

use serde::{Deserialize, Serialize};

/// A scheduled webinar with a store-maintained attendee counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webinar {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Scheduled date, ISO 8601.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Duration in minutes.
    pub duration: u32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    pub instructor: String,
    /// Registration count, starts at zero.
    pub attendees: u64,
    pub created_at: String,
}

/// Request body for scheduling a new webinar.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebinarRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub max_attendees: Option<u32>,
    #[serde(default = "default_instructor")]
    pub instructor: String,
}

fn default_duration() -> u32 {
    60
}

fn default_instructor() -> String {
    "Current User".to_string()
}
