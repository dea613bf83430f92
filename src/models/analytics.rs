//! Analytics totals model for the dashboard header cards.

use serde::{Deserialize, Serialize};

/// Running totals shown on the analytics dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsTotals {
    pub total_revenue: f64,
    pub total_students: u64,
    pub total_ideas: u64,
    pub engagement: f64,
}

/// Partial update for the analytics totals; absent fields are untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnalyticsRequest {
    #[serde(default)]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub total_students: Option<u64>,
    #[serde(default)]
    pub total_ideas: Option<u64>,
    #[serde(default)]
    pub engagement: Option<f64>,
}
