//! Analytics API endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::generate::{self, AnalyticsReport};
use crate::models::{AnalyticsTotals, UpdateAnalyticsRequest};
use crate::AppState;

/// GET /api/analytics - Live running totals.
pub async fn get_analytics(State(state): State<AppState>) -> ApiResult<AnalyticsTotals> {
    let snapshot = state.store.snapshot();
    success(snapshot.analytics, snapshot.revision)
}

/// PATCH /api/analytics - Merge a partial update into the totals.
pub async fn update_analytics(
    State(state): State<AppState>,
    Json(request): Json<UpdateAnalyticsRequest>,
) -> ApiResult<AnalyticsTotals> {
    let totals = state.store.merge_analytics(request);
    success(totals, state.store.revision())
}

/// GET /api/analytics/report - Generated 30-day mock report.
pub async fn analytics_report(State(state): State<AppState>) -> ApiResult<AnalyticsReport> {
    success(generate::analytics_report(), state.store.revision())
}
