//! Theme, sidebar and modal endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::models::{ModalName, ModalSet};
use crate::AppState;

/// Response body for the theme endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    pub is_dark_mode: bool,
}

/// Request body for the sidebar endpoint; both fields optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarRequest {
    #[serde(default)]
    pub open: Option<bool>,
    #[serde(default)]
    pub collapsed: Option<bool>,
}

/// Response body for the sidebar endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarState {
    pub sidebar_open: bool,
    pub sidebar_collapsed: bool,
}

/// POST /api/ui/theme/toggle - Flip the color theme.
pub async fn toggle_theme(State(state): State<AppState>) -> ApiResult<ThemeState> {
    let is_dark_mode = state.store.toggle_theme();
    success(ThemeState { is_dark_mode }, state.store.revision())
}

/// PUT /api/ui/sidebar - Set sidebar visibility and/or collapse.
pub async fn update_sidebar(
    State(state): State<AppState>,
    Json(request): Json<SidebarRequest>,
) -> ApiResult<SidebarState> {
    if let Some(open) = request.open {
        state.store.set_sidebar_open(open);
    }
    if let Some(collapsed) = request.collapsed {
        state.store.set_sidebar_collapsed(collapsed);
    }

    let snapshot = state.store.snapshot();
    success(
        SidebarState {
            sidebar_open: snapshot.sidebar_open,
            sidebar_collapsed: snapshot.sidebar_collapsed,
        },
        snapshot.revision,
    )
}

/// POST /api/ui/modals/{name}/open - Open a named modal.
///
/// Unknown names succeed with the unchanged modal set, so a frontend that
/// knows a newer modal than this build does cannot break anything.
pub async fn open_modal(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<ModalSet> {
    let modals = match ModalName::from_str(&name) {
        Some(modal) => state.store.open_modal(modal),
        None => {
            tracing::debug!("Ignoring unknown modal name: {}", name);
            state.store.snapshot().modals
        }
    };
    success(modals, state.store.revision())
}

/// POST /api/ui/modals/{name}/close - Close a named modal.
pub async fn close_modal(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<ModalSet> {
    let modals = match ModalName::from_str(&name) {
        Some(modal) => state.store.close_modal(modal),
        None => {
            tracing::debug!("Ignoring unknown modal name: {}", name);
            state.store.snapshot().modals
        }
    };
    success(modals, state.store.revision())
}

/// POST /api/ui/modals/close-all - Close every modal in one transition.
pub async fn close_all_modals(State(state): State<AppState>) -> ApiResult<ModalSet> {
    let modals = state.store.close_all_modals();
    success(modals, state.store.revision())
}
