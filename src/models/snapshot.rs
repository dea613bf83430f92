//! State snapshot model: the root object handed to readers and subscribers.

use serde::{Deserialize, Serialize};

use super::{
    AnalyticsTotals, CommunityPost, Course, Idea, ModalSet, Notification, User, Webinar,
};

/// An immutable view of the entire application state.
///
/// Every mutation produces a fresh snapshot with `revision` incremented by
/// exactly one, so consumers can cheaply detect change and ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub revision: u64,
    pub is_dark_mode: bool,
    pub user: Option<User>,
    pub sidebar_open: bool,
    pub sidebar_collapsed: bool,
    pub modals: ModalSet,
    pub notifications: Vec<Notification>,
    pub ideas: Vec<Idea>,
    pub courses: Vec<Course>,
    pub webinars: Vec<Webinar>,
    pub community_posts: Vec<CommunityPost>,
    pub analytics: AnalyticsTotals,
}

impl StateSnapshot {
    /// The documented defaults: light theme, signed out, sidebar open and
    /// expanded, all modals closed, every collection empty.
    pub fn initial() -> Self {
        Self {
            revision: 0,
            is_dark_mode: false,
            user: None,
            sidebar_open: true,
            sidebar_collapsed: false,
            modals: ModalSet::closed(),
            notifications: Vec::new(),
            ideas: Vec::new(),
            courses: Vec::new(),
            webinars: Vec::new(),
            community_posts: Vec::new(),
            analytics: AnalyticsTotals::default(),
        }
    }
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision: u64,
}
