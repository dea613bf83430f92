//! Global application state store.
//!
//! Owns the authoritative `StateSnapshot`, serializes every mutation behind
//! one mutex, and publishes each new snapshot on a watch channel before the
//! mutator returns. All operations are total: bad targets degrade to no-ops
//! instead of errors, and nothing in here panics.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tokio::sync::watch;

use crate::models::{
    AnalyticsTotals, Comment, CommunityPost, Course, CreateCourseRequest, CreateIdeaRequest,
    CreatePostRequest, CreateWebinarRequest, Idea, ModalName, ModalSet, Notification,
    NotificationKind, StateSnapshot, UpdateAnalyticsRequest, UpdateCourseRequest, User, Webinar,
};
use crate::persist::{PersistedPrefs, PrefsStore};

/// Mutable state guarded by the store mutex.
struct Inner {
    snapshot: StateSnapshot,
    /// Next value of the shared id counter for notifications, entities and
    /// comments. Strictly increasing for the lifetime of the process.
    next_id: u64,
}

impl Inner {
    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// The single authoritative holder of application state.
///
/// Constructed once at startup with a persistence adapter for the preference
/// subset; shared behind an `Arc`. Reads clone the latest published snapshot
/// and never contend with writers.
pub struct Store {
    inner: Mutex<Inner>,
    watch_tx: watch::Sender<StateSnapshot>,
    prefs: Arc<dyn PrefsStore>,
}

impl Store {
    /// Create a store seeded from the persistence adapter.
    ///
    /// Absent or unreadable saved data falls back to the documented
    /// defaults. The seeded snapshot is revision 0; restoring preferences
    /// is not a mutation.
    pub fn new(prefs: Arc<dyn PrefsStore>) -> Self {
        let mut snapshot = StateSnapshot::initial();
        if let Some(saved) = prefs.load() {
            snapshot.is_dark_mode = saved.is_dark_mode;
            snapshot.user = saved.user;
            snapshot.sidebar_open = saved.sidebar_open;
            snapshot.sidebar_collapsed = saved.sidebar_collapsed;
        }
        let (watch_tx, _) = watch::channel(snapshot.clone());
        Self {
            inner: Mutex::new(Inner {
                snapshot,
                next_id: 1,
            }),
            watch_tx,
            prefs,
        }
    }

    /// Clone of the latest published snapshot.
    pub fn snapshot(&self) -> StateSnapshot {
        self.watch_tx.borrow().clone()
    }

    /// Current revision number.
    pub fn revision(&self) -> u64 {
        self.watch_tx.borrow().revision
    }

    /// Subscribe to snapshot changes.
    ///
    /// The receiver already holds the current snapshot; every mutation
    /// publishes the next one before the mutator returns to its caller.
    pub fn subscribe(&self) -> watch::Receiver<StateSnapshot> {
        self.watch_tx.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No code path panics while holding the lock, so a poisoned guard
        // still holds a coherent snapshot.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Bump the revision and publish the new snapshot. Exactly one revision
    /// per mutation, no matter how many fields it touched.
    fn commit(&self, inner: &mut Inner) -> StateSnapshot {
        inner.snapshot.revision += 1;
        let snapshot = inner.snapshot.clone();
        self.watch_tx.send_replace(snapshot.clone());
        snapshot
    }

    /// Write the preference subset through the adapter. Callers invoke this
    /// after the store lock is released so a slow medium never blocks other
    /// mutators or readers.
    fn persist(&self, snapshot: &StateSnapshot) {
        self.prefs.save(&PersistedPrefs::project(snapshot));
    }

    // ==================== THEME / UI ====================

    /// Flip the theme and return the new value.
    pub fn toggle_theme(&self) -> bool {
        let snapshot = {
            let mut inner = self.lock();
            inner.snapshot.is_dark_mode = !inner.snapshot.is_dark_mode;
            self.commit(&mut inner)
        };
        self.persist(&snapshot);
        snapshot.is_dark_mode
    }

    /// Set sidebar visibility and return the new value.
    pub fn set_sidebar_open(&self, open: bool) -> bool {
        let snapshot = {
            let mut inner = self.lock();
            inner.snapshot.sidebar_open = open;
            self.commit(&mut inner)
        };
        self.persist(&snapshot);
        snapshot.sidebar_open
    }

    /// Set sidebar collapse and return the new value.
    pub fn set_sidebar_collapsed(&self, collapsed: bool) -> bool {
        let snapshot = {
            let mut inner = self.lock();
            inner.snapshot.sidebar_collapsed = collapsed;
            self.commit(&mut inner)
        };
        self.persist(&snapshot);
        snapshot.sidebar_collapsed
    }

    // ==================== MODALS ====================

    /// Open a modal and return the resulting modal set.
    pub fn open_modal(&self, name: ModalName) -> ModalSet {
        let mut inner = self.lock();
        inner.snapshot.modals.set(name, true);
        self.commit(&mut inner).modals
    }

    /// Close a modal and return the resulting modal set.
    pub fn close_modal(&self, name: ModalName) -> ModalSet {
        let mut inner = self.lock();
        inner.snapshot.modals.set(name, false);
        self.commit(&mut inner).modals
    }

    /// Close every modal in one transition: observers see a single
    /// revision bump, never a modal-by-modal cascade.
    pub fn close_all_modals(&self) -> ModalSet {
        let mut inner = self.lock();
        inner.snapshot.modals = ModalSet::closed();
        self.commit(&mut inner).modals
    }

    // ==================== NOTIFICATIONS ====================

    /// Queue a notification and return it with its assigned id.
    pub fn add_notification(
        &self,
        kind: NotificationKind,
        title: String,
        message: String,
    ) -> Notification {
        let mut inner = self.lock();
        let notification = Notification {
            id: inner.take_id(),
            kind,
            title,
            message,
            created_at: Utc::now().to_rfc3339(),
        };
        inner.snapshot.notifications.push(notification.clone());
        self.commit(&mut inner);
        notification
    }

    /// Remove a notification by id. Unknown ids are a silent no-op and do
    /// not bump the revision.
    pub fn remove_notification(&self, id: u64) {
        let mut inner = self.lock();
        let before = inner.snapshot.notifications.len();
        inner.snapshot.notifications.retain(|n| n.id != id);
        if inner.snapshot.notifications.len() != before {
            self.commit(&mut inner);
        }
    }

    /// Drop the whole notification queue in one transition.
    pub fn clear_notifications(&self) {
        let mut inner = self.lock();
        inner.snapshot.notifications.clear();
        self.commit(&mut inner);
    }

    // ==================== IDEAS ====================

    /// Add an idea with zeroed counters and return the created record.
    pub fn add_idea(&self, request: CreateIdeaRequest) -> Idea {
        let mut inner = self.lock();
        let idea = Idea {
            id: inner.take_id(),
            title: request.title,
            description: request.description,
            category: request.category,
            tags: request.tags,
            author: request.author,
            votes: 0,
            comments: Vec::new(),
            created_at: Utc::now().to_rfc3339(),
        };
        inner.snapshot.ideas.push(idea.clone());
        self.commit(&mut inner);
        idea
    }

    /// Apply a signed vote delta. Votes accumulate without clamping, so a
    /// run of downvotes can push the count below zero. The delta comes
    /// straight off the wire, so accumulation saturates at the integer
    /// bounds instead of overflowing.
    pub fn vote_idea(&self, id: u64, delta: i64) -> Option<Idea> {
        let mut inner = self.lock();
        let updated = {
            let idea = inner.snapshot.ideas.iter_mut().find(|i| i.id == id)?;
            idea.votes = idea.votes.saturating_add(delta);
            idea.clone()
        };
        self.commit(&mut inner);
        Some(updated)
    }

    /// Append a comment to an idea.
    pub fn comment_idea(&self, id: u64, author: String, text: String) -> Option<Idea> {
        let mut inner = self.lock();
        let index = inner.snapshot.ideas.iter().position(|i| i.id == id)?;
        let comment = Comment {
            id: inner.take_id(),
            author,
            text,
            created_at: Utc::now().to_rfc3339(),
        };
        inner.snapshot.ideas[index].comments.push(comment);
        let updated = inner.snapshot.ideas[index].clone();
        self.commit(&mut inner);
        Some(updated)
    }

    // ==================== COURSES ====================

    /// Add a course with zeroed counters and return the created record.
    pub fn add_course(&self, request: CreateCourseRequest) -> Course {
        let mut inner = self.lock();
        let course = Course {
            id: inner.take_id(),
            title: request.title,
            description: request.description,
            price: request.price,
            category: request.category,
            difficulty: request.difficulty,
            duration: request.duration,
            thumbnail: request.thumbnail,
            instructor: request.instructor,
            rating: None,
            students: 0,
            revenue: 0.0,
            created_at: Utc::now().to_rfc3339(),
        };
        inner.snapshot.courses.push(course.clone());
        self.commit(&mut inner);
        course
    }

    /// Partially update a course; absent fields keep their values.
    pub fn update_course(&self, id: u64, changes: UpdateCourseRequest) -> Option<Course> {
        let mut inner = self.lock();
        let updated = {
            let course = inner.snapshot.courses.iter_mut().find(|c| c.id == id)?;
            if let Some(title) = changes.title {
                course.title = title;
            }
            if let Some(description) = changes.description {
                course.description = description;
            }
            if let Some(price) = changes.price {
                course.price = price;
            }
            if let Some(category) = changes.category {
                course.category = Some(category);
            }
            if let Some(difficulty) = changes.difficulty {
                course.difficulty = difficulty;
            }
            if let Some(duration) = changes.duration {
                course.duration = Some(duration);
            }
            if let Some(thumbnail) = changes.thumbnail {
                course.thumbnail = Some(thumbnail);
            }
            course.clone()
        };
        self.commit(&mut inner);
        Some(updated)
    }

    // ==================== WEBINARS ====================

    /// Add a webinar with a zeroed attendee counter.
    pub fn add_webinar(&self, request: CreateWebinarRequest) -> Webinar {
        let mut inner = self.lock();
        let webinar = Webinar {
            id: inner.take_id(),
            title: request.title,
            description: request.description,
            date: request.date,
            time: request.time,
            duration: request.duration,
            price: request.price,
            max_attendees: request.max_attendees,
            instructor: request.instructor,
            attendees: 0,
            created_at: Utc::now().to_rfc3339(),
        };
        inner.snapshot.webinars.push(webinar.clone());
        self.commit(&mut inner);
        webinar
    }

    /// Count one registration. Capacity is advisory copy for the frontend,
    /// so the counter is not capped at `max_attendees`.
    pub fn register_webinar_attendee(&self, id: u64) -> Option<Webinar> {
        let mut inner = self.lock();
        let updated = {
            let webinar = inner.snapshot.webinars.iter_mut().find(|w| w.id == id)?;
            webinar.attendees += 1;
            webinar.clone()
        };
        self.commit(&mut inner);
        Some(updated)
    }

    // ==================== COMMUNITY ====================

    /// Publish a community post with a zeroed like counter.
    pub fn add_community_post(&self, request: CreatePostRequest) -> CommunityPost {
        let mut inner = self.lock();
        let post = CommunityPost {
            id: inner.take_id(),
            content: request.content,
            author: request.author,
            avatar: request.avatar,
            hashtags: request.hashtags,
            likes: 0,
            comments: Vec::new(),
            created_at: Utc::now().to_rfc3339(),
        };
        inner.snapshot.community_posts.push(post.clone());
        self.commit(&mut inner);
        post
    }

    /// Count one like on a post.
    pub fn like_post(&self, id: u64) -> Option<CommunityPost> {
        let mut inner = self.lock();
        let updated = {
            let post = inner
                .snapshot
                .community_posts
                .iter_mut()
                .find(|p| p.id == id)?;
            post.likes += 1;
            post.clone()
        };
        self.commit(&mut inner);
        Some(updated)
    }

    /// Append a comment to a post.
    pub fn comment_post(&self, id: u64, author: String, text: String) -> Option<CommunityPost> {
        let mut inner = self.lock();
        let index = inner
            .snapshot
            .community_posts
            .iter()
            .position(|p| p.id == id)?;
        let comment = Comment {
            id: inner.take_id(),
            author,
            text,
            created_at: Utc::now().to_rfc3339(),
        };
        inner.snapshot.community_posts[index].comments.push(comment);
        let updated = inner.snapshot.community_posts[index].clone();
        self.commit(&mut inner);
        Some(updated)
    }

    // ==================== SESSION ====================

    /// Install the signed-in identity.
    pub fn set_user(&self, user: User) {
        let snapshot = {
            let mut inner = self.lock();
            inner.snapshot.user = Some(user);
            self.commit(&mut inner)
        };
        self.persist(&snapshot);
    }

    /// Clear the signed-in identity.
    pub fn logout(&self) {
        let snapshot = {
            let mut inner = self.lock();
            inner.snapshot.user = None;
            self.commit(&mut inner)
        };
        self.persist(&snapshot);
    }

    // ==================== ANALYTICS ====================

    /// Merge a partial update into the analytics totals and return the
    /// merged result.
    pub fn merge_analytics(&self, patch: UpdateAnalyticsRequest) -> AnalyticsTotals {
        let mut inner = self.lock();
        {
            let totals = &mut inner.snapshot.analytics;
            if let Some(total_revenue) = patch.total_revenue {
                totals.total_revenue = total_revenue;
            }
            if let Some(total_students) = patch.total_students {
                totals.total_students = total_students;
            }
            if let Some(total_ideas) = patch.total_ideas {
                totals.total_ideas = total_ideas;
            }
            if let Some(engagement) = patch.engagement {
                totals.engagement = engagement;
            }
        }
        self.commit(&mut inner).analytics
    }
}
