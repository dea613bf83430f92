//! Durable preference persistence.
//!
//! Only a whitelisted projection of the application state survives a
//! restart: theme, signed-in user, and the two sidebar flags. Notifications
//! and the content collections are session-scoped by contract and must
//! never be written here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{StateSnapshot, User};

/// The persisted subset of the application state.
///
/// The field set is fixed by the storage contract with the frontend;
/// adding a field widens what survives a reload, so keep it deliberate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPrefs {
    pub is_dark_mode: bool,
    pub user: Option<User>,
    pub sidebar_open: bool,
    pub sidebar_collapsed: bool,
}

impl Default for PersistedPrefs {
    fn default() -> Self {
        Self {
            is_dark_mode: false,
            user: None,
            sidebar_open: true,
            sidebar_collapsed: false,
        }
    }
}

impl PersistedPrefs {
    /// Project the persistable fields out of a snapshot.
    pub fn project(snapshot: &StateSnapshot) -> Self {
        Self {
            is_dark_mode: snapshot.is_dark_mode,
            user: snapshot.user.clone(),
            sidebar_open: snapshot.sidebar_open,
            sidebar_collapsed: snapshot.sidebar_collapsed,
        }
    }
}

/// Storage adapter for the persisted preference subset.
///
/// `load` is best-effort: `None` means absent or unreadable and the caller
/// falls back to defaults. `save` must never propagate failure; in-memory
/// state stays authoritative when the medium is unavailable, the user
/// merely loses the preference across a restart.
pub trait PrefsStore: Send + Sync {
    fn load(&self) -> Option<PersistedPrefs>;
    fn save(&self, prefs: &PersistedPrefs);
}

/// File-backed adapter: one namespaced JSON document on disk.
pub struct JsonFilePrefs {
    path: PathBuf,
}

impl JsonFilePrefs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PrefsStore for JsonFilePrefs {
    fn load(&self) -> Option<PersistedPrefs> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(prefs) => Some(prefs),
            Err(e) => {
                tracing::warn!("Ignoring malformed preference file {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn save(&self, prefs: &PersistedPrefs) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create preference directory {:?}: {}", parent, e);
                return;
            }
        }
        let json = match serde_json::to_string_pretty(prefs) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize preferences: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            tracing::warn!("Failed to write preference file {:?}: {}", self.path, e);
        }
    }
}

/// In-memory adapter for tests: remembers the last saved projection.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryPrefs {
    saved: std::sync::Mutex<Option<PersistedPrefs>>,
}

#[cfg(test)]
impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(prefs: PersistedPrefs) -> Self {
        Self {
            saved: std::sync::Mutex::new(Some(prefs)),
        }
    }
}

#[cfg(test)]
impl PrefsStore for MemoryPrefs {
    fn load(&self) -> Option<PersistedPrefs> {
        self.saved.lock().unwrap().clone()
    }

    fn save(&self, prefs: &PersistedPrefs) {
        *self.saved.lock().unwrap() = Some(prefs.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFilePrefs::new(dir.path().join("prefs.json"));

        assert!(store.load().is_none());

        let prefs = PersistedPrefs {
            is_dark_mode: true,
            user: None,
            sidebar_open: false,
            sidebar_collapsed: true,
        };
        store.save(&prefs);

        let loaded = store.load().expect("saved prefs should load");
        assert!(loaded.is_dark_mode);
        assert!(!loaded.sidebar_open);
        assert!(loaded.sidebar_collapsed);
    }

    #[test]
    fn test_malformed_file_yields_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json at all").unwrap();

        let store = JsonFilePrefs::new(&path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // Parent "directory" is actually a file, so the write cannot succeed.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let store = JsonFilePrefs::new(blocker.join("prefs.json"));
        store.save(&PersistedPrefs::default());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_defaults() {
        let prefs = PersistedPrefs::default();
        assert!(!prefs.is_dark_mode);
        assert!(prefs.user.is_none());
        assert!(prefs.sidebar_open);
        assert!(!prefs.sidebar_collapsed);
    }
}
