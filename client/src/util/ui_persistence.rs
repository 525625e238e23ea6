//! Persistence of preferences, favorites, and navigation history.
//!
//! SYSTEM CONTEXT
//! ==============
//! The three persisted slices are written together as one JSON blob under
//! `persist:root` after every mutation and read back once at startup.
//! Storage sits behind `KeyValueStore`: the browser build uses
//! `localStorage`, tests use `MemoryStore`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best effort. Missing, corrupt, or version-mismatched data
//! loads as defaults and write failures are dropped; both are logged and
//! neither reaches the UI.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::state::favorites::FavoritesState;
use crate::state::navigation::NavigationState;
use crate::state::ui::UiState;

pub const STORAGE_KEY: &str = "persist:root";
pub const STATE_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("stored state is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("stored state version {found} does not match {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

/// String key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;
    fn remove(&self, key: &str) -> Result<(), PersistError>;
}

/// Browser `localStorage`. Always unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(PersistError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(key).map_err(|err| PersistError::Storage(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(PersistError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.set_item(key, value).map_err(|err| PersistError::Storage(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(PersistError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.remove_item(key).map_err(|err| PersistError::Storage(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(PersistError::Unavailable)
        }
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, PersistError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), PersistError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Everything that survives a reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub version: u32,
    pub ui: UiState,
    pub favorites: FavoritesState,
    pub navigation: NavigationState,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            ui: UiState::default(),
            favorites: FavoritesState::default(),
            navigation: NavigationState::default(),
        }
    }
}

impl PersistedState {
    /// Re-establish collection invariants on rehydrated data.
    fn normalized(mut self) -> Self {
        self.favorites.normalize();
        self.navigation.normalize();
        self.ui.set_left_sidebar_width(self.ui.left_sidebar_width);
        self.ui.set_right_sidebar_width(self.ui.right_sidebar_width);
        self
    }
}

/// Read the persisted blob. `Ok(None)` when nothing is stored yet.
pub fn try_load(store: &impl KeyValueStore) -> Result<Option<PersistedState>, PersistError> {
    let Some(state) = load_json::<PersistedState>(store, STORAGE_KEY)? else {
        return Ok(None);
    };
    if state.version != STATE_VERSION {
        return Err(PersistError::VersionMismatch { found: state.version, expected: STATE_VERSION });
    }
    Ok(Some(state.normalized()))
}

/// Read the persisted blob, falling back to defaults on any failure.
pub fn load_state(store: &impl KeyValueStore) -> PersistedState {
    match try_load(store) {
        Ok(Some(state)) => state,
        Ok(None) => PersistedState::default(),
        Err(err) => {
            log::warn!("discarding persisted state: {err}");
            PersistedState::default()
        }
    }
}

/// Write the blob; failures are logged and dropped.
pub fn save_state(store: &impl KeyValueStore, state: &PersistedState) {
    if let Err(err) = save_json(store, STORAGE_KEY, state) {
        log::warn!("failed to persist state: {err}");
    }
}
