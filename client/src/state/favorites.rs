//! Pinned navigation shortcuts shown in the left drawer.
//!
//! DESIGN
//! ======
//! A small FIFO register: inserting past capacity evicts the oldest entry.
//! Entries are only created through the reducers below; nothing adds a
//! favorite implicitly.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use serde::{Deserialize, Serialize};

use crate::util::collate;

pub const DEFAULT_MAX_FAVORITES: usize = 2;
pub const MIN_FAVORITES_CAPACITY: i64 = 1;
pub const MAX_FAVORITES_CAPACITY: i64 = 50;

/// A favorited page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePage {
    pub id: String,
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Epoch milliseconds when the entry was added.
    pub added_at: i64,
}

/// Page identity used when adding or toggling a favorite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRef {
    pub id: String,
    pub name: String,
    pub path: String,
    pub icon: Option<String>,
}

impl PageRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), path: path.into(), icon: None }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    fn stamp(self, now_ms: i64) -> FavoritePage {
        FavoritePage { id: self.id, name: self.name, path: self.path, icon: self.icon, added_at: now_ms }
    }
}

/// Partial update merged into an existing favorite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoritePatch {
    pub name: Option<String>,
    pub path: Option<String>,
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesState {
    pub items: Vec<FavoritePage>,
    pub max_favorites: usize,
}

impl Default for FavoritesState {
    fn default() -> Self {
        Self { items: default_items(0), max_favorites: DEFAULT_MAX_FAVORITES }
    }
}

fn default_items(now_ms: i64) -> Vec<FavoritePage> {
    vec![
        PageRef::new("overview", "Overview", "/dashboard").with_icon("layout-dashboard").stamp(now_ms),
        PageRef::new("projects", "Projects", "/dashboard/projects").with_icon("folder-kanban").stamp(now_ms),
    ]
}

impl FavoritesState {
    /// Append `page` unless its id is already present; evicts the oldest entry at capacity.
    pub fn add(&mut self, page: PageRef, now_ms: i64) {
        if self.contains(&page.id) {
            return;
        }
        self.make_room();
        self.items.push(page.stamp(now_ms));
    }

    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    pub fn toggle(&mut self, page: PageRef, now_ms: i64) {
        if self.contains(&page.id) {
            self.remove(&page.id);
        } else {
            self.add(page, now_ms);
        }
    }

    /// Exchange the two entries; no-op unless exactly two are present.
    pub fn swap(&mut self) {
        if self.items.len() == 2 {
            self.items.swap(0, 1);
        }
    }

    pub fn update(&mut self, id: &str, patch: FavoritePatch) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(path) = patch.path {
            item.path = path;
        }
        if patch.icon.is_some() {
            item.icon = patch.icon;
        }
    }

    pub fn reset(&mut self, now_ms: i64) {
        self.items = default_items(now_ms);
        self.trim_to_capacity();
    }

    /// Clamp to `[1, 50]`; shrinking below the current length evicts oldest entries.
    pub fn set_capacity(&mut self, capacity: i64) {
        let clamped = capacity.clamp(MIN_FAVORITES_CAPACITY, MAX_FAVORITES_CAPACITY);
        self.max_favorites = usize::try_from(clamped).unwrap_or(DEFAULT_MAX_FAVORITES);
        self.trim_to_capacity();
    }

    /// Re-establish the capacity and uniqueness invariants after rehydration.
    pub fn normalize(&mut self) {
        let capacity = i64::try_from(self.max_favorites).unwrap_or(MAX_FAVORITES_CAPACITY);
        self.set_capacity(capacity);
        let mut seen = std::collections::HashSet::new();
        self.items.retain(|item| seen.insert(item.id.clone()));
    }

    fn make_room(&mut self) {
        while !self.items.is_empty() && self.items.len() >= self.max_favorites {
            self.items.remove(0);
        }
    }

    fn trim_to_capacity(&mut self) {
        let overflow = self.items.len().saturating_sub(self.max_favorites);
        if overflow > 0 {
            self.items.drain(..overflow);
        }
    }

    // ---------------------------------------------------------------
    // Selectors
    // ---------------------------------------------------------------

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FavoritePage> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn can_add_more(&self) -> bool {
        self.items.len() < self.max_favorites
    }

    #[must_use]
    pub fn at_max(&self) -> bool {
        self.items.len() >= self.max_favorites
    }

    #[must_use]
    pub fn first(&self) -> Option<&FavoritePage> {
        self.items.first()
    }

    #[must_use]
    pub fn second(&self) -> Option<&FavoritePage> {
        self.items.get(1)
    }

    #[must_use]
    pub fn recent(&self, limit: usize) -> &[FavoritePage] {
        &self.items[..limit.min(self.items.len())]
    }

    #[must_use]
    pub fn sorted_by_name(&self) -> Vec<&FavoritePage> {
        let mut sorted = self.items.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| collate::compare(&a.name, &b.name));
        sorted
    }
}
