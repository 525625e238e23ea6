//! Navigation history, current location, and breadcrumb trail.
//!
//! DESIGN
//! ======
//! History is newest-first and keyed by path: revisiting a page moves its
//! entry to the front instead of duplicating it. The log is bounded; the
//! default keeps only the two most recent pages for the "Recently" tab.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::util::clock::MS_PER_DAY;

pub const DEFAULT_MAX_HISTORY: usize = 2;
pub const MIN_HISTORY_CAPACITY: i64 = 10;
pub const MAX_HISTORY_CAPACITY: i64 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationHistoryItem {
    pub id: String,
    pub path: String,
    pub title: String,
    /// Epoch milliseconds of the visit.
    pub timestamp: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationState {
    pub current_path: String,
    pub previous_path: Option<String>,
    pub history: Vec<NavigationHistoryItem>,
    pub max_history_size: usize,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub active_section: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_path: "/".to_owned(),
            previous_path: None,
            history: Vec::new(),
            max_history_size: DEFAULT_MAX_HISTORY,
            breadcrumbs: Vec::new(),
            active_section: None,
        }
    }
}

/// History partitioned by local calendar day.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryByDate<'a> {
    pub today: Vec<&'a NavigationHistoryItem>,
    pub yesterday: Vec<&'a NavigationHistoryItem>,
    pub older: Vec<&'a NavigationHistoryItem>,
}

impl NavigationState {
    /// Record a visit to `path` and make it the current location.
    pub fn record(&mut self, path: &str, title: &str, now_ms: i64) {
        self.previous_path = Some(std::mem::replace(&mut self.current_path, path.to_owned()));
        self.history.retain(|item| item.path != path);
        self.history.insert(
            0,
            NavigationHistoryItem {
                id: format!("{path}-{now_ms}"),
                path: path.to_owned(),
                title: title.to_owned(),
                timestamp: now_ms,
            },
        );
        self.history.truncate(self.max_history_size);
    }

    /// Swap current and previous paths.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.previous_path.take() {
            self.previous_path = Some(std::mem::replace(&mut self.current_path, previous));
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn remove_entry(&mut self, id: &str) {
        self.history.retain(|item| item.id != id);
    }

    /// Drop entries at or before `now - days`.
    pub fn prune_older_than(&mut self, days: i64, now_ms: i64) {
        let cutoff = now_ms.saturating_sub(days.saturating_mul(MS_PER_DAY));
        self.history.retain(|item| item.timestamp > cutoff);
    }

    /// Clamp to `[10, 100]` and truncate.
    pub fn set_capacity(&mut self, capacity: i64) {
        let clamped = capacity.clamp(MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY);
        self.max_history_size = usize::try_from(clamped).unwrap_or(DEFAULT_MAX_HISTORY);
        self.history.truncate(self.max_history_size);
    }

    /// Re-establish ordering, uniqueness, and capacity after rehydration.
    pub fn normalize(&mut self) {
        self.max_history_size = stored_capacity(self.max_history_size);
        self.history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let mut seen = HashSet::new();
        self.history.retain(|item| seen.insert(item.path.clone()));
        self.history.truncate(self.max_history_size);
    }

    pub fn set_breadcrumbs(&mut self, breadcrumbs: Vec<Breadcrumb>) {
        self.breadcrumbs = breadcrumbs;
    }

    pub fn add_breadcrumb(&mut self, crumb: Breadcrumb) {
        self.breadcrumbs.push(crumb);
    }

    /// Out-of-range indices are ignored.
    pub fn remove_breadcrumb(&mut self, index: usize) {
        if index < self.breadcrumbs.len() {
            self.breadcrumbs.remove(index);
        }
    }

    pub fn clear_breadcrumbs(&mut self) {
        self.breadcrumbs.clear();
    }

    pub fn set_active_section(&mut self, section: Option<String>) {
        self.active_section = section;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ---------------------------------------------------------------
    // Selectors
    // ---------------------------------------------------------------

    #[must_use]
    pub fn recent(&self, limit: usize) -> &[NavigationHistoryItem] {
        &self.history[..limit.min(self.history.len())]
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.previous_path.is_some()
    }

    #[must_use]
    pub fn by_path(&self, path: &str) -> Vec<&NavigationHistoryItem> {
        self.history.iter().filter(|item| item.path == path).collect()
    }

    #[must_use]
    pub fn unique_paths(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.history
            .iter()
            .map(|item| item.path.as_str())
            .filter(|path| seen.insert(*path))
            .collect()
    }

    #[must_use]
    pub fn last_breadcrumb(&self) -> Option<&Breadcrumb> {
        self.breadcrumbs.last()
    }

    /// Partition history around `today_start_ms` (local midnight).
    #[must_use]
    pub fn grouped_by_date(&self, today_start_ms: i64) -> HistoryByDate<'_> {
        let yesterday_start = today_start_ms - MS_PER_DAY;
        let mut groups = HistoryByDate::default();
        for item in &self.history {
            if item.timestamp >= today_start_ms {
                groups.today.push(item);
            } else if item.timestamp >= yesterday_start {
                groups.yesterday.push(item);
            } else {
                groups.older.push(item);
            }
        }
        groups
    }
}

/// Capacity rule for a rehydrated blob: 0 means unset, the default stays,
/// anything else goes through the same clamp as `set_capacity`.
fn stored_capacity(raw: usize) -> usize {
    match raw {
        0 | DEFAULT_MAX_HISTORY => DEFAULT_MAX_HISTORY,
        n => {
            let wide = i64::try_from(n).unwrap_or(MAX_HISTORY_CAPACITY);
            let clamped = wide.clamp(MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY);
            usize::try_from(clamped).unwrap_or(DEFAULT_MAX_HISTORY)
        }
    }
}
