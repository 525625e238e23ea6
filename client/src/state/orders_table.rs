//! Order list view: search, status filter, sort, pagination, and selection.
//!
//! DESIGN
//! ======
//! Records are immutable; `TableViewState` is the only mutable input and is
//! local to one mounted table. The visible page is a pure function of
//! `(rows, state, now)`, recomputed on every read.
//!
//! Columns are a closed enum: each variant owns its header, width hints,
//! text accessor, and comparator, so adding a column means adding a variant
//! rather than registering a loosely-typed descriptor.
//!
//! TRADE-OFFS
//! ==========
//! Any filter or sort change jumps back to the first page, and reads clamp a
//! stale page index to the last page, so a narrowed result set never shows
//! an empty page.

#[cfg(test)]
#[path = "orders_table_test.rs"]
mod orders_table_test;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::util::{collate, relative_time};

pub const PAGE_SIZE: usize = 10;
pub const MAX_PAGE_BUTTONS: usize = 5;

// =============================================================================
// Records
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [Self::InProgress, Self::Complete, Self::Pending, Self::Approved, Self::Rejected];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label().eq_ignore_ascii_case(raw.trim()))
    }

    #[must_use]
    pub fn color(self) -> BadgeColor {
        match self {
            Self::InProgress => BadgeColor::Blue,
            Self::Complete => BadgeColor::Green,
            Self::Pending | Self::Approved => BadgeColor::Yellow,
            Self::Rejected => BadgeColor::Gray,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeColor {
    Blue,
    Green,
    Yellow,
    Gray,
}

impl BadgeColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub user: OrderUser,
    pub project: String,
    pub address: String,
    /// Human-written date such as "Just now" or "Feb 2, 2023".
    pub date: String,
    pub status: OrderStatus,
}

// =============================================================================
// Sorting
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Date,
    User,
    Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// The sort menu entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    None,
    DateDesc,
    DateAsc,
    UserAsc,
    UserDesc,
    StatusAsc,
    StatusDesc,
}

impl SortOption {
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::DateDesc,
        Self::DateAsc,
        Self::UserAsc,
        Self::UserDesc,
        Self::StatusAsc,
        Self::StatusDesc,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
            Self::UserAsc => "user-asc",
            Self::UserDesc => "user-desc",
            Self::StatusAsc => "status-asc",
            Self::StatusDesc => "status-desc",
        }
    }

    /// Unknown values mean no sort.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|option| option.as_str() == raw).unwrap_or_default()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Default",
            Self::DateDesc => "Newest first",
            Self::DateAsc => "Oldest first",
            Self::UserAsc => "User (A-Z)",
            Self::UserDesc => "User (Z-A)",
            Self::StatusAsc => "Status (A-Z)",
            Self::StatusDesc => "Status (Z-A)",
        }
    }

    #[must_use]
    pub fn key_and_direction(self) -> Option<(SortKey, SortDirection)> {
        match self {
            Self::None => None,
            Self::DateDesc => Some((SortKey::Date, SortDirection::Desc)),
            Self::DateAsc => Some((SortKey::Date, SortDirection::Asc)),
            Self::UserAsc => Some((SortKey::User, SortDirection::Asc)),
            Self::UserDesc => Some((SortKey::User, SortDirection::Desc)),
            Self::StatusAsc => Some((SortKey::Status, SortDirection::Asc)),
            Self::StatusDesc => Some((SortKey::Status, SortDirection::Desc)),
        }
    }
}

impl SortKey {
    #[must_use]
    pub fn compare(self, a: &OrderRecord, b: &OrderRecord, now_ms: i64) -> Ordering {
        match self {
            Self::Date => {
                relative_time::to_epoch_ms(&a.date, now_ms).cmp(&relative_time::to_epoch_ms(&b.date, now_ms))
            }
            Self::User => collate::compare(&a.user.name, &b.user.name),
            Self::Status => collate::compare(a.status.label(), b.status.label()),
        }
    }
}

// =============================================================================
// Columns
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnWidths {
    pub size: u16,
    pub min: u16,
    pub max: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Select,
    Id,
    User,
    Project,
    Address,
    Date,
    Status,
    Actions,
}

impl Column {
    pub const ALL: [Self; 8] = [
        Self::Select,
        Self::Id,
        Self::User,
        Self::Project,
        Self::Address,
        Self::Date,
        Self::Status,
        Self::Actions,
    ];

    /// Columns the global search reads.
    pub const SEARCHABLE: [Self; 5] = [Self::Id, Self::User, Self::Project, Self::Address, Self::Status];

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Select | Self::Actions => "",
            Self::Id => "Order ID",
            Self::User => "User",
            Self::Project => "Project",
            Self::Address => "Address",
            Self::Date => "Date",
            Self::Status => "Status",
        }
    }

    #[must_use]
    pub fn widths(self) -> ColumnWidths {
        let (size, min, max) = match self {
            Self::Select => (40, 40, 40),
            Self::Id => (100, 100, 120),
            Self::User => (180, 150, 200),
            Self::Project => (180, 150, 220),
            Self::Address => (200, 180, 250),
            Self::Date => (140, 120, 160),
            Self::Status => (130, 120, 150),
            Self::Actions => (60, 60, 80),
        };
        ColumnWidths { size, min, max }
    }

    #[must_use]
    pub fn sort_key(self) -> Option<SortKey> {
        match self {
            Self::User => Some(SortKey::User),
            Self::Date => Some(SortKey::Date),
            Self::Status => Some(SortKey::Status),
            _ => None,
        }
    }

    /// Display text for data columns.
    #[must_use]
    pub fn text(self, record: &OrderRecord) -> Option<&str> {
        match self {
            Self::Select | Self::Actions => None,
            Self::Id => Some(&record.id),
            Self::User => Some(&record.user.name),
            Self::Project => Some(&record.project),
            Self::Address => Some(&record.address),
            Self::Date => Some(&record.date),
            Self::Status => Some(record.status.label()),
        }
    }
}

// =============================================================================
// View state
// =============================================================================

/// Tri-state of the header checkbox over the visible page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderCheck {
    All,
    Some,
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableViewState {
    pub global_filter: String,
    /// Selected statuses in the order they were picked.
    pub status_filter: Vec<OrderStatus>,
    pub sort: SortOption,
    pub page_index: usize,
    pub page_size: usize,
    pub selected: BTreeSet<String>,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            global_filter: String::new(),
            status_filter: Vec::new(),
            sort: SortOption::None,
            page_index: 0,
            page_size: PAGE_SIZE,
            selected: BTreeSet::new(),
        }
    }
}

/// One rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a OrderRecord>,
    pub page_index: usize,
    pub page_count: usize,
    pub filtered_count: usize,
}

impl TablePage<'_> {
    #[must_use]
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    /// One-based numbers for the first `min(5, page_count)` pages.
    #[must_use]
    pub fn page_buttons(&self) -> Vec<usize> {
        (1..=self.page_count.min(MAX_PAGE_BUTTONS)).collect()
    }

    #[must_use]
    pub fn row_ids(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.id.clone()).collect()
    }
}

impl TableViewState {
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.global_filter = text.into();
        self.page_index = 0;
    }

    pub fn toggle_status(&mut self, status: OrderStatus) {
        if let Some(index) = self.status_filter.iter().position(|s| *s == status) {
            self.status_filter.remove(index);
        } else {
            self.status_filter.push(status);
        }
        self.page_index = 0;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.page_index = 0;
    }

    /// Clear search, status filter, and sort. Selection is kept.
    pub fn clear_all(&mut self) {
        self.global_filter.clear();
        self.status_filter.clear();
        self.sort = SortOption::None;
        self.page_index = 0;
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.status_filter.is_empty() || !self.global_filter.is_empty()
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sort != SortOption::None
    }

    #[must_use]
    pub fn status_selected(&self, status: OrderStatus) -> bool {
        self.status_filter.contains(&status)
    }

    /// Search AND status filter.
    #[must_use]
    pub fn matches(&self, record: &OrderRecord) -> bool {
        if !self.status_filter.is_empty() && !self.status_filter.contains(&record.status) {
            return false;
        }
        let needle = self.global_filter.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        Column::SEARCHABLE
            .iter()
            .filter_map(|column| column.text(record))
            .any(|text| text.to_lowercase().contains(&needle))
    }

    /// Filtered rows in display order, before pagination.
    #[must_use]
    pub fn filtered<'a>(&self, rows: &'a [OrderRecord], now_ms: i64) -> Vec<&'a OrderRecord> {
        let mut out = rows.iter().filter(|row| self.matches(row)).collect::<Vec<_>>();
        if let Some((key, direction)) = self.sort.key_and_direction() {
            out.sort_by(|a, b| {
                let ordering = key.compare(a, b, now_ms);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        out
    }

    #[must_use]
    pub fn page<'a>(&self, rows: &'a [OrderRecord], now_ms: i64) -> TablePage<'a> {
        let filtered = self.filtered(rows, now_ms);
        let page_size = self.page_size.max(1);
        let filtered_count = filtered.len();
        let page_count = filtered_count.div_ceil(page_size);
        let page_index = self.page_index.min(page_count.saturating_sub(1));
        let rows = filtered.into_iter().skip(page_index * page_size).take(page_size).collect();
        TablePage { rows, page_index, page_count, filtered_count }
    }

    // ---------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------

    pub fn set_row_selected(&mut self, id: &str, selected: bool) {
        if selected {
            self.selected.insert(id.to_owned());
        } else {
            self.selected.remove(id);
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Select or clear exactly the rows on the visible page.
    pub fn set_page_selected(&mut self, visible_ids: &[String], selected: bool) {
        for id in visible_ids {
            self.set_row_selected(id, selected);
        }
    }

    #[must_use]
    pub fn header_check(&self, visible_ids: &[String]) -> HeaderCheck {
        let picked = visible_ids.iter().filter(|id| self.selected.contains(id.as_str())).count();
        match picked {
            0 => HeaderCheck::None,
            n if n == visible_ids.len() => HeaderCheck::All,
            _ => HeaderCheck::Some,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}
