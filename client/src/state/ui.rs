//! Persisted UI preferences (sidebars, widths, theme, density).
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of the navigation/favorites models so
//! each slice can be reduced and persisted independently. Open flags here are
//! the source of truth the drawer coordinator reconciles against.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

pub const LEFT_SIDEBAR_WIDTH_MIN: f64 = 200.0;
pub const LEFT_SIDEBAR_WIDTH_MAX: f64 = 400.0;
pub const RIGHT_SIDEBAR_WIDTH_MIN: f64 = 280.0;
pub const RIGHT_SIDEBAR_WIDTH_MAX: f64 = 480.0;
pub const MIN_CONTENT_WIDTH: f64 = 320.0;

/// Colour scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the operating system's `prefers-color-scheme`.
    System,
}

/// UI preference slice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    pub left_sidebar_open: bool,
    pub right_sidebar_open: bool,
    pub left_sidebar_width: f64,
    pub right_sidebar_width: f64,
    pub theme: Theme,
    pub compact_mode: bool,
    pub notifications_panel_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            left_sidebar_open: true,
            right_sidebar_open: true,
            left_sidebar_width: 240.0,
            right_sidebar_width: 320.0,
            theme: Theme::Light,
            compact_mode: false,
            notifications_panel_open: false,
        }
    }
}

/// Open/closed summary of both sidebars.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarsSummary {
    pub left_open: bool,
    pub right_open: bool,
    pub both_open: bool,
    pub none_open: bool,
}

/// Configured sidebar widths in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarWidths {
    pub left: f64,
    pub right: f64,
    pub total: f64,
}

impl UiState {
    pub fn toggle_left_sidebar(&mut self) {
        self.left_sidebar_open = !self.left_sidebar_open;
    }

    pub fn set_left_sidebar_open(&mut self, open: bool) {
        self.left_sidebar_open = open;
    }

    pub fn set_left_sidebar_width(&mut self, width: f64) {
        self.left_sidebar_width = clamp_width(width, LEFT_SIDEBAR_WIDTH_MIN, LEFT_SIDEBAR_WIDTH_MAX);
    }

    pub fn toggle_right_sidebar(&mut self) {
        self.right_sidebar_open = !self.right_sidebar_open;
    }

    pub fn set_right_sidebar_open(&mut self, open: bool) {
        self.right_sidebar_open = open;
    }

    pub fn set_right_sidebar_width(&mut self, width: f64) {
        self.right_sidebar_width = clamp_width(width, RIGHT_SIDEBAR_WIDTH_MIN, RIGHT_SIDEBAR_WIDTH_MAX);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_compact_mode(&mut self) {
        self.compact_mode = !self.compact_mode;
    }

    pub fn set_compact_mode(&mut self, compact: bool) {
        self.compact_mode = compact;
    }

    pub fn toggle_notifications_panel(&mut self) {
        self.notifications_panel_open = !self.notifications_panel_open;
    }

    pub fn set_notifications_panel_open(&mut self, open: bool) {
        self.notifications_panel_open = open;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn sidebars(&self) -> SidebarsSummary {
        let (left_open, right_open) = (self.left_sidebar_open, self.right_sidebar_open);
        SidebarsSummary {
            left_open,
            right_open,
            both_open: left_open && right_open,
            none_open: !left_open && !right_open,
        }
    }

    #[must_use]
    pub fn widths(&self) -> SidebarWidths {
        SidebarWidths {
            left: self.left_sidebar_width,
            right: self.right_sidebar_width,
            total: self.left_sidebar_width + self.right_sidebar_width,
        }
    }

    /// Width left for the main content column at `viewport_width`.
    #[must_use]
    pub fn content_area_width(&self, viewport_width: f64) -> f64 {
        let mut width = viewport_width;
        if self.left_sidebar_open {
            width -= self.left_sidebar_width;
        }
        if self.right_sidebar_open {
            width -= self.right_sidebar_width;
        }
        width.max(MIN_CONTENT_WIDTH)
    }
}

/// Non-finite input keeps the lower bound.
fn clamp_width(width: f64, min: f64, max: f64) -> f64 {
    if width.is_finite() { width.clamp(min, max) } else { min }
}
