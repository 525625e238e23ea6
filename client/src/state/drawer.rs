//! Drawer coordination for the two side panels.
//!
//! DESIGN
//! ======
//! Open flags live in `UiState` so they persist with the other preferences;
//! this coordinator owns everything derived from the viewport: its current
//! and previous class, and a debounced pending resize measurement. All
//! operations are synchronous reducers over `&mut UiState`.
//!
//! Rules enforced here:
//!
//! - The first measurement snaps: a mobile viewport starts with both panels
//!   closed.
//! - A desktop to mobile flip closes the right panel. Mobile to desktop
//!   reopens nothing.
//! - On mobile both panels may never stay open together; the left panel
//!   yields.
//! - Escape closes both panels. Backdrop taps only exist in overlay mode.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

use crate::state::ui::UiState;
use crate::util::schedule::{Debounce, Ticket};

/// Viewports narrower than this are mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Left,
    Right,
}

impl Panel {
    /// Parse a panel identifier coming from markup or persisted input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX { Self::Mobile } else { Self::Desktop }
    }

    #[must_use]
    pub fn mode(self) -> DrawerMode {
        match self {
            Self::Mobile => DrawerMode::Overlay,
            Self::Desktop => DrawerMode::Inline,
        }
    }
}

/// How a panel occupies the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerMode {
    /// Floats above content behind a dismissable backdrop.
    Overlay,
    /// Takes layout space and collapses to zero width.
    Inline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Rendering contract for one panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawerView {
    pub is_open: bool,
    pub mode: DrawerMode,
}

#[derive(Clone, Debug)]
pub struct DrawerCoordinator {
    viewport: Option<ViewportClass>,
    previous_viewport: Option<ViewportClass>,
    resize: Debounce<f64>,
}

impl Default for DrawerCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerCoordinator {
    pub fn new() -> Self {
        Self { viewport: None, previous_viewport: None, resize: Debounce::new(RESIZE_DEBOUNCE_MS) }
    }

    /// `None` until the first measurement.
    #[must_use]
    pub fn viewport(&self) -> Option<ViewportClass> {
        self.viewport
    }

    #[must_use]
    pub fn previous_viewport(&self) -> Option<ViewportClass> {
        self.previous_viewport
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.viewport == Some(ViewportClass::Mobile)
    }

    /// Unmeasured viewports render inline, matching server output.
    #[must_use]
    pub fn mode(&self) -> DrawerMode {
        self.viewport.map_or(DrawerMode::Inline, ViewportClass::mode)
    }

    #[must_use]
    pub fn view(&self, ui: &UiState, panel: Panel) -> DrawerView {
        DrawerView { is_open: is_open(ui, panel), mode: self.mode() }
    }

    /// Scrolling behind an open overlay is disabled.
    #[must_use]
    pub fn body_scroll_locked(&self, ui: &UiState) -> bool {
        self.is_mobile() && (ui.left_sidebar_open || ui.right_sidebar_open)
    }

    // ---------------------------------------------------------------
    // Setters
    // ---------------------------------------------------------------

    pub fn set_open(&self, ui: &mut UiState, panel: Panel, open: bool) {
        match panel {
            Panel::Left => ui.set_left_sidebar_open(open),
            Panel::Right => ui.set_right_sidebar_open(open),
        }
    }

    pub fn toggle(&self, ui: &mut UiState, panel: Panel) {
        self.set_open(ui, panel, !is_open(ui, panel));
    }

    /// Like `set_open`, for identifiers arriving as strings.
    ///
    /// Unknown identifiers are a contract violation: they panic in debug
    /// builds and are ignored otherwise.
    pub fn set_open_named(&self, ui: &mut UiState, panel: &str, open: bool) {
        let Some(panel) = Panel::parse(panel) else {
            if cfg!(debug_assertions) {
                panic!("unknown panel identifier: {panel}");
            }
            log::warn!("ignoring unknown panel identifier {panel:?}");
            return;
        };
        self.set_open(ui, panel, open);
    }

    // ---------------------------------------------------------------
    // Viewport
    // ---------------------------------------------------------------

    /// Queue a resize measurement; only the latest ticket will apply.
    pub fn schedule_resize(&mut self, width: f64) -> Ticket {
        self.resize.schedule(width)
    }

    /// Apply the measurement queued under `ticket`. Returns whether it applied.
    pub fn flush_resize(&mut self, ticket: Ticket, ui: &mut UiState) -> bool {
        let Some(width) = self.resize.take(ticket) else {
            return false;
        };
        self.measure(width, ui);
        true
    }

    /// Apply a viewport measurement immediately.
    pub fn measure(&mut self, width: f64, ui: &mut UiState) {
        let next = ViewportClass::from_width(width);
        match self.viewport {
            None => {
                self.viewport = Some(next);
                if next == ViewportClass::Mobile {
                    ui.set_left_sidebar_open(false);
                    ui.set_right_sidebar_open(false);
                }
            }
            Some(current) if current != next => {
                self.previous_viewport = Some(current);
                self.viewport = Some(next);
                self.on_viewport_class_changed(current, next, ui);
            }
            Some(_) => {}
        }
        self.enforce_exclusive(ui);
    }

    /// React to a real class flip. Only a flip into mobile changes anything.
    pub fn on_viewport_class_changed(&self, from: ViewportClass, to: ViewportClass, ui: &mut UiState) {
        if from != to && to == ViewportClass::Mobile && ui.right_sidebar_open {
            ui.set_right_sidebar_open(false);
        }
    }

    /// Close the left panel when both are open on mobile. Returns whether it acted.
    pub fn enforce_exclusive(&self, ui: &mut UiState) -> bool {
        if self.is_mobile() && ui.left_sidebar_open && ui.right_sidebar_open {
            ui.set_left_sidebar_open(false);
            return true;
        }
        false
    }

    // ---------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------

    /// Close both panels if either is open. Returns whether it acted.
    pub fn on_escape(&self, ui: &mut UiState) -> bool {
        if !(ui.left_sidebar_open || ui.right_sidebar_open) {
            return false;
        }
        ui.set_left_sidebar_open(false);
        ui.set_right_sidebar_open(false);
        true
    }

    /// Each panel opens when swiped toward the content and closes when
    /// swiped back toward its own edge.
    pub fn on_swipe(&self, ui: &mut UiState, panel: Panel, direction: SwipeDirection) {
        let open = matches!(
            (panel, direction),
            (Panel::Left, SwipeDirection::Right) | (Panel::Right, SwipeDirection::Left)
        );
        self.set_open(ui, panel, open);
    }

    /// Returns whether the tap closed the panel.
    pub fn on_backdrop_tap(&self, ui: &mut UiState, panel: Panel) -> bool {
        if self.mode() != DrawerMode::Overlay || !is_open(ui, panel) {
            return false;
        }
        self.set_open(ui, panel, false);
        true
    }

    /// Drop any pending resize; later flushes never apply.
    pub fn teardown(&mut self) {
        self.resize.teardown();
    }
}

fn is_open(ui: &UiState, panel: Panel) -> bool {
    match panel {
        Panel::Left => ui.left_sidebar_open,
        Panel::Right => ui.right_sidebar_open,
    }
}
