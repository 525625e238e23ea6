//! Drawer motion: target geometry per frame plus the transition to reach it.
//!
//! DESIGN
//! ======
//! The first frame a drawer renders, and the first frame after it switches
//! between overlay and inline mode, snaps to its target with no transition.
//! Every later frame animates with the slide preset (width or offset) and
//! the fade preset (content opacity). Interpolation itself is left to CSS
//! transitions; this module only decides targets and whether to animate.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::state::drawer::{DrawerMode, DrawerView, Panel};

pub const DRAWER_WIDTH_PX: f64 = 280.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionPreset {
    pub duration_ms: u32,
    pub easing: &'static str,
}

/// Quadratic ease-out.
pub const SLIDE: MotionPreset = MotionPreset { duration_ms: 350, easing: "cubic-bezier(0.215, 0.61, 0.355, 1)" };
/// Gentle ease-out for content opacity.
pub const FADE: MotionPreset = MotionPreset { duration_ms: 250, easing: "cubic-bezier(0.25, 0.46, 0.45, 0.94)" };

impl MotionPreset {
    fn css(self, property: &str) -> String {
        format!("{property} {}ms {}", self.duration_ms, self.easing)
    }
}

/// Geometry and opacity a drawer should end up at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerFrame {
    pub width_px: f64,
    /// Horizontal translation; negative moves left.
    pub offset_px: f64,
    pub opacity: f64,
    pub mode: DrawerMode,
    pub animate: bool,
}

impl DrawerFrame {
    #[must_use]
    pub fn target(panel: Panel, view: DrawerView, animate: bool) -> Self {
        let hidden_offset = match panel {
            Panel::Left => -DRAWER_WIDTH_PX,
            Panel::Right => DRAWER_WIDTH_PX,
        };
        let (width_px, offset_px) = match view.mode {
            DrawerMode::Overlay => (DRAWER_WIDTH_PX, if view.is_open { 0.0 } else { hidden_offset }),
            DrawerMode::Inline => (if view.is_open { DRAWER_WIDTH_PX } else { 0.0 }, 0.0),
        };
        Self { width_px, offset_px, opacity: if view.is_open { 1.0 } else { 0.0 }, mode: view.mode, animate }
    }

    /// Inline style for the drawer shell.
    #[must_use]
    pub fn shell_style(&self) -> String {
        let transition = if self.animate {
            match self.mode {
                DrawerMode::Overlay => SLIDE.css("transform"),
                DrawerMode::Inline => SLIDE.css("width"),
            }
        } else {
            "none".to_owned()
        };
        format!(
            "width: {:.0}px; transform: translateX({:.0}px); transition: {transition};",
            self.width_px, self.offset_px
        )
    }

    /// Inline style for the drawer's content wrapper.
    #[must_use]
    pub fn content_style(&self) -> String {
        let transition = if self.animate { FADE.css("opacity") } else { "none".to_owned() };
        format!(
            "width: {DRAWER_WIDTH_PX:.0}px; min-width: {DRAWER_WIDTH_PX:.0}px; opacity: {}; transition: {transition};",
            self.opacity
        )
    }
}

/// Per-drawer memory of the last rendered mode.
#[derive(Clone, Debug)]
pub struct DrawerMotion {
    panel: Panel,
    last_mode: Option<DrawerMode>,
}

impl DrawerMotion {
    pub fn new(panel: Panel) -> Self {
        Self { panel, last_mode: None }
    }

    /// Produce the next frame, snapping on first render or a mode change.
    pub fn next_frame(&mut self, view: DrawerView) -> DrawerFrame {
        let animate = self.last_mode == Some(view.mode);
        self.last_mode = Some(view.mode);
        DrawerFrame::target(self.panel, view, animate)
    }
}
