//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod animation;
pub mod chart_geometry;
pub mod clipboard;
pub mod collate;
pub mod clock;
pub mod dark_mode;
pub mod gesture;
pub mod relative_time;
pub mod route_labels;
pub mod schedule;
pub mod ui_persistence;
pub mod viewport;
