//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and page widgets. Shared state
//! arrives through Leptos context (`RwSignal` slices provided by `app::App`
//! and the dashboard layout); drawer flags are only changed through
//! `drawer::Drawers` so the coordinator's rules always apply.

pub mod charts;
pub mod drawer;
pub mod favorites_tabs;
pub mod header;
pub mod left_drawer;
pub mod metric_card;
pub mod nav_menu;
pub mod navigation_tracker;
pub mod orders_table;
pub mod right_drawer;
pub mod theme_toggle;
