//! # client
//!
//! Leptos frontend for the analytics dashboard: routed pages, the two-drawer
//! shell, and the client-side state layer (UI preferences, favorites,
//! navigation history) persisted to `localStorage`.
//!
//! Everything under `state` and most of `util` is plain Rust and tested
//! natively; browser access is confined to `hydrate`-gated branches.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
