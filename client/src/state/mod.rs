//! Application state slices and their reducers.
//!
//! ARCHITECTURE
//! ============
//! Each slice is a plain struct with `&mut self` reducers and read-only
//! selectors. `app::App` wraps the persisted slices in `RwSignal`s and
//! provides them as context; components mutate them with `update`.

pub mod drawer;
pub mod favorites;
pub mod highlight;
pub mod navigation;
pub mod orders_table;
pub mod ui;
