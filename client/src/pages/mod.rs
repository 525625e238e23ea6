//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `layout` is the parent route for everything under `/dashboard`; the other
//! pages are its children (plus the not-found fallback) and delegate
//! rendering to `components`.

pub mod layout;
pub mod not_found;
pub mod order_list;
pub mod overview;
pub mod projects;
