//! Static demo content rendered by the dashboard pages.

pub mod dashboard;
pub mod feed;
pub mod orders;
