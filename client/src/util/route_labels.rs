//! Display labels derived from route paths.
//!
//! A fixed table names the known segments; anything else is title-cased per
//! dash-separated word. Breadcrumbs, history titles, and the header's
//! favorite star all read their labels from here.

#[cfg(test)]
#[path = "route_labels_test.rs"]
mod route_labels_test;

use crate::state::favorites::PageRef;
use crate::state::navigation::Breadcrumb;

pub const DASHBOARD_PATH: &str = "/dashboard";

const SEGMENT_LABELS: &[(&str, &str)] = &[
    ("dashboard", "Default"),
    ("order-list", "Order List"),
    ("projects", "Projects"),
    ("ecommerce", "eCommerce"),
];

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Label for one path segment.
#[must_use]
pub fn segment_label(segment: &str) -> String {
    if let Some((_, label)) = SEGMENT_LABELS.iter().find(|(key, _)| *key == segment) {
        return (*label).to_owned();
    }
    segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trail for the header. Always starts at "Dashboards"; the bare dashboard
/// route adds "Default".
#[must_use]
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let parts = segments(path);
    let mut trail = vec![Breadcrumb { label: "Dashboards".to_owned(), path: DASHBOARD_PATH.to_owned() }];
    if parts.len() > 1 {
        for (i, segment) in parts.iter().enumerate().skip(1) {
            trail.push(Breadcrumb { label: segment_label(segment), path: format!("/{}", parts[..=i].join("/")) });
        }
    } else {
        trail.push(Breadcrumb { label: "Default".to_owned(), path: DASHBOARD_PATH.to_owned() });
    }
    trail
}

/// Title recorded in navigation history.
#[must_use]
pub fn page_title(path: &str) -> String {
    segments(path).last().map_or_else(|| "Home".to_owned(), |segment| segment_label(segment))
}

/// Favorite identity for the page at `path`.
///
/// The bare dashboard maps onto the built-in "overview" favorite so the
/// star reflects the default entry.
#[must_use]
pub fn favorite_page(path: &str) -> PageRef {
    let last = segments(path).last().copied().unwrap_or("dashboard");
    let (id, icon) = match last {
        "dashboard" => ("overview", "layout-dashboard"),
        "projects" => ("projects", "folder-kanban"),
        "order-list" => ("order-list", "shopping-bag"),
        other => (other, "file"),
    };
    let path = if path.is_empty() { DASHBOARD_PATH } else { path };
    PageRef::new(id, page_title(path), path).with_icon(icon)
}
