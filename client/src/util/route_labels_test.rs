use super::*;

fn labels(path: &str) -> Vec<String> {
    breadcrumbs(path).into_iter().map(|crumb| crumb.label).collect()
}

#[test]
fn bare_dashboard_adds_default() {
    assert_eq!(labels("/dashboard"), vec!["Dashboards", "Default"]);
    assert!(breadcrumbs("/dashboard").iter().all(|crumb| crumb.path == "/dashboard"));
}

#[test]
fn known_segments_use_lookup_table() {
    assert_eq!(labels("/dashboard/order-list"), vec!["Dashboards", "Order List"]);
    assert_eq!(labels("/dashboard/ecommerce"), vec!["Dashboards", "eCommerce"]);
}

#[test]
fn nested_paths_accumulate() {
    let trail = breadcrumbs("/dashboard/user-profile/campaigns");
    assert_eq!(trail[1].label, "User Profile");
    assert_eq!(trail[1].path, "/dashboard/user-profile");
    assert_eq!(trail[2].label, "Campaigns");
    assert_eq!(trail[2].path, "/dashboard/user-profile/campaigns");
}

#[test]
fn unknown_segments_are_title_cased() {
    assert_eq!(segment_label("online-courses"), "Online Courses");
    assert_eq!(segment_label("blog"), "Blog");
    assert_eq!(segment_label("a--b"), "A B");
}

#[test]
fn page_titles() {
    assert_eq!(page_title("/"), "Home");
    assert_eq!(page_title("/dashboard"), "Default");
    assert_eq!(page_title("/dashboard/projects"), "Projects");
}

#[test]
fn favorite_identity_for_dashboard_is_overview() {
    let page = favorite_page("/dashboard");
    assert_eq!(page.id, "overview");
    assert_eq!(page.name, "Default");
    assert_eq!(page.path, "/dashboard");
}

#[test]
fn favorite_identity_uses_last_segment() {
    let page = favorite_page("/dashboard/order-list");
    assert_eq!(page.id, "order-list");
    assert_eq!(page.name, "Order List");
    assert_eq!(page.icon.as_deref(), Some("shopping-bag"));
}
