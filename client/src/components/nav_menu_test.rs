use super::*;

#[test]
fn dashboard_links_match_exact_paths() {
    let default = DASHBOARD_ITEMS[0];
    assert!(default.is_active("/dashboard"));
    assert!(!default.is_active("/dashboard/order-list"));
    assert!(DASHBOARD_ITEMS[1].is_active("/dashboard/order-list"));
}

#[test]
fn placeholders_are_never_active() {
    let ecommerce = DASHBOARD_ITEMS[3];
    assert_eq!(ecommerce.path, None);
    assert!(!ecommerce.is_active("/dashboard/ecommerce"));
    assert!(!ecommerce.is_active(""));
}

#[test]
fn user_profile_has_five_subpages() {
    let profile = PAGE_ITEMS[0];
    let labels = profile.children.iter().map(|c| c.label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Overview", "Projects", "Campaigns", "Documents", "Followers"]);
    assert!(!profile.contains_active("/dashboard"));
}

#[test]
fn every_routed_entry_is_unique() {
    let mut paths = DASHBOARD_ITEMS.iter().filter_map(|i| i.path).collect::<Vec<_>>();
    let before = paths.len();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), before);
    assert_eq!(before, 3);
}
