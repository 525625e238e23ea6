use super::*;

fn paths(state: &NavigationState) -> Vec<&str> {
    state.history.iter().map(|item| item.path.as_str()).collect()
}

// =============================================================
// record
// =============================================================

#[test]
fn default_location_is_root() {
    let state = NavigationState::default();
    assert_eq!(state.current_path, "/");
    assert_eq!(state.previous_path, None);
    assert_eq!(state.max_history_size, 2);
    assert!(state.history.is_empty());
}

#[test]
fn record_updates_current_and_previous() {
    let mut state = NavigationState::default();
    state.record("/dashboard", "Default", 10);
    assert_eq!(state.current_path, "/dashboard");
    assert_eq!(state.previous_path.as_deref(), Some("/"));
}

#[test]
fn record_builds_id_from_path_and_time() {
    let mut state = NavigationState::default();
    state.record("/dashboard", "Default", 10);
    assert_eq!(state.history[0].id, "/dashboard-10");
    assert_eq!(state.history[0].title, "Default");
    assert_eq!(state.history[0].timestamp, 10);
}

#[test]
fn recording_same_path_twice_keeps_one_entry_with_latest_time() {
    let mut state = NavigationState::default();
    state.record("/dashboard/projects", "Projects", 10);
    state.record("/dashboard/projects", "Projects", 20);
    assert_eq!(state.by_path("/dashboard/projects").len(), 1);
    assert_eq!(state.history[0].path, "/dashboard/projects");
    assert_eq!(state.history[0].timestamp, 20);
}

#[test]
fn revisit_moves_entry_to_front() {
    let mut state = NavigationState::default();
    state.set_capacity(10);
    state.record("/a", "A", 1);
    state.record("/b", "B", 2);
    state.record("/c", "C", 3);
    state.record("/a", "A", 4);
    assert_eq!(paths(&state), vec!["/a", "/c", "/b"]);
}

#[test]
fn record_truncates_to_capacity() {
    let mut state = NavigationState::default();
    state.record("/a", "A", 1);
    state.record("/b", "B", 2);
    state.record("/c", "C", 3);
    assert_eq!(paths(&state), vec!["/c", "/b"]);
}

// =============================================================
// go_back / clear / remove / prune
// =============================================================

#[test]
fn go_back_swaps_paths() {
    let mut state = NavigationState::default();
    state.record("/a", "A", 1);
    state.record("/b", "B", 2);
    state.go_back();
    assert_eq!(state.current_path, "/a");
    assert_eq!(state.previous_path.as_deref(), Some("/b"));
}

#[test]
fn go_back_without_previous_is_noop() {
    let mut state = NavigationState::default();
    state.go_back();
    assert_eq!(state.current_path, "/");
    assert!(!state.can_go_back());
}

#[test]
fn clear_empties_history_only() {
    let mut state = NavigationState::default();
    state.record("/a", "A", 1);
    state.clear();
    assert!(state.history.is_empty());
    assert_eq!(state.current_path, "/a");
}

#[test]
fn remove_entry_by_id() {
    let mut state = NavigationState::default();
    state.record("/a", "A", 1);
    state.record("/b", "B", 2);
    state.remove_entry("/a-1");
    assert_eq!(paths(&state), vec!["/b"]);
    state.remove_entry("missing");
    assert_eq!(state.count(), 1);
}

#[test]
fn prune_drops_entries_older_than_cutoff() {
    let mut state = NavigationState::default();
    let now = 10 * MS_PER_DAY;
    state.record("/old", "Old", now - 3 * MS_PER_DAY);
    state.record("/new", "New", now - MS_PER_DAY / 2);
    state.prune_older_than(1, now);
    assert_eq!(paths(&state), vec!["/new"]);
}

// =============================================================
// capacity
// =============================================================

#[test]
fn set_capacity_clamps_to_range() {
    let mut state = NavigationState::default();
    state.set_capacity(3);
    assert_eq!(state.max_history_size, 10);
    state.set_capacity(1_000);
    assert_eq!(state.max_history_size, 100);
}

#[test]
fn history_never_exceeds_capacity() {
    let mut state = NavigationState::default();
    state.set_capacity(10);
    for i in 0..25 {
        state.record(&format!("/p{i}"), "P", i);
        assert!(state.count() <= state.max_history_size);
    }
    assert_eq!(state.history[0].path, "/p24");
}

#[test]
fn normalize_sorts_dedupes_and_truncates() {
    let item = |path: &str, ts: i64| NavigationHistoryItem {
        id: format!("{path}-{ts}"),
        path: path.to_owned(),
        title: path.to_owned(),
        timestamp: ts,
    };
    let mut state = NavigationState {
        history: vec![item("/a", 1), item("/b", 5), item("/a", 9), item("/c", 3)],
        max_history_size: 2,
        ..NavigationState::default()
    };
    state.normalize();
    assert_eq!(paths(&state), vec!["/a", "/b"]);
    assert_eq!(state.history[0].timestamp, 9);
}

#[test]
fn normalize_applies_the_capacity_rule_to_stored_values() {
    let normalized = |stored: usize| {
        let mut state = NavigationState { max_history_size: stored, ..NavigationState::default() };
        state.normalize();
        state.max_history_size
    };
    assert_eq!(normalized(0), DEFAULT_MAX_HISTORY);
    assert_eq!(normalized(DEFAULT_MAX_HISTORY), DEFAULT_MAX_HISTORY);
    assert_eq!(normalized(5), 10);
    assert_eq!(normalized(42), 42);
    assert_eq!(normalized(100_000), 100);
}

#[test]
fn normalize_truncates_to_the_clamped_capacity() {
    let history = (0..120)
        .map(|i| NavigationHistoryItem {
            id: format!("/p{i}-{i}"),
            path: format!("/p{i}"),
            title: String::new(),
            timestamp: i,
        })
        .collect();
    let mut state = NavigationState { history, max_history_size: 500, ..NavigationState::default() };
    state.normalize();
    assert_eq!(state.history.len(), 100);
    assert_eq!(state.history[0].path, "/p119");
}

// =============================================================
// breadcrumbs / section
// =============================================================

#[test]
fn breadcrumb_reducers() {
    let crumb = |label: &str| Breadcrumb { label: label.to_owned(), path: format!("/{label}") };
    let mut state = NavigationState::default();
    state.set_breadcrumbs(vec![crumb("a"), crumb("b")]);
    state.add_breadcrumb(crumb("c"));
    assert_eq!(state.last_breadcrumb().map(|c| c.label.as_str()), Some("c"));
    state.remove_breadcrumb(0);
    state.remove_breadcrumb(42);
    assert_eq!(state.breadcrumbs.len(), 2);
    state.clear_breadcrumbs();
    assert!(state.last_breadcrumb().is_none());
}

#[test]
fn active_section_and_reset() {
    let mut state = NavigationState::default();
    state.set_active_section(Some("dashboards".to_owned()));
    state.record("/a", "A", 1);
    state.reset();
    assert_eq!(state, NavigationState::default());
}

// =============================================================
// selectors
// =============================================================

#[test]
fn recent_and_unique_paths() {
    let mut state = NavigationState::default();
    state.set_capacity(10);
    state.record("/a", "A", 1);
    state.record("/b", "B", 2);
    assert_eq!(state.recent(1).len(), 1);
    assert_eq!(state.recent(1)[0].path, "/b");
    assert_eq!(state.unique_paths(), vec!["/b", "/a"]);
}

#[test]
fn grouped_by_date_partitions_around_midnight() {
    let today_start = 100 * MS_PER_DAY;
    let mut state = NavigationState::default();
    state.set_capacity(10);
    state.record("/older", "Older", today_start - 2 * MS_PER_DAY);
    state.record("/yesterday", "Yesterday", today_start - 1);
    state.record("/today", "Today", today_start + 5);
    let groups = state.grouped_by_date(today_start);
    assert_eq!(groups.today.len(), 1);
    assert_eq!(groups.today[0].path, "/today");
    assert_eq!(groups.yesterday[0].path, "/yesterday");
    assert_eq!(groups.older[0].path, "/older");
}
