use std::collections::HashSet;

use super::*;

fn page(id: &str) -> PageRef {
    PageRef::new(id, id.to_uppercase(), format!("/dashboard/{id}"))
}

fn ids(state: &FavoritesState) -> Vec<&str> {
    state.items.iter().map(|item| item.id.as_str()).collect()
}

fn empty() -> FavoritesState {
    FavoritesState { items: Vec::new(), max_favorites: DEFAULT_MAX_FAVORITES }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_overview_and_projects() {
    let state = FavoritesState::default();
    assert_eq!(ids(&state), vec!["overview", "projects"]);
    assert_eq!(state.max_favorites, 2);
    assert_eq!(state.items[0].path, "/dashboard");
    assert_eq!(state.items[1].path, "/dashboard/projects");
}

// =============================================================
// add
// =============================================================

#[test]
fn add_appends_and_stamps_time() {
    let mut state = empty();
    state.add(page("a"), 1_000);
    assert_eq!(ids(&state), vec!["a"]);
    assert_eq!(state.items[0].added_at, 1_000);
}

#[test]
fn add_existing_id_is_noop() {
    let mut state = empty();
    state.add(page("a"), 1_000);
    state.add(page("a"), 2_000);
    assert_eq!(state.count(), 1);
    assert_eq!(state.items[0].added_at, 1_000);
}

#[test]
fn add_beyond_capacity_evicts_oldest() {
    let mut state = empty();
    state.add(page("a"), 1);
    state.add(page("b"), 2);
    state.add(page("c"), 3);
    assert_eq!(ids(&state), vec!["b", "c"]);
}

// =============================================================
// remove / toggle
// =============================================================

#[test]
fn remove_unknown_id_is_noop() {
    let mut state = FavoritesState::default();
    state.remove("missing");
    assert_eq!(state.count(), 2);
}

#[test]
fn toggle_removes_present_entry() {
    let mut state = FavoritesState::default();
    state.toggle(PageRef::new("overview", "Overview", "/dashboard"), 5);
    assert_eq!(ids(&state), vec!["projects"]);
}

#[test]
fn toggle_adds_with_eviction() {
    let mut state = FavoritesState::default();
    state.toggle(page("order-list"), 5);
    assert_eq!(ids(&state), vec!["projects", "order-list"]);
}

#[test]
fn add_and_toggle_sequence_keeps_invariants() {
    let mut state = FavoritesState::default();
    let sequence = ["a", "b", "a", "c", "c", "d", "b", "a", "e", "e", "a"];
    for (i, id) in sequence.iter().enumerate() {
        let now = i64::try_from(i).unwrap();
        if i % 2 == 0 {
            state.toggle(page(id), now);
        } else {
            state.add(page(id), now);
        }
        assert!(state.count() <= state.max_favorites);
        let unique = state.items.iter().map(|item| item.id.clone()).collect::<HashSet<_>>();
        assert_eq!(unique.len(), state.count());
    }
}

// =============================================================
// swap / update / reset
// =============================================================

#[test]
fn swap_exchanges_two_items() {
    let mut state = FavoritesState::default();
    state.swap();
    assert_eq!(ids(&state), vec!["projects", "overview"]);
}

#[test]
fn swap_with_one_item_is_noop() {
    let mut state = empty();
    state.add(page("a"), 1);
    state.swap();
    assert_eq!(ids(&state), vec!["a"]);
}

#[test]
fn update_merges_patch() {
    let mut state = FavoritesState::default();
    state.update(
        "projects",
        FavoritePatch { name: Some("All Projects".to_owned()), ..FavoritePatch::default() },
    );
    let updated = state.get("projects").unwrap();
    assert_eq!(updated.name, "All Projects");
    assert_eq!(updated.path, "/dashboard/projects");
    assert_eq!(updated.icon.as_deref(), Some("folder-kanban"));
}

#[test]
fn update_unknown_id_is_noop() {
    let mut state = FavoritesState::default();
    let before = state.clone();
    state.update("missing", FavoritePatch { name: Some("x".to_owned()), ..FavoritePatch::default() });
    assert_eq!(state, before);
}

#[test]
fn reset_restores_default_pair_with_new_stamp() {
    let mut state = empty();
    state.add(page("a"), 1);
    state.reset(99);
    assert_eq!(ids(&state), vec!["overview", "projects"]);
    assert!(state.items.iter().all(|item| item.added_at == 99));
}

// =============================================================
// capacity
// =============================================================

#[test]
fn set_capacity_clamps_range() {
    let mut state = FavoritesState::default();
    state.set_capacity(-4);
    assert_eq!(state.max_favorites, 1);
    state.set_capacity(500);
    assert_eq!(state.max_favorites, 50);
}

#[test]
fn shrinking_capacity_evicts_oldest() {
    let mut state = FavoritesState::default();
    state.set_capacity(1);
    assert_eq!(ids(&state), vec!["projects"]);
}

#[test]
fn normalize_repairs_rehydrated_state() {
    let mut state = FavoritesState {
        items: vec![page("a").stamp(1), page("a").stamp(2), page("b").stamp(3), page("c").stamp(4)],
        max_favorites: 0,
    };
    state.normalize();
    assert_eq!(state.max_favorites, 1);
    assert_eq!(ids(&state), vec!["c"]);
}

// =============================================================
// Selectors
// =============================================================

#[test]
fn selectors_report_capacity() {
    let mut state = empty();
    assert!(state.can_add_more());
    assert!(!state.at_max());
    state.add(page("a"), 1);
    state.add(page("b"), 2);
    assert!(!state.can_add_more());
    assert!(state.at_max());
    assert_eq!(state.first().map(|f| f.id.as_str()), Some("a"));
    assert_eq!(state.second().map(|f| f.id.as_str()), Some("b"));
}

#[test]
fn recent_limits_slice() {
    let state = FavoritesState::default();
    assert_eq!(state.recent(1).len(), 1);
    assert_eq!(state.recent(10).len(), 2);
}

#[test]
fn sorted_by_name_ignores_case() {
    let mut state = empty();
    state.set_capacity(3);
    state.add(PageRef::new("z", "zeta", "/z"), 1);
    state.add(PageRef::new("a", "Alpha", "/a"), 2);
    state.add(PageRef::new("m", "mu", "/m"), 3);
    let names = state.sorted_by_name().into_iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Alpha", "mu", "zeta"]);
}

#[test]
fn sorted_by_name_uses_locale_order_for_accents() {
    let mut state = empty();
    state.set_capacity(3);
    state.add(PageRef::new("z", "Zoning", "/z"), 1);
    state.add(PageRef::new("e", "Écoles", "/e"), 2);
    state.add(PageRef::new("a", "Accounts", "/a"), 3);
    let names = state.sorted_by_name().into_iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Accounts", "Écoles", "Zoning"]);
}
