use super::*;
use crate::data::orders::orders;

const NOW: i64 = 1_700_000_000_000;

fn record(id: &str, name: &str, date: &str, status: OrderStatus) -> OrderRecord {
    OrderRecord {
        id: id.to_owned(),
        user: OrderUser { name: name.to_owned(), avatar: String::new() },
        project: "Project".to_owned(),
        address: "Somewhere".to_owned(),
        date: date.to_owned(),
        status,
    }
}

fn ids<'a>(rows: &[&'a OrderRecord]) -> Vec<&'a str> {
    rows.iter().map(|row| row.id.as_str()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn global_filter_matches_any_searchable_field_case_insensitively() {
    let rows = orders();
    let mut state = TableViewState::default();
    state.set_global_filter("diggs");
    let filtered = state.filtered(&rows, NOW);
    assert!(!filtered.is_empty());
    for row in &filtered {
        let hit = Column::SEARCHABLE
            .iter()
            .filter_map(|column| column.text(row))
            .any(|text| text.to_lowercase().contains("diggs"));
        assert!(hit, "{} should match", row.id);
    }
    let expected = rows.iter().filter(|row| row.user.name.contains("Diggs")).count();
    assert_eq!(filtered.len(), expected);
}

#[test]
fn global_filter_searches_status_and_address() {
    let rows = vec![
        record("#1", "Ann", "Today", OrderStatus::Rejected),
        record("#2", "Bob", "Today", OrderStatus::Complete),
    ];
    let mut state = TableViewState::default();
    state.set_global_filter("REJECT");
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["#1"]);
    state.set_global_filter("somewhere");
    assert_eq!(state.filtered(&rows, NOW).len(), 2);
}

#[test]
fn date_column_is_not_searched() {
    let rows = vec![record("#1", "Ann", "Yesterday", OrderStatus::Pending)];
    let mut state = TableViewState::default();
    state.set_global_filter("yesterday");
    assert!(state.filtered(&rows, NOW).is_empty());
}

#[test]
fn status_filter_intersects_with_search() {
    let rows = vec![
        record("#1", "Ann Diggs", "Today", OrderStatus::Pending),
        record("#2", "Bob Diggs", "Today", OrderStatus::Complete),
        record("#3", "Cy", "Today", OrderStatus::Pending),
    ];
    let mut state = TableViewState::default();
    state.toggle_status(OrderStatus::Pending);
    state.set_global_filter("diggs");
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["#1"]);
}

#[test]
fn empty_status_filter_restricts_nothing() {
    let rows = orders();
    let mut state = TableViewState::default();
    state.toggle_status(OrderStatus::Complete);
    state.toggle_status(OrderStatus::Complete);
    assert!(state.status_filter.is_empty());
    assert_eq!(state.filtered(&rows, NOW).len(), rows.len());
}

#[test]
fn multi_status_filter_is_a_union() {
    let rows = orders();
    let mut state = TableViewState::default();
    state.toggle_status(OrderStatus::Approved);
    state.toggle_status(OrderStatus::Rejected);
    let filtered = state.filtered(&rows, NOW);
    assert!(filtered.iter().all(|row| matches!(row.status, OrderStatus::Approved | OrderStatus::Rejected)));
    assert!(filtered.iter().any(|row| row.status == OrderStatus::Approved));
    assert!(filtered.iter().any(|row| row.status == OrderStatus::Rejected));
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn date_desc_orders_most_recent_first() {
    let rows = vec![
        record("yesterday", "A", "Yesterday", OrderStatus::Pending),
        record("just-now", "B", "Just now", OrderStatus::Pending),
        record("minutes", "C", "59 minutes ago", OrderStatus::Pending),
    ];
    let mut state = TableViewState::default();
    state.set_sort(SortOption::DateDesc);
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["just-now", "minutes", "yesterday"]);
    state.set_sort(SortOption::DateAsc);
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["yesterday", "minutes", "just-now"]);
}

#[test]
fn unparseable_dates_sort_as_oldest() {
    let rows = vec![
        record("bad", "A", "whenever", OrderStatus::Pending),
        record("cal", "B", "Feb 2, 2023", OrderStatus::Pending),
    ];
    let mut state = TableViewState::default();
    state.set_sort(SortOption::DateAsc);
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["bad", "cal"]);
}

#[test]
fn user_sort_ignores_case() {
    let rows = vec![
        record("#1", "bob", "Today", OrderStatus::Pending),
        record("#2", "Alice", "Today", OrderStatus::Pending),
        record("#3", "carol", "Today", OrderStatus::Pending),
    ];
    let mut state = TableViewState::default();
    state.set_sort(SortOption::UserAsc);
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["#2", "#1", "#3"]);
    state.set_sort(SortOption::UserDesc);
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["#3", "#1", "#2"]);
}

#[test]
fn user_sort_places_accented_names_with_their_base_letter() {
    let rows = vec![
        record("#z", "Zoe Park", "Today", OrderStatus::Pending),
        record("#e", "Émile Roy", "Today", OrderStatus::Pending),
        record("#a", "Ana Diaz", "Today", OrderStatus::Pending),
    ];
    let mut state = TableViewState::default();
    state.set_sort(SortOption::UserAsc);
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["#a", "#e", "#z"]);
    state.set_sort(SortOption::UserDesc);
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["#z", "#e", "#a"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let rows = vec![
        record("#1", "Same", "Today", OrderStatus::Pending),
        record("#2", "Same", "Today", OrderStatus::Pending),
        record("#3", "Same", "Today", OrderStatus::Pending),
    ];
    let mut state = TableViewState::default();
    state.set_sort(SortOption::StatusAsc);
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["#1", "#2", "#3"]);
}

#[test]
fn status_sort_uses_labels() {
    let rows = vec![
        record("#1", "A", "Today", OrderStatus::Rejected),
        record("#2", "B", "Today", OrderStatus::Approved),
        record("#3", "C", "Today", OrderStatus::InProgress),
    ];
    let mut state = TableViewState::default();
    state.set_sort(SortOption::StatusAsc);
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["#2", "#3", "#1"]);
}

#[test]
fn sort_option_strings_round_trip_and_default_to_none() {
    for option in SortOption::ALL {
        assert_eq!(SortOption::parse(option.as_str()), option);
    }
    assert_eq!(SortOption::parse("price-asc"), SortOption::None);
    assert_eq!(SortOption::None.key_and_direction(), None);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn pages_hold_ten_rows() {
    let rows = orders();
    let state = TableViewState::default();
    let page = state.page(&rows, NOW);
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.page_count, rows.len().div_ceil(10));
    assert_eq!(page.filtered_count, rows.len());
    assert!(!page.can_previous());
    assert!(page.can_next());
}

#[test]
fn last_page_holds_remainder() {
    let rows = orders();
    let mut state = TableViewState::default();
    state.set_page(2);
    let page = state.page(&rows, NOW);
    assert_eq!(page.page_index, 2);
    assert_eq!(page.rows.len(), rows.len() - 20);
    assert!(!page.can_next());
}

#[test]
fn filter_change_resets_page() {
    let mut state = TableViewState::default();
    state.set_page(2);
    state.set_global_filter("a");
    assert_eq!(state.page_index, 0);
    state.set_page(1);
    state.toggle_status(OrderStatus::Complete);
    assert_eq!(state.page_index, 0);
    state.set_page(1);
    state.set_sort(SortOption::UserAsc);
    assert_eq!(state.page_index, 0);
}

#[test]
fn stale_page_index_is_clamped_on_read() {
    let rows = orders();
    let mut state = TableViewState::default();
    state.set_page(40);
    assert_eq!(state.page(&rows, NOW).page_index, 2);
}

#[test]
fn empty_result_has_no_pages() {
    let rows = orders();
    let mut state = TableViewState::default();
    state.set_global_filter("no such order");
    let page = state.page(&rows, NOW);
    assert!(page.rows.is_empty());
    assert_eq!(page.page_count, 0);
    assert_eq!(page.page_index, 0);
    assert!(page.page_buttons().is_empty());
}

#[test]
fn page_buttons_cap_at_five() {
    let rows = (0..73)
        .map(|i| record(&format!("#{i}"), "A", "Today", OrderStatus::Pending))
        .collect::<Vec<_>>();
    let page = TableViewState::default().page(&rows, NOW);
    assert_eq!(page.page_count, 8);
    assert_eq!(page.page_buttons(), vec![1, 2, 3, 4, 5]);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_all_covers_only_visible_page() {
    let rows = orders();
    let mut state = TableViewState::default();
    let visible = state.page(&rows, NOW).row_ids();
    state.set_page_selected(&visible, true);
    assert_eq!(state.selected.len(), 10);
    assert_eq!(state.header_check(&visible), HeaderCheck::All);
    state.set_page(1);
    let next = state.page(&rows, NOW).row_ids();
    assert_eq!(state.header_check(&next), HeaderCheck::None);
}

#[test]
fn header_check_reports_partial_selection() {
    let rows = orders();
    let mut state = TableViewState::default();
    let visible = state.page(&rows, NOW).row_ids();
    state.set_row_selected(&visible[0], true);
    assert_eq!(state.header_check(&visible), HeaderCheck::Some);
    state.set_page_selected(&visible, false);
    assert_eq!(state.header_check(&visible), HeaderCheck::None);
}

#[test]
fn selection_survives_filtering() {
    let rows = orders();
    let mut state = TableViewState::default();
    state.set_row_selected("#CM9801", true);
    state.set_global_filter("diggs");
    assert!(state.is_selected("#CM9801"));
    state.clear_all();
    assert!(state.is_selected("#CM9801"));
    state.clear_selection();
    assert!(!state.is_selected("#CM9801"));
    assert_eq!(state.page(&rows, NOW).filtered_count, rows.len());
}

// =============================================================
// Toolbar helpers
// =============================================================

#[test]
fn clear_all_resets_filters_and_sort() {
    let mut state = TableViewState::default();
    state.set_global_filter("x");
    state.toggle_status(OrderStatus::Pending);
    state.set_sort(SortOption::DateDesc);
    assert!(state.is_filtered());
    assert!(state.is_sorted());
    state.clear_all();
    assert!(!state.is_filtered());
    assert!(!state.is_sorted());
}

#[test]
fn status_colors_and_labels() {
    assert_eq!(OrderStatus::InProgress.color().as_str(), "blue");
    assert_eq!(OrderStatus::Complete.color().as_str(), "green");
    assert_eq!(OrderStatus::Pending.color(), BadgeColor::Yellow);
    assert_eq!(OrderStatus::Approved.color(), BadgeColor::Yellow);
    assert_eq!(OrderStatus::Rejected.color(), BadgeColor::Gray);
    assert_eq!(OrderStatus::parse("in progress"), Some(OrderStatus::InProgress));
    assert_eq!(OrderStatus::parse("shipped"), None);
}

#[test]
fn columns_expose_sort_keys_and_headers() {
    assert_eq!(Column::Date.sort_key(), Some(SortKey::Date));
    assert_eq!(Column::Project.sort_key(), None);
    assert_eq!(Column::Id.header(), "Order ID");
    assert_eq!(Column::Select.widths().size, 40);
    let sample = record("#9", "Zed", "Today", OrderStatus::Complete);
    assert_eq!(Column::Status.text(&sample), Some("Complete"));
    assert_eq!(Column::Actions.text(&sample), None);
}

#[test]
fn global_filter_matches_the_raw_query_including_spaces() {
    let rows = vec![
        record("#1", "Drew Cano", "Today", OrderStatus::Pending),
        record("#2", "Cano", "Today", OrderStatus::Pending),
    ];
    let mut state = TableViewState::default();
    state.set_global_filter(" Cano");
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["#1"]);
    assert!(state.is_filtered());
}

#[test]
fn whitespace_only_query_still_filters() {
    let rows = vec![
        record("#1", "Drew Cano", "Today", OrderStatus::Pending),
        record("#2", "Cano", "Today", OrderStatus::Pending),
    ];
    let mut state = TableViewState::default();
    state.set_global_filter(" ");
    assert!(state.is_filtered());
    // "Project" and "Somewhere" have no spaces, so only the two-word name matches.
    assert_eq!(ids(&state.filtered(&rows, NOW)), vec!["#1"]);
}
