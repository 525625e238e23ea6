//! Order list table: toolbar, selectable rows, copy buttons, pagination.
//!
//! ARCHITECTURE
//! ============
//! All filtering, sorting, paging and selection rules live in
//! `state::orders_table::TableViewState`. This component keeps that state in
//! a local signal (it is not persisted) and renders an owned snapshot of the
//! current page so the view never borrows from the row store.

use leptos::prelude::*;

use crate::data::orders::orders;
use crate::state::orders_table::{Column, HeaderCheck, OrderRecord, OrderStatus, SortOption, TableViewState};
use crate::util::clipboard::CopyIndicators;
use crate::util::clock::now_ms;
use crate::util::schedule::TaskGuard;

/// Owned copy of one rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PageView {
    rows: Vec<OrderRecord>,
    ids: Vec<String>,
    page_index: usize,
    page_count: usize,
    filtered_count: usize,
    buttons: Vec<usize>,
    can_previous: bool,
    can_next: bool,
}

#[component]
pub fn OrdersTable() -> impl IntoView {
    let rows = StoredValue::new(orders());
    let total_rows = rows.with_value(Vec::len);
    let now = now_ms();
    let table = RwSignal::new(TableViewState::default());
    let copies = RwSignal::new(CopyIndicators::default());
    let status_menu_open = RwSignal::new(false);
    let guard = TaskGuard::scoped();

    let page = Memo::new(move |_| {
        rows.with_value(|rows| {
            table.with(|t| {
                let page = t.page(rows, now);
                PageView {
                    ids: page.row_ids(),
                    buttons: page.page_buttons(),
                    can_previous: page.can_previous(),
                    can_next: page.can_next(),
                    page_index: page.page_index,
                    page_count: page.page_count,
                    filtered_count: page.filtered_count,
                    rows: page.rows.into_iter().cloned().collect(),
                }
            })
        })
    });

    let header_check = move || page.with(|p| table.with(|t| t.header_check(&p.ids)));
    let has_active_filters = move || table.with(|t| t.is_filtered() || t.is_sorted());
    let clear_all = move || {
        table.update(TableViewState::clear_all);
        status_menu_open.set(false);
    };

    let copy = Callback::new(move |(key, text): (String, String)| {
        let mut token = 0;
        copies.update(|c| token = c.begin(&key));
        #[cfg(feature = "hydrate")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                let result = crate::util::clipboard::write_text(&text).await;
                if !guard.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => {
                        copies.update(|c| c.succeed(&key, token));
                        crate::util::schedule::after(&guard, crate::util::clipboard::COPIED_INDICATOR_MS, move || {
                            copies.update(|c| c.revert(&key, token));
                        });
                    }
                    Err(err) => {
                        log::warn!("copy to clipboard failed: {err}");
                        copies.update(|c| c.revert(&key, token));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, &guard);
            copies.update(|c| c.revert(&key, token));
        }
    });

    view! {
        <div class="orders">
            <div class="orders__toolbar">
                <div class="orders__toolbar-actions">
                    <button class="orders__tool" aria-label="Add order" title="Add">"+"</button>
                    <div class="orders__status-filter">
                        <button
                            class="orders__tool"
                            class:orders__tool--active=move || table.with(|t| !t.status_filter.is_empty())
                            aria-haspopup="true"
                            aria-expanded=move || status_menu_open.get().to_string()
                            on:click=move |_| status_menu_open.update(|open| *open = !*open)
                        >
                            "Status"
                        </button>
                        <Show when=move || status_menu_open.get()>
                            <ul class="orders__menu" role="menu">
                                {OrderStatus::ALL
                                    .into_iter()
                                    .map(|status| {
                                        view! {
                                            <li role="menuitemcheckbox">
                                                <label class="orders__menu-item">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || table.with(|t| t.status_selected(status))
                                                        on:change=move |_| table.update(|t| t.toggle_status(status))
                                                    />
                                                    {status.label()}
                                                </label>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Show>
                    </div>
                    <select
                        class="orders__sort"
                        aria-label="Sort orders"
                        prop:value=move || table.with(|t| t.sort.as_str())
                        on:change=move |ev| {
                            let option = SortOption::parse(&event_target_value(&ev));
                            table.update(|t| t.set_sort(option));
                        }
                    >
                        {SortOption::ALL
                            .into_iter()
                            .map(|option| view! { <option value=option.as_str()>{option.label()}</option> })
                            .collect_view()}
                    </select>
                    <Show when=has_active_filters>
                        <button class="orders__clear" on:click=move |_| clear_all()>
                            "Clear all"
                        </button>
                    </Show>
                </div>
                <input
                    type="search"
                    class="orders__search"
                    placeholder="Search"
                    aria-label="Search orders"
                    prop:value=move || table.with(|t| t.global_filter.clone())
                    on:input=move |ev| table.update(|t| t.set_global_filter(event_target_value(&ev)))
                />
            </div>

            <Show
                when=move || page.with(|p| p.filtered_count > 0)
                fallback=move || {
                    view! {
                        <div class="orders__empty">
                            <Show
                                when=move || { total_rows > 0 }
                                fallback=|| view! { <p class="orders__empty-title">"No orders yet"</p> }
                            >
                                <p class="orders__empty-title">"No results found"</p>
                                <p class="orders__empty-hint">"Try adjusting your search or filters."</p>
                                <button class="orders__clear" on:click=move |_| clear_all()>
                                    "Clear filters"
                                </button>
                            </Show>
                        </div>
                    }
                }
            >
                <table class="orders__table">
                    <thead>
                        <tr>
                            {Column::ALL
                                .into_iter()
                                .map(|column| {
                                    let style = format!("width: {}px;", column.widths().size);
                                    if column == Column::Select {
                                        view! {
                                            <th style=style>
                                                <input
                                                    type="checkbox"
                                                    aria-label="Select all on this page"
                                                    prop:checked=move || header_check() == HeaderCheck::All
                                                    prop:indeterminate=move || header_check() == HeaderCheck::Some
                                                    on:change=move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        let ids = page.with_untracked(|p| p.ids.clone());
                                                        table.update(|t| t.set_page_selected(&ids, checked));
                                                    }
                                                />
                                            </th>
                                        }
                                        .into_any()
                                    } else {
                                        view! { <th style=style>{column.header()}</th> }.into_any()
                                    }
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page.get().rows
                            key=|row| row.id.clone()
                            children=move |row| view! { <OrderRow row=row table=table copies=copies copy=copy /> }
                        />
                    </tbody>
                </table>

                <nav class="orders__pagination" aria-label="Pagination">
                    <button
                        class="orders__page"
                        aria-label="Previous page"
                        disabled=move || !page.with(|p| p.can_previous)
                        on:click=move |_| {
                            let index = page.with_untracked(|p| p.page_index);
                            table.update(|t| t.set_page(index.saturating_sub(1)));
                        }
                    >
                        "‹"
                    </button>
                    {move || {
                        let current = page.with(|p| p.page_index);
                        page.get()
                            .buttons
                            .into_iter()
                            .map(|number| {
                                view! {
                                    <button
                                        class="orders__page"
                                        class:orders__page--current={number == current + 1}
                                        aria-current={(number == current + 1).then_some("page")}
                                        on:click=move |_| table.update(|t| t.set_page(number - 1))
                                    >
                                        {number}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="orders__page"
                        aria-label="Next page"
                        disabled=move || !page.with(|p| p.can_next)
                        on:click=move |_| {
                            let index = page.with_untracked(|p| p.page_index);
                            table.update(|t| t.set_page(index + 1));
                        }
                    >
                        "›"
                    </button>
                    <span class="orders__page-summary">
                        {move || page.with(|p| format!("Page {} of {}", p.page_index + 1, p.page_count.max(1)))}
                    </span>
                </nav>
            </Show>
        </div>
    }
}

#[component]
fn OrderRow(
    row: OrderRecord,
    table: RwSignal<TableViewState>,
    copies: RwSignal<CopyIndicators>,
    copy: Callback<(String, String)>,
) -> impl IntoView {
    let id = row.id.clone();
    let id_key = format!("id:{}", row.id);
    let address_key = format!("address:{}", row.id);
    let status = row.status;

    let selected = {
        let id = id.clone();
        Memo::new(move |_| table.with(|t| t.is_selected(&id)))
    };
    let on_select = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        table.update(|t| t.set_row_selected(&id, checked));
    };

    view! {
        <tr class="orders__row" class:orders__row--selected=selected>
            <td>
                <input type="checkbox" aria-label="Select row" prop:checked=selected on:change=on_select />
            </td>
            <td>
                <CopyCell key=id_key text=row.id.clone() copies=copies copy=copy />
            </td>
            <td>
                <span class="orders__user">
                    <img class="orders__avatar" src=row.user.avatar alt="" width="24" height="24" />
                    {row.user.name}
                </span>
            </td>
            <td>{row.project}</td>
            <td>
                <CopyCell key=address_key text=row.address copies=copies copy=copy />
            </td>
            <td>
                <span class="orders__date">
                    <span class="icon icon--calendar" aria-hidden="true"></span>
                    {row.date}
                </span>
            </td>
            <td>
                <span class=format!("badge badge--{}", status.color().as_str())>{status.label()}</span>
            </td>
            <td>
                <button class="orders__more" aria-label="More actions">"…"</button>
            </td>
        </tr>
    }
}

/// Text with a copy button that shows a check mark once copied.
#[component]
fn CopyCell(
    key: String,
    text: String,
    copies: RwSignal<CopyIndicators>,
    copy: Callback<(String, String)>,
) -> impl IntoView {
    let copied = {
        let key = key.clone();
        Memo::new(move |_| copies.with(|c| c.is_copied(&key)))
    };
    let payload = text.clone();

    view! {
        <span class="copy-cell">
            <span class="copy-cell__text">{text}</span>
            <button
                class="copy-cell__button"
                class:copy-cell__button--copied=copied
                aria-label=move || if copied.get() { "Copied" } else { "Copy to clipboard" }
                on:click=move |_| copy.run((key.clone(), payload.clone()))
            >
                {move || if copied.get() { "✓" } else { "⧉" }}
            </button>
        </span>
    }
}
