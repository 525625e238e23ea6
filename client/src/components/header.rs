//! Top bar: drawer toggles, favorite star, breadcrumbs, search, and the
//! theme/history/notification buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! The history and notification buttons open their drawer and light a
//! `ShellCues` flash; the drawers react to the cue, and a guarded timer
//! turns it off again.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::drawer::Drawers;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::drawer::Panel;
use crate::state::favorites::FavoritesState;
use crate::state::highlight::{NOTIFICATION_HIGHLIGHT_MS, RECENTLY_TRIGGER_MS, ShellCues};
use crate::util::clock::now_ms;
use crate::util::route_labels::{breadcrumbs, favorite_page};
use crate::util::schedule::{TaskGuard, after};

/// `Ctrl+/` or `Cmd+/` focuses the search box.
pub fn is_search_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    key == "/" && (ctrl || meta)
}

#[component]
pub fn Header() -> impl IntoView {
    let drawers = Drawers::from_context();
    let favorites = expect_context::<RwSignal<FavoritesState>>();
    let cues = expect_context::<RwSignal<ShellCues>>();
    let location = use_location();
    let guard = TaskGuard::scoped();

    let search_ref = NodeRef::<leptos::html::Input>::new();
    let search = RwSignal::new(String::new());

    let shortcut = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_search_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
            if let Some(input) = search_ref.get_untracked() {
                let _ = input.focus();
            }
        }
    });
    on_cleanup(move || shortcut.remove());

    let trail = move || location.pathname.with(|p| breadcrumbs(p));
    let is_favorited = move || {
        let id = location.pathname.with(|p| favorite_page(p).id);
        favorites.with(|f| f.contains(&id))
    };
    let on_star = move |_| {
        let page = location.pathname.with_untracked(|p| favorite_page(p));
        favorites.update(|f| f.toggle(page, now_ms()));
    };

    let history_guard = guard.clone();
    let on_history = move |_| {
        drawers.set_open(Panel::Left, true);
        let mut token = 0;
        cues.update(|c| token = c.recently.light());
        after(&history_guard, RECENTLY_TRIGGER_MS, move || {
            cues.update(|c| {
                c.recently.expire(token);
            });
        });
    };

    let on_notifications = move |_| {
        drawers.set_open(Panel::Right, true);
        let mut token = 0;
        cues.update(|c| token = c.notifications.light());
        after(&guard, NOTIFICATION_HIGHLIGHT_MS, move || {
            cues.update(|c| {
                c.notifications.expire(token);
            });
        });
    };

    view! {
        <header class="header">
            <div class="header__left">
                <button
                    class="header__icon-button"
                    class:header__icon-button--collapsed=move || !drawers.is_open(Panel::Left)
                    on:click=move |_| drawers.toggle(Panel::Left)
                    aria-label="Toggle sidebar"
                    aria-expanded=move || drawers.is_open(Panel::Left).to_string()
                >
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <rect x="2.5" y="3.5" width="15" height="13" rx="2" />
                        <path d="M7.5 3.5 V16.5" />
                    </svg>
                </button>
                <button
                    class="header__icon-button header__star"
                    class:header__star--active=is_favorited
                    on:click=on_star
                    aria-label=move || if is_favorited() { "Remove from favorites" } else { "Add to favorites" }
                    aria-pressed=move || is_favorited().to_string()
                >
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <path d="M10 2.5 L12.3 7.2 L17.5 7.9 L13.8 11.5 L14.6 16.7 L10 14.3 L5.4 16.7 L6.2 11.5 L2.5 7.9 L7.7 7.2 Z" />
                    </svg>
                </button>
                <nav class="breadcrumbs" aria-label="Breadcrumb">
                    {move || {
                        let crumbs = trail();
                        let last = crumbs.len().saturating_sub(1);
                        crumbs
                            .into_iter()
                            .enumerate()
                            .map(|(i, crumb)| {
                                view! {
                                    {(i > 0).then(|| view! { <span class="breadcrumbs__sep" aria-hidden="true">"/"</span> })}
                                    <a
                                        href=crumb.path
                                        class="breadcrumbs__item"
                                        class:breadcrumbs__item--current={i == last}
                                        aria-current={(i == last).then_some("page")}
                                    >
                                        {crumb.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
            </div>

            <div class="header__right">
                <label class="header__search">
                    <svg class="header__search-icon" viewBox="0 0 20 20" aria-hidden="true">
                        <circle cx="9" cy="9" r="5.5" />
                        <path d="M13 13 L17 17" />
                    </svg>
                    <input
                        type="search"
                        class="header__search-input"
                        placeholder="Search"
                        aria-label="Search"
                        node_ref=search_ref
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <kbd class="header__search-hint">"⌘/"</kbd>
                </label>
                <ThemeToggle />
                <button class="header__icon-button" on:click=on_history aria-label="Show recent pages">
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <path d="M3.5 10 A6.5 6.5 0 1 0 5.4 5.4" />
                        <path d="M3.5 3.5 V6.5 H6.5" />
                        <path d="M10 6.5 V10 L12.5 11.5" />
                    </svg>
                </button>
                <button class="header__icon-button" on:click=on_notifications aria-label="Show notifications">
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <path d="M5 8 A5 5 0 0 1 15 8 V12 L16.5 14.5 H3.5 L5 12 Z" />
                        <path d="M8.5 16.5 A1.5 1.5 0 0 0 11.5 16.5" />
                    </svg>
                </button>
                <button
                    class="header__icon-button"
                    class:header__icon-button--collapsed=move || !drawers.is_open(Panel::Right)
                    on:click=move |_| drawers.toggle(Panel::Right)
                    aria-label="Toggle notifications panel"
                    aria-expanded=move || drawers.is_open(Panel::Right).to_string()
                >
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <rect x="2.5" y="3.5" width="15" height="13" rx="2" />
                        <path d="M12.5 3.5 V16.5" />
                    </svg>
                </button>
            </div>
        </header>
    }
}
