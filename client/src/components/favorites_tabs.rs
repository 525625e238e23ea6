//! Favorites / Recently switcher at the top of the left drawer.
//!
//! The Recently tab only exists once there is history. The header's history
//! button lights `ShellCues::recently`; while it is lit and history exists,
//! this component jumps to Recently and glows briefly.

use leptos::prelude::*;

use crate::components::drawer::Drawers;
use crate::state::favorites::FavoritesState;
use crate::state::highlight::{Flash, RECENTLY_HIGHLIGHT_MS, ShellCues};
use crate::state::navigation::NavigationState;
use crate::util::schedule::{TaskGuard, after};

/// Entries shown on the Recently tab.
const RECENT_LIMIT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Favorites,
    Recently,
}

#[component]
pub fn FavoritesTabs() -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesState>>();
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let cues = expect_context::<RwSignal<ShellCues>>();
    let drawers = Drawers::from_context();
    let guard = TaskGuard::scoped();

    let active = RwSignal::new(Tab::Favorites);
    let glow = RwSignal::new(Flash::default());
    let has_history = move || navigation.with(|n| n.count() > 0);

    Effect::new(move || {
        if !(cues.with(|c| c.recently.is_lit()) && has_history()) {
            return;
        }
        active.set(Tab::Recently);
        let mut token = 0;
        glow.update(|g| token = g.light());
        after(&guard, RECENTLY_HIGHLIGHT_MS, move || {
            glow.update(|g| {
                g.expire(token);
            });
        });
    });

    // A tab that disappears cannot stay selected.
    Effect::new(move || {
        if !has_history() && active.get_untracked() == Tab::Recently {
            active.set(Tab::Favorites);
        }
    });

    let tab_button = move |tab: Tab, label: &'static str| {
        view! {
            <button
                class="favorites-tabs__tab"
                class:favorites-tabs__tab--active=move || active.get() == tab
                role="tab"
                aria-selected=move || (active.get() == tab).to_string()
                on:click=move |_| active.set(tab)
            >
                {label}
            </button>
        }
    };

    let favorite_rows = move || {
        favorites
            .get()
            .items
            .into_iter()
            .map(|fav| {
                view! {
                    <li class="favorites-tabs__item">
                        <a href=fav.path class="favorites-tabs__link" on:click=move |_| drawers.close_left_if_mobile()>
                            <span class="favorites-tabs__dot" aria-hidden="true"></span>
                            {fav.name}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    let recent_rows = move || {
        navigation
            .get()
            .recent(RECENT_LIMIT)
            .iter()
            .map(|item| {
                let label = if item.title.is_empty() { item.path.clone() } else { item.title.clone() };
                view! {
                    <li class="favorites-tabs__item">
                        <a
                            href=item.path.clone()
                            class="favorites-tabs__link"
                            on:click=move |_| drawers.close_left_if_mobile()
                        >
                            <span class="favorites-tabs__dot" aria-hidden="true"></span>
                            {label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class="favorites-tabs" class:favorites-tabs--highlight=move || glow.get().is_lit()>
            <div class="favorites-tabs__bar" role="tablist">
                {tab_button(Tab::Favorites, "Favorites")}
                <Show when=has_history>{tab_button(Tab::Recently, "Recently")}</Show>
            </div>
            <Show
                when=move || active.get() == Tab::Favorites
                fallback=move || {
                    view! {
                        <Show
                            when=has_history
                            fallback=|| {
                                view! {
                                    <div class="favorites-tabs__empty">
                                        <p>"No recent pages"</p>
                                        <p class="favorites-tabs__hint">"Visit pages to see them here"</p>
                                    </div>
                                }
                            }
                        >
                            <ul class="favorites-tabs__list">{recent_rows}</ul>
                        </Show>
                    }
                }
            >
                <Show
                    when=move || favorites.with(|f| f.count() > 0)
                    fallback=|| {
                        view! {
                            <div class="favorites-tabs__empty">
                                <p>"No favorites yet"</p>
                                <p class="favorites-tabs__hint">"Star pages to add them here"</p>
                            </div>
                        }
                    }
                >
                    <ul class="favorites-tabs__list">{favorite_rows}</ul>
                </Show>
            </Show>
        </section>
    }
}
