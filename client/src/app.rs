//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persisted slices (`UiState`, `FavoritesState`, `NavigationState`)
//! start from defaults on both server and client so hydration sees the same
//! markup. After hydration the stored blob is loaded into them once; from
//! then on every change is written back.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::navigation_tracker::NavigationTracker;
use crate::pages::{
    layout::DashboardLayout, not_found::NotFoundPage, order_list::OrderListPage, overview::OverviewPage,
    projects::ProjectsPage,
};
use crate::state::{favorites::FavoritesState, navigation::NavigationState, ui::UiState};
use crate::util::dark_mode;
use crate::util::route_labels::DASHBOARD_PATH;
use crate::util::ui_persistence::{BrowserStorage, PersistedState, STATE_VERSION, load_state, save_state};

/// Set once the stored preferences have been applied on the client.
#[derive(Clone, Copy)]
pub struct StateLoaded(pub RwSignal<bool>);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let favorites = RwSignal::new(FavoritesState::default());
    let navigation = RwSignal::new(NavigationState::default());
    let loaded = RwSignal::new(false);

    provide_context(ui);
    provide_context(favorites);
    provide_context(navigation);
    provide_context(StateLoaded(loaded));

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let stored = load_state(&BrowserStorage);
        ui.set(stored.ui);
        favorites.set(stored.favorites);
        navigation.set(stored.navigation);
        loaded.set(true);
    });

    Effect::new(move || {
        if !loaded.get() {
            return;
        }
        let state = PersistedState {
            version: STATE_VERSION,
            ui: ui.get(),
            favorites: favorites.get(),
            navigation: navigation.get(),
        };
        save_state(&BrowserStorage, &state);
    });

    Effect::new(move || dark_mode::apply(ui.with(|u| u.theme)));

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="Dashboard"/>

        <Router>
            <NavigationTracker/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("order-list") view=OrderListPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
