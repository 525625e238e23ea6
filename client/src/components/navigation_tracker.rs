//! Records every route change in the navigation history.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::StateLoaded;
use crate::state::navigation::NavigationState;
use crate::util::clock::now_ms;
use crate::util::route_labels::{breadcrumbs, page_title};

/// Renders nothing; keeps `NavigationState` in step with the router.
#[component]
pub fn NavigationTracker() -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let StateLoaded(loaded) = expect_context::<StateLoaded>();
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        if !loaded.get() {
            return;
        }
        let title = page_title(&path);
        navigation.update(|n| {
            n.record(&path, &title, now_ms());
            n.set_breadcrumbs(breadcrumbs(&path));
        });
    });
}
