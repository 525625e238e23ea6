//! Left drawer content: brand, favorites/recently, and navigation menus.

use leptos::prelude::*;

use crate::components::favorites_tabs::FavoritesTabs;
use crate::components::nav_menu::{DASHBOARD_ITEMS, NavMenu, PAGE_ITEMS};

#[component]
pub fn LeftDrawerContent() -> impl IntoView {
    view! {
        <div class="sidebar">
            <a href="/dashboard" class="sidebar__brand">
                <img class="sidebar__logo" src="/images/byewind.svg" alt="" width="24" height="24" />
                <span class="sidebar__brand-name">"ByeWind"</span>
            </a>
            <FavoritesTabs />
            <NavMenu title="Dashboards" items=&DASHBOARD_ITEMS />
            <NavMenu title="Pages" items=&PAGE_ITEMS />
        </div>
    }
}
