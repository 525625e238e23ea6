//! Left drawer menus: the Dashboards section and the Pages section.
//!
//! Entries without a path are placeholders that render but do not navigate.
//! Entries with children expand in place instead of navigating.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::drawer::Drawers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: Option<&'static str>,
    pub icon: &'static str,
    pub children: &'static [NavItem],
}

impl NavItem {
    const fn link(label: &'static str, path: &'static str, icon: &'static str) -> Self {
        Self { label, path: Some(path), icon, children: &[] }
    }

    const fn placeholder(label: &'static str, icon: &'static str) -> Self {
        Self { label, path: None, icon, children: &[] }
    }

    /// Exact match against the current pathname.
    #[must_use]
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path.is_some_and(|p| p == pathname)
    }

    /// Whether this entry or any descendant is the current page.
    #[must_use]
    pub fn contains_active(&self, pathname: &str) -> bool {
        self.is_active(pathname) || self.children.iter().any(|c| c.contains_active(pathname))
    }
}

const USER_PROFILE: [NavItem; 5] = [
    NavItem::placeholder("Overview", ""),
    NavItem::placeholder("Projects", ""),
    NavItem::placeholder("Campaigns", ""),
    NavItem::placeholder("Documents", ""),
    NavItem::placeholder("Followers", ""),
];

pub static DASHBOARD_ITEMS: [NavItem; 5] = [
    NavItem::link("Default", "/dashboard", "chart-pie"),
    NavItem::link("Orders", "/dashboard/order-list", "shopping-bag"),
    NavItem::link("Projects", "/dashboard/projects", "folder"),
    NavItem::placeholder("eCommerce", "shopping-bag"),
    NavItem::placeholder("Online Courses", "book-open"),
];

pub static PAGE_ITEMS: [NavItem; 5] = [
    NavItem { label: "User Profile", path: None, icon: "user-square", children: &USER_PROFILE },
    NavItem::placeholder("Account", "credit-card"),
    NavItem::placeholder("Corporate", "users"),
    NavItem::placeholder("Blog", "file-text"),
    NavItem::placeholder("Social", "message-circle"),
];

/// Titled list of menu entries.
#[component]
pub fn NavMenu(title: &'static str, items: &'static [NavItem]) -> impl IntoView {
    view! {
        <nav class="nav-menu" aria-label=title>
            <h3 class="nav-menu__title">{title}</h3>
            <ul class="nav-menu__list">
                {items.iter().map(|item| view! { <NavEntry item=*item /> }).collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn NavEntry(item: NavItem) -> impl IntoView {
    let drawers = Drawers::from_context();
    let location = use_location();
    let expanded = RwSignal::new(location.pathname.with_untracked(|p| item.contains_active(p)));

    let active = move || location.pathname.with(|p| item.is_active(p));
    let icon_class = format!("nav-menu__icon icon icon--{}", item.icon);

    if !item.children.is_empty() {
        return view! {
            <li class="nav-menu__item nav-menu__item--group">
                <button
                    class="nav-menu__row"
                    class:nav-menu__row--expanded=move || expanded.get()
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| expanded.update(|e| *e = !*e)
                >
                    <span class="nav-menu__chevron" aria-hidden="true"></span>
                    <span class=icon_class aria-hidden="true"></span>
                    <span class="nav-menu__label">{item.label}</span>
                </button>
                <Show when=move || expanded.get()>
                    <ul class="nav-menu__submenu">
                        {item
                            .children
                            .iter()
                            .map(|child| view! { <li class="nav-menu__subitem">{child.label}</li> })
                            .collect_view()}
                    </ul>
                </Show>
            </li>
        }
        .into_any();
    }

    match item.path {
        Some(path) => view! {
            <li class="nav-menu__item">
                <a
                    href=path
                    class="nav-menu__row"
                    class:nav-menu__row--active=active
                    aria-current=move || active().then_some("page")
                    on:click=move |_| drawers.close_left_if_mobile()
                >
                    <span class="nav-menu__marker" aria-hidden="true"></span>
                    <span class=icon_class aria-hidden="true"></span>
                    <span class="nav-menu__label">{item.label}</span>
                </a>
            </li>
        }
        .into_any(),
        None => view! {
            <li class="nav-menu__item">
                <span class="nav-menu__row nav-menu__row--inert">
                    <span class="nav-menu__chevron" aria-hidden="true"></span>
                    <span class=icon_class aria-hidden="true"></span>
                    <span class="nav-menu__label">{item.label}</span>
                </span>
            </li>
        }
        .into_any(),
    }
}
