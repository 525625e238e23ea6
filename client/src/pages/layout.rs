//! Dashboard shell: two drawers around the header and routed content.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout owns the `DrawerCoordinator` for as long as a dashboard route
//! is mounted. Browser events feed it:
//!
//! - mount: one immediate measurement (mobile closes both drawers);
//! - `resize`: debounced by `RESIZE_DEBOUNCE_MS`, last call wins;
//! - `keydown` Escape: closes whatever is open.
//!
//! A standing effect closes the left drawer whenever both are open on a
//! phone, and another locks body scrolling while an overlay is open.
//! Cleanup tears the coordinator down so a late resize timer is a no-op.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::drawer::{Drawer, Drawers};
use crate::components::header::Header;
use crate::components::left_drawer::LeftDrawerContent;
use crate::components::right_drawer::RightDrawerContent;
use crate::state::drawer::{DrawerCoordinator, Panel, RESIZE_DEBOUNCE_MS};
use crate::state::highlight::ShellCues;
use crate::state::ui::UiState;
use crate::util::schedule::{TaskGuard, after};
use crate::util::viewport;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let coordinator = RwSignal::new(DrawerCoordinator::new());
    provide_context(coordinator);
    provide_context(RwSignal::new(ShellCues::default()));
    let drawers = Drawers { ui, coordinator };
    let guard = TaskGuard::scoped();

    Effect::new(move || {
        if let Some(width) = viewport::inner_width() {
            coordinator.update(|c| ui.update(|u| c.measure(width, u)));
        }
    });

    let resize = window_event_listener(leptos::ev::resize, move |_| {
        let Some(width) = viewport::inner_width() else {
            return;
        };
        let mut ticket = None;
        coordinator.update_untracked(|c| ticket = Some(c.schedule_resize(width)));
        let Some(ticket) = ticket else {
            return;
        };
        after(&guard, RESIZE_DEBOUNCE_MS, move || {
            coordinator.update(|c| {
                ui.update(|u| {
                    c.flush_resize(ticket, u);
                });
            });
        });
    });

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        if drawers.view_untracked(Panel::Left).is_open || drawers.view_untracked(Panel::Right).is_open {
            drawers.apply(|c, u| {
                c.on_escape(u);
            });
        }
    });

    Effect::new(move || {
        let both_open_on_phone =
            drawers.is_mobile() && drawers.is_open(Panel::Left) && drawers.is_open(Panel::Right);
        if both_open_on_phone {
            drawers.apply(|c, u| {
                c.enforce_exclusive(u);
            });
        }
    });

    Effect::new(move || {
        let locked = coordinator.with(|c| ui.with(|u| c.body_scroll_locked(u)));
        viewport::set_body_scroll_locked(locked);
    });

    on_cleanup(move || {
        resize.remove();
        escape.remove();
        viewport::set_body_scroll_locked(false);
        coordinator.try_update_untracked(DrawerCoordinator::teardown);
    });

    view! {
        <div class="dashboard-layout">
            <Drawer panel=Panel::Left label="Navigation">
                <LeftDrawerContent />
            </Drawer>
            <main class="dashboard-layout__main">
                <Header />
                <div class="dashboard-layout__content">
                    <Outlet />
                </div>
            </main>
            <Drawer panel=Panel::Right label="Notifications and activity">
                <RightDrawerContent />
            </Drawer>
        </div>
    }
}
