//! Drawer shell shared by the navigation and feed panels.
//!
//! ARCHITECTURE
//! ============
//! Open flags live in `UiState`; the layout mode comes from the
//! `DrawerCoordinator`. Components never flip the flags directly, they go
//! through `Drawers` so every mutation runs the coordinator's rules.
//!
//! Each shell owns a `DrawerMotion`: the server-rendered frame and the first
//! frame after an inline/overlay switch carry no transition.

use leptos::prelude::*;

use crate::state::drawer::{DrawerCoordinator, DrawerMode, DrawerView, Panel};
use crate::state::ui::UiState;
use crate::util::animation::DrawerMotion;
use crate::util::gesture::SwipeTracker;

/// Handle pairing the preference signal with the coordinator signal.
#[derive(Clone, Copy)]
pub struct Drawers {
    pub ui: RwSignal<UiState>,
    pub coordinator: RwSignal<DrawerCoordinator>,
}

impl Drawers {
    pub fn from_context() -> Self {
        Self { ui: expect_context(), coordinator: expect_context() }
    }

    /// Tracked view of `panel`.
    pub fn view(self, panel: Panel) -> DrawerView {
        self.coordinator.with(|c| self.ui.with(|u| c.view(u, panel)))
    }

    pub fn view_untracked(self, panel: Panel) -> DrawerView {
        self.coordinator.with_untracked(|c| self.ui.with_untracked(|u| c.view(u, panel)))
    }

    pub fn is_open(self, panel: Panel) -> bool {
        self.view(panel).is_open
    }

    pub fn is_mobile(self) -> bool {
        self.coordinator.with(DrawerCoordinator::is_mobile)
    }

    /// Run a coordinator rule against the preferences.
    pub fn apply(self, f: impl FnOnce(&DrawerCoordinator, &mut UiState)) {
        self.coordinator.with_untracked(|c| self.ui.update(|u| f(c, u)));
    }

    pub fn set_open(self, panel: Panel, open: bool) {
        self.apply(|c, u| c.set_open(u, panel, open));
    }

    pub fn toggle(self, panel: Panel) {
        self.apply(|c, u| c.toggle(u, panel));
    }

    /// Close the left drawer after navigating on a phone.
    pub fn close_left_if_mobile(self) {
        if self.coordinator.with_untracked(DrawerCoordinator::is_mobile) {
            self.set_open(Panel::Left, false);
        }
    }
}

/// Animated side panel with swipe handling and an overlay backdrop.
#[component]
pub fn Drawer(panel: Panel, #[prop(into)] label: String, children: Children) -> impl IntoView {
    let drawers = Drawers::from_context();

    let mut motion = DrawerMotion::new(panel);
    let frame = RwSignal::new(motion.next_frame(drawers.view_untracked(panel)));
    let motion = StoredValue::new(motion);
    Effect::new(move || {
        let view = drawers.view(panel);
        motion.update_value(|m| frame.set(m.next_frame(view)));
    });

    let tracker = StoredValue::new(SwipeTracker::default());
    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(sample) = crate::util::gesture::sample_from_event(&ev, false) {
                tracker.update_value(|t| t.begin(sample));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };
    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(sample) = crate::util::gesture::sample_from_event(&ev, true) else {
                tracker.update_value(SwipeTracker::cancel);
                return;
            };
            let mut direction = None;
            tracker.update_value(|t| direction = t.finish(sample));
            if let Some(direction) = direction {
                drawers.apply(|c, u| c.on_swipe(u, panel, direction));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };
    let on_touch_cancel = move |_ev: leptos::ev::TouchEvent| tracker.update_value(SwipeTracker::cancel);

    let side = panel.as_str();
    let is_overlay = move || frame.get().mode == DrawerMode::Overlay;
    let show_backdrop = move || {
        let view = drawers.view(panel);
        view.is_open && view.mode == DrawerMode::Overlay
    };

    view! {
        <aside
            class=format!("drawer drawer--{side}")
            class:drawer--overlay=is_overlay
            class:drawer--open=move || drawers.is_open(panel)
            style=move || frame.get().shell_style()
            aria-label=label
            aria-hidden=move || (!drawers.is_open(panel)).to_string()
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            <div class="drawer__content" style=move || frame.get().content_style()>
                {children()}
            </div>
        </aside>
        <Show when=show_backdrop>
            <div
                class=format!("drawer-backdrop drawer-backdrop--{side}")
                aria-hidden="true"
                on:click=move |_| {
                    drawers.apply(|c, u| {
                        c.on_backdrop_tap(u, panel);
                    });
                }
            ></div>
        </Show>
    }
}
