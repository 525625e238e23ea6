//! Light/dark switch in the header.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Read after hydration so server markup and first client render agree.
    let system_dark = RwSignal::new(false);
    Effect::new(move || system_dark.set(dark_mode::system_prefers_dark()));

    let dark = move || dark_mode::is_dark(ui.with(|u| u.theme), system_dark.get());
    let on_toggle = move |_| {
        let next = dark_mode::toggled(ui.with_untracked(|u| u.theme), system_dark.get_untracked());
        ui.update(|u| u.set_theme(next));
    };

    view! {
        <button
            class="header__icon-button theme-toggle"
            on:click=on_toggle
            aria-label=move || if dark() { "Switch to light theme" } else { "Switch to dark theme" }
            title="Toggle theme"
        >
            {move || if dark() { "☀" } else { "☾" }}
        </button>
    }
}
