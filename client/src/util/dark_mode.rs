//! Theme resolution and application.
//!
//! The stored preference is a `Theme`; `System` resolves through the
//! `prefers-color-scheme` media query. Applying a theme sets `data-theme`
//! and the `dark` class on the `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! Browser access is hydrate-only; SSR paths resolve `System` to light and
//! skip the DOM so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::Theme;

/// Whether the operating system asks for a dark scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Whether `theme` renders dark.
#[must_use]
pub fn is_dark(theme: Theme, system_dark: bool) -> bool {
    match theme {
        Theme::Light => false,
        Theme::Dark => true,
        Theme::System => system_dark,
    }
}

/// The explicit theme the toggle button switches to.
#[must_use]
pub fn toggled(theme: Theme, system_dark: bool) -> Theme {
    if is_dark(theme, system_dark) { Theme::Light } else { Theme::Dark }
}

/// Apply the resolved theme to the `<html>` element.
pub fn apply(theme: Theme) {
    let dark = is_dark(theme, system_prefers_dark());
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
            let _ = el.class_list().toggle_with_force("dark", dark);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}
