//! Window measurements and document-level side effects for the shell.
//!
//! Server builds have no window: width reads return `None` and writes are
//! skipped.

/// `window.innerWidth` in CSS pixels.
pub fn inner_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Stop the page behind an overlay drawer from scrolling.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            log::warn!("could not update body scroll lock");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn server_build_has_no_viewport() {
        assert_eq!(inner_width(), None);
        set_body_scroll_locked(true);
        set_body_scroll_locked(false);
    }
}
