//! Copy-to-clipboard with per-value "copied" indicators.
//!
//! `CopyIndicators` tracks one indicator per copied value. Each copy gets a
//! token; completions and expiries carrying a stale token are ignored, so a
//! quick second copy is never reverted by the first copy's timer.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::collections::HashMap;

/// How long the success indicator stays up.
pub const COPIED_INDICATOR_MS: u32 = 2_000;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copying,
    Copied,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyIndicators {
    next_token: u64,
    entries: HashMap<String, (u64, CopyState)>,
}

impl CopyIndicators {
    /// Start copying `key`; returns the token for completion callbacks.
    pub fn begin(&mut self, key: &str) -> u64 {
        self.next_token += 1;
        self.entries.insert(key.to_owned(), (self.next_token, CopyState::Copying));
        self.next_token
    }

    pub fn succeed(&mut self, key: &str, token: u64) {
        if let Some(entry) = self.entries.get_mut(key)
            && entry.0 == token
        {
            entry.1 = CopyState::Copied;
        }
    }

    /// Failure and expiry both revert to idle.
    pub fn revert(&mut self, key: &str, token: u64) {
        if self.entries.get(key).is_some_and(|entry| entry.0 == token) {
            self.entries.remove(key);
        }
    }

    #[must_use]
    pub fn state(&self, key: &str) -> CopyState {
        self.entries.get(key).map_or(CopyState::Idle, |entry| entry.1)
    }

    #[must_use]
    pub fn is_copied(&self, key: &str) -> bool {
        self.state(key) == CopyState::Copied
    }
}

/// Write `text` to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}
