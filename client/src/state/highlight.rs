//! Short-lived visual cues raised by header buttons.
//!
//! A `Flash` turns on immediately and off when its timer fires. Every
//! `light` issues a new token, so a timer from an earlier press cannot turn
//! off a later one.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

/// How long the notifications section stays highlighted.
pub const NOTIFICATION_HIGHLIGHT_MS: u32 = 2_000;
/// How long the history button keeps asking for the Recently tab.
pub const RECENTLY_TRIGGER_MS: u32 = 2_000;
/// How long the Recently tab glows after switching to it.
pub const RECENTLY_HIGHLIGHT_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flash {
    token: u64,
    lit: bool,
}

impl Flash {
    /// Turn on and return the token the expiry timer must present.
    pub fn light(&mut self) -> u64 {
        self.token += 1;
        self.lit = true;
        self.token
    }

    /// Turn off if `token` is the most recent one. Returns whether it did.
    pub fn expire(&mut self, token: u64) -> bool {
        if self.lit && token == self.token {
            self.lit = false;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.lit = false;
    }

    #[must_use]
    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

/// Cues shared by the header and both drawers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellCues {
    pub notifications: Flash,
    pub recently: Flash,
}
