//! The `gg` two-key sequence, modeled as an explicit state machine.
//!
//! Two states: idle, or a pending `g` stamped with the wall-clock instant it
//! was pressed. The transition function is pure in `(state, now)`; expiry is
//! checked lazily at the next `g` press, so no timer runs in the background.

use std::time::{Duration, Instant};

/// How long the second `g` may lag the first and still fire the jump.
pub const KEY_SEQUENCE_WINDOW: Duration = Duration::from_millis(500);

/// Pending-prefix state for the `gg` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeySequence {
    /// No prefix pending.
    #[default]
    Idle,
    /// A `g` was pressed at the recorded instant.
    Pending(Instant),
}

impl KeySequence {
    /// Feed a `g` press at `now`.
    ///
    /// Returns the next state and whether the jump-to-top fires. A pending
    /// prefix older than the window is treated as expired: the press starts
    /// a fresh prefix instead of firing, so `g … pause … g` never jumps.
    /// After firing, the state returns to idle so a third `g` starts over.
    #[must_use]
    pub fn press_g(self, now: Instant) -> (Self, bool) {
        match self {
            KeySequence::Pending(at) if now.duration_since(at) < KEY_SEQUENCE_WINDOW => {
                (KeySequence::Idle, true)
            }
            _ => (KeySequence::Pending(now), false),
        }
    }

    /// Any key other than `g` silently drops a pending prefix.
    #[must_use]
    pub fn interrupt(self) -> Self {
        KeySequence::Idle
    }
}
