//! Redirect countdown state machine.
//!
//! ```text
//!            success                tick (n > 0)             tick (n == 0)
//!   Idle ─────────────▶ Counting(5) ──────────▶ Counting(n-1) ──────────▶ Fired
//!    ▲                      │                                              │
//!    └──────── reselect / new upload ◀─────────────────────────────────────┘
//! ```
//!
//! `Fired` is terminal until the next successful upload.

/// Where the countdown currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Countdown {
    #[default]
    Idle,
    Counting(u32),
    Fired,
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEffect {
    /// The counter moved down and now shows this many seconds.
    Remaining(u32),
    /// The counter was at zero: open the dashboard now.
    Redirect,
    /// Not counting; nothing happened.
    Inactive,
}

impl Countdown {
    pub fn start(seconds: u32) -> Self {
        Countdown::Counting(seconds)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Countdown::Counting(_))
    }

    /// Seconds left while counting.
    pub fn remaining(&self) -> Option<u32> {
        match self {
            Countdown::Counting(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether the redirect panel should be shown.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Countdown::Idle)
    }

    /// Advance one second.
    pub fn tick(&mut self) -> TickEffect {
        match *self {
            Countdown::Counting(0) => {
                *self = Countdown::Fired;
                TickEffect::Redirect
            }
            Countdown::Counting(n) => {
                *self = Countdown::Counting(n - 1);
                TickEffect::Remaining(n - 1)
            }
            Countdown::Idle | Countdown::Fired => TickEffect::Inactive,
        }
    }

    pub fn cancel(&mut self) {
        *self = Countdown::Idle;
    }
}
