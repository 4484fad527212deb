//! Match clock.
//!
//! Two phases:
//!
//! - **Stopwatch**: total match time since the first turn started. The
//!   reading is recomputed from the anchor instant on every tick, so late
//!   or skipped ticks never make it drift.
//! - **Countdown**: the final period. Each tick removes one second; the
//!   reading clamps at zero and expiry is reported exactly once.
//!
//! `Clock` is a `Copy` value. Every operation returns a new clock, and the
//! caller decides when ticks happen.

use tokio::time::Instant;

use crate::core::{ClockMode, TimerState};

/// Clock value owned by a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    mode: ClockMode,
    anchor: Option<Instant>,
    elapsed_seconds: u32,
    expiry_reported: bool,
}

/// Result of advancing the clock by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTick {
    pub clock: Clock,
    /// The countdown reached zero on this tick.
    pub expired: bool,
}

impl Clock {
    /// A stopped clock reading zero.
    #[must_use]
    pub fn stopped() -> Self {
        Self::default()
    }

    /// Start counting up from zero at `now`.
    #[must_use]
    pub fn start_stopwatch(now: Instant) -> Self {
        Self {
            mode: ClockMode::Stopwatch,
            anchor: Some(now),
            elapsed_seconds: 0,
            expiry_reported: false,
        }
    }

    /// Start counting down from `seconds`.
    #[must_use]
    pub fn start_countdown(seconds: u32) -> Self {
        Self {
            mode: ClockMode::Countdown,
            anchor: None,
            elapsed_seconds: seconds,
            expiry_reported: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.mode != ClockMode::Stopped
    }

    /// Seconds currently shown.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Reading for a snapshot.
    #[must_use]
    pub fn timer(&self) -> TimerState {
        TimerState {
            elapsed_seconds: self.elapsed_seconds,
            mode: self.mode,
        }
    }

    /// Advance by one tick observed at `now`.
    #[must_use]
    pub fn tick(self, now: Instant) -> ClockTick {
        match (self.mode, self.anchor) {
            (ClockMode::Stopwatch, Some(anchor)) => {
                let since = now.saturating_duration_since(anchor).as_secs();
                let clock = Self {
                    elapsed_seconds: u32::try_from(since).unwrap_or(u32::MAX),
                    ..self
                };
                ClockTick {
                    clock,
                    expired: false,
                }
            }
            (ClockMode::Countdown, _) => {
                let remaining = self.elapsed_seconds.saturating_sub(1);
                let expired = remaining == 0 && !self.expiry_reported;
                let clock = Self {
                    elapsed_seconds: remaining,
                    expiry_reported: self.expiry_reported || expired,
                    ..self
                };
                ClockTick { clock, expired }
            }
            _ => ClockTick {
                clock: self,
                expired: false,
            },
        }
    }
}
