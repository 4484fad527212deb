//! Turn protocol and match clock.
//!
//! - [`TurnEngine`]: dice, turn start/end, final countdown, reset
//! - [`Clock`]: stopwatch/countdown value driven by ticks
//!
//! Both are time-free pure values: the engine tells the session what to do
//! with the clock via [`ClockCommand`], and the session decides when ticks
//! happen.

mod clock;
mod engine;

pub use clock::{Clock, ClockTick};
pub use engine::{ClockCommand, Transition, TurnEngine};
