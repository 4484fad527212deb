//! # memory-counter
//!
//! Game-state engine for a two-player card game memory counter.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every event turns one immutable
//!    `GameState` into the next. Refused events leave it untouched.
//!
//! 2. **Equal and opposite memory**: the two gauges always mirror each
//!    other; one tap sets both.
//!
//! 3. **Time at the edge**: the rules are time-free. The session owns the
//!    clock anchor and a single cancelable ticker.
//!
//! 4. **Cues, not effects**: the engine reports that something happened;
//!    collaborators own sound and haptics.
//!
//! ## Modules
//!
//! - `core`: Players, snapshots, RNG, configuration, errors
//! - `memory`: Memory cells and the selection rule
//! - `turn`: Dice/turn state machine and the match clock
//! - `cues`: Cue signals and their feedback mapping
//! - `session`: Event API, history and the async driver

pub mod core;
pub mod cues;
pub mod memory;
pub mod session;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    ClockMode, Color, ConfigError, EngineError, GameRng, GameState, PlayerId, PlayerPair,
    SessionConfig, Settings, TimerState, TurnPhase,
};

pub use crate::memory::{MemoryCell, MemorySelector};

pub use crate::turn::{Clock, ClockCommand, ClockTick, Transition, TurnEngine};

pub use crate::cues::{Cue, CueSink, Feedback, Haptic, Sound};

pub use crate::session::{
    DriverError, Event, EventRecord, GameSession, Outcome, SessionDriver, SessionHandle,
};
