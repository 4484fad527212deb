//! Core engine types: players, state snapshots, RNG, configuration, errors.
//!
//! Everything here is plain data. The rules that move a snapshot from one
//! state to the next live in `memory` and `turn`.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{Color, ImageRef, SessionConfig, Settings};
pub use error::{ConfigError, EngineError};
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
pub use state::{ClockMode, GameState, TimerState, TurnPhase};
