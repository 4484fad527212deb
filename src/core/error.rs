//! Error types for the engine and its configuration.

use thiserror::Error;

use super::player::PlayerId;

/// A transition was requested that the current state does not allow.
///
/// The engine never panics on these: the caller keeps its previous
/// snapshot and the error says why the event was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Cell index outside the ten numbered cells and the neutral cell.
    #[error("memory cell {0} is outside -1..=9")]
    CellOutOfRange(i8),

    /// Dice and turn starts are only accepted before a turn is running.
    #[error("a turn is already in progress")]
    TurnInProgress,

    /// Ending a turn or starting the countdown needs a running turn.
    #[error("no turn is in progress")]
    NoActiveTurn,

    /// Only the player whose turn it is may end it.
    #[error("{actual} cannot end the turn of {expected}")]
    NotPlayersTurn {
        /// Player whose turn is active.
        expected: PlayerId,
        /// Player who asked to end it.
        actual: PlayerId,
    },
}

/// Invalid session configuration or settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Colors are `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color {0:?}: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// The final countdown must last at least one second.
    #[error("countdown must be at least one second")]
    InvalidCountdown,

    /// The clock cannot tick at a zero interval.
    #[error("tick interval must be non-zero")]
    InvalidTickInterval,
}
