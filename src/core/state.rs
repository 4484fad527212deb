//! Game state snapshots.
//!
//! ## GameState
//!
//! Everything the table shows at one instant:
//! - Memory gauge per player (always equal and opposite)
//! - Last die roll per player
//! - Whose turn it is and how many turns have ended
//! - The last selected memory cell
//! - The clock reading and mode
//!
//! Snapshots are values. Engine operations take a snapshot and return a new
//! one; nothing mutates a published snapshot in place.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerPair};
use crate::memory::MemoryCell;

/// What the clock is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockMode {
    /// Not running; shown only once a turn has started.
    #[default]
    Stopped,
    /// Counting total match time up from the first turn.
    Stopwatch,
    /// Counting the final period down to zero.
    Countdown,
}

/// Clock reading carried in a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerState {
    pub elapsed_seconds: u32,
    pub mode: ClockMode,
}

impl TimerState {
    /// Whether the clock should be on screen.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.mode != ClockMode::Stopped
    }

    /// `MM:SS`, zero padded. Minutes keep growing past 59.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.elapsed_seconds / 60,
            self.elapsed_seconds % 60
        )
    }
}

/// Coarse phase of the turn protocol, derived from a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No dice, no turn.
    Idle,
    /// At least one die rolled, no turn started yet.
    DiceRolled,
    /// A player's turn is running.
    TurnActive,
}

/// Immutable snapshot of the table.
///
/// `GameState::default()` is the initial state and the result of a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) memory: PlayerPair<i32>,
    pub(crate) dice: PlayerPair<Option<u8>>,
    pub(crate) current_turn: Option<PlayerId>,
    pub(crate) turn_counter: Option<u32>,
    pub(crate) selected: MemoryCell,
    pub(crate) selected_by_player_one: bool,
    pub(crate) timer: TimerState,
}

impl GameState {
    /// Create the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Memory ===

    /// A player's memory gauge.
    #[must_use]
    pub fn memory(&self, player: PlayerId) -> i32 {
        self.memory[player]
    }

    #[must_use]
    pub fn player_one_memory(&self) -> i32 {
        self.memory[PlayerId::PlayerOne]
    }

    #[must_use]
    pub fn player_two_memory(&self) -> i32 {
        self.memory[PlayerId::PlayerTwo]
    }

    // === Dice ===

    /// A player's last roll, if any.
    #[must_use]
    pub fn die(&self, player: PlayerId) -> Option<u8> {
        self.dice[player]
    }

    #[must_use]
    pub fn player_one_die(&self) -> Option<u8> {
        self.dice[PlayerId::PlayerOne]
    }

    #[must_use]
    pub fn player_two_die(&self) -> Option<u8> {
        self.dice[PlayerId::PlayerTwo]
    }

    // === Turns ===

    #[must_use]
    pub fn current_turn(&self) -> Option<PlayerId> {
        self.current_turn
    }

    #[must_use]
    pub fn turn_counter(&self) -> Option<u32> {
        self.turn_counter
    }

    /// Derive the protocol phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.current_turn.is_some() {
            TurnPhase::TurnActive
        } else if self.dice.iter().any(|(_, die)| die.is_some()) {
            TurnPhase::DiceRolled
        } else {
            TurnPhase::Idle
        }
    }

    // === Selection ===

    #[must_use]
    pub fn selected(&self) -> MemoryCell {
        self.selected
    }

    /// Raw index of the selected cell, `-1` for the neutral cell.
    #[must_use]
    pub fn selected_index(&self) -> i8 {
        self.selected.index()
    }

    #[must_use]
    pub fn selected_by_player_one(&self) -> bool {
        self.selected_by_player_one
    }

    // === Clock ===

    #[must_use]
    pub fn timer(&self) -> TimerState {
        self.timer
    }

    /// Copy of this snapshot with a new clock reading.
    #[must_use]
    pub fn with_timer(mut self, timer: TimerState) -> Self {
        self.timer = timer;
        self
    }
}
