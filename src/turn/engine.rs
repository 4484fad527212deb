//! Turn protocol state machine.
//!
//! ```text
//!   Idle ──roll──▶ DiceRolled ──start──▶ TurnActive ──end──▶ TurnActive …
//!    ▲               │  ▲ roll                │ final countdown
//!    └──── reset ────┴──┴─────────────────────┘
//! ```
//!
//! Every transition is a pure function from a snapshot to a [`Transition`].
//! Refused transitions return an [`EngineError`] and the caller keeps the
//! snapshot it already has.

use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::core::{
    ClockMode, EngineError, GameRng, GameState, PlayerId, PlayerPair, TimerState, TurnPhase,
};
use crate::cues::Cue;

/// What the owner of the clock must do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockCommand {
    /// Leave the clock as it is.
    Keep,
    /// Re-anchor and count up from zero.
    StartStopwatch,
    /// Count down from the given number of seconds.
    StartCountdown(u32),
    /// Stop ticking and read zero.
    Stop,
}

/// Outcome of an accepted transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The new snapshot.
    pub state: GameState,
    /// Clock instruction for the session.
    pub clock: ClockCommand,
    /// Cues to publish, in order. Rarely more than one.
    pub cues: SmallVec<[Cue; 2]>,
}

impl Transition {
    /// A transition that leaves the clock alone and publishes nothing.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            clock: ClockCommand::Keep,
            cues: SmallVec::new(),
        }
    }

    /// Set the clock command (builder pattern).
    #[must_use]
    pub fn with_clock(mut self, clock: ClockCommand) -> Self {
        self.clock = clock;
        self
    }

    /// Add a cue (builder pattern).
    #[must_use]
    pub fn with_cue(mut self, cue: Cue) -> Self {
        self.cues.push(cue);
        self
    }
}

/// The turn/dice/clock rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnEngine;

impl TurnEngine {
    /// Roll `player`'s die. The opponent's die is untouched, and a re-roll
    /// simply overwrites the previous value.
    ///
    /// # Errors
    ///
    /// [`EngineError::TurnInProgress`] once a turn has started.
    pub fn roll_dice(
        state: &GameState,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Transition, EngineError> {
        if state.phase() == TurnPhase::TurnActive {
            return Err(EngineError::TurnInProgress);
        }

        let roll = rng.roll_die();
        debug!(%player, roll, "die rolled");

        let mut next = *state;
        next.dice[player] = Some(roll);
        Ok(Transition::new(next).with_cue(Cue::Dice))
    }

    /// Whether `player` has won the dice and may start the first turn.
    ///
    /// Both dice must be rolled and `player`'s must be strictly higher; a
    /// tie makes nobody eligible. Only offered before the turn counter
    /// exists.
    #[must_use]
    pub fn can_start_turn(state: &GameState, player: PlayerId) -> bool {
        if state.turn_counter.is_some() {
            return false;
        }
        match (state.dice[player], state.dice[player.opponent()]) {
            (Some(own), Some(other)) => own > other,
            _ => false,
        }
    }

    /// Start the first turn for `player` and start the stopwatch.
    ///
    /// The dice precondition is the caller's responsibility (see
    /// [`TurnEngine::can_start_turn`]).
    ///
    /// # Errors
    ///
    /// [`EngineError::TurnInProgress`] if a turn is already running.
    pub fn start_turn(state: &GameState, player: PlayerId) -> Result<Transition, EngineError> {
        if state.phase() == TurnPhase::TurnActive {
            return Err(EngineError::TurnInProgress);
        }

        debug!(%player, "turn started");

        let next = GameState {
            dice: PlayerPair::default(),
            current_turn: Some(player),
            turn_counter: Some(0),
            timer: TimerState {
                elapsed_seconds: 0,
                mode: ClockMode::Stopwatch,
            },
            ..*state
        };
        Ok(Transition::new(next)
            .with_clock(ClockCommand::StartStopwatch)
            .with_cue(Cue::TurnStarted))
    }

    /// End `player`'s turn and hand it to the opponent. The clock keeps
    /// running: it measures the whole match, not single turns.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoActiveTurn`] before the first turn,
    /// [`EngineError::NotPlayersTurn`] if `player` is not the current player.
    pub fn end_turn(state: &GameState, player: PlayerId) -> Result<Transition, EngineError> {
        let current = state.current_turn.ok_or(EngineError::NoActiveTurn)?;
        if current != player {
            return Err(EngineError::NotPlayersTurn {
                expected: current,
                actual: player,
            });
        }

        let counter = state.turn_counter.unwrap_or(0).saturating_add(1);
        debug!(%player, counter, "turn ended");

        let next = GameState {
            current_turn: Some(player.opponent()),
            turn_counter: Some(counter),
            ..*state
        };
        Ok(Transition::new(next).with_cue(Cue::TurnEnded))
    }

    /// Enter the final countdown: the clock switches to counting down from
    /// `seconds` and the turn counter restarts at zero. There is no way back
    /// to the stopwatch short of a reset; triggering it again restarts the
    /// countdown.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoActiveTurn`] before the first turn.
    pub fn start_final_countdown(
        state: &GameState,
        seconds: u32,
    ) -> Result<Transition, EngineError> {
        if state.phase() != TurnPhase::TurnActive {
            return Err(EngineError::NoActiveTurn);
        }

        debug!(seconds, "final countdown started");

        let next = GameState {
            turn_counter: Some(0),
            timer: TimerState {
                elapsed_seconds: seconds,
                mode: ClockMode::Countdown,
            },
            ..*state
        };
        Ok(Transition::new(next).with_clock(ClockCommand::StartCountdown(seconds)))
    }

    /// Return to the initial state from anywhere. `silent` only affects the
    /// published cue.
    #[must_use]
    pub fn reset(state: &GameState, silent: bool) -> Transition {
        debug!(silent, phase = ?state.phase(), "table reset");

        Transition {
            state: GameState::default(),
            clock: ClockCommand::Stop,
            cues: smallvec![Cue::Reset { silent }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryCell, MemorySelector};

    fn started(player: PlayerId) -> GameState {
        TurnEngine::start_turn(&GameState::new(), player).unwrap().state
    }

    #[test]
    fn test_roll_dice_sets_only_that_player() {
        let mut rng = GameRng::new(42);
        let state = TurnEngine::roll_dice(&GameState::new(), PlayerId::PlayerTwo, &mut rng)
            .unwrap()
            .state;

        assert!(state.die(PlayerId::PlayerTwo).is_some());
        assert_eq!(state.die(PlayerId::PlayerOne), None);
        assert_eq!(state.current_turn(), None);
        assert_eq!(state.phase(), TurnPhase::DiceRolled);
    }

    #[test]
    fn test_reroll_overwrites() {
        let mut rng = GameRng::new(3);
        let mut state = GameState::new();
        let mut rolls = Vec::new();

        for _ in 0..20 {
            let transition = TurnEngine::roll_dice(&state, PlayerId::PlayerOne, &mut rng).unwrap();
            assert_eq!(transition.cues.as_slice(), &[Cue::Dice]);
            state = transition.state;
            rolls.push(state.die(PlayerId::PlayerOne).unwrap());
        }

        assert_eq!(state.die(PlayerId::PlayerOne), rolls.last().copied());
        assert_eq!(state.die(PlayerId::PlayerTwo), None);
    }

    #[test]
    fn test_roll_dice_refused_during_turn() {
        let mut rng = GameRng::new(1);
        let state = started(PlayerId::PlayerOne);

        assert_eq!(
            TurnEngine::roll_dice(&state, PlayerId::PlayerOne, &mut rng),
            Err(EngineError::TurnInProgress)
        );
    }

    #[test]
    fn test_can_start_turn() {
        let mut state = GameState::new();
        assert!(!TurnEngine::can_start_turn(&state, PlayerId::PlayerOne));

        state.dice = PlayerPair::new(Some(15), None);
        assert!(!TurnEngine::can_start_turn(&state, PlayerId::PlayerOne));

        state.dice = PlayerPair::new(Some(15), Some(9));
        assert!(TurnEngine::can_start_turn(&state, PlayerId::PlayerOne));
        assert!(!TurnEngine::can_start_turn(&state, PlayerId::PlayerTwo));

        state.dice = PlayerPair::new(Some(9), Some(9));
        assert!(!TurnEngine::can_start_turn(&state, PlayerId::PlayerOne));
        assert!(!TurnEngine::can_start_turn(&state, PlayerId::PlayerTwo));

        state.dice = PlayerPair::new(Some(15), Some(9));
        state.turn_counter = Some(0);
        assert!(!TurnEngine::can_start_turn(&state, PlayerId::PlayerOne));
    }

    #[test]
    fn test_start_turn() {
        let mut state = GameState::new();
        state.dice = PlayerPair::new(Some(2), Some(18));

        let transition = TurnEngine::start_turn(&state, PlayerId::PlayerTwo).unwrap();

        assert_eq!(transition.state.current_turn(), Some(PlayerId::PlayerTwo));
        assert_eq!(transition.state.turn_counter(), Some(0));
        assert_eq!(transition.state.player_one_die(), None);
        assert_eq!(transition.state.player_two_die(), None);
        assert_eq!(transition.state.timer().mode, ClockMode::Stopwatch);
        assert_eq!(transition.state.timer().elapsed_seconds, 0);
        assert_eq!(transition.clock, ClockCommand::StartStopwatch);
        assert_eq!(transition.cues.as_slice(), &[Cue::TurnStarted]);
    }

    #[test]
    fn test_start_turn_refused_during_turn() {
        let state = started(PlayerId::PlayerOne);
        assert_eq!(
            TurnEngine::start_turn(&state, PlayerId::PlayerTwo),
            Err(EngineError::TurnInProgress)
        );
    }

    #[test]
    fn test_turn_cycle() {
        let state = started(PlayerId::PlayerOne);
        assert_eq!(state.turn_counter(), Some(0));

        let state = TurnEngine::end_turn(&state, PlayerId::PlayerOne).unwrap().state;
        assert_eq!(state.current_turn(), Some(PlayerId::PlayerTwo));
        assert_eq!(state.turn_counter(), Some(1));

        let transition = TurnEngine::end_turn(&state, PlayerId::PlayerTwo).unwrap();
        assert_eq!(transition.state.current_turn(), Some(PlayerId::PlayerOne));
        assert_eq!(transition.state.turn_counter(), Some(2));
        assert_eq!(transition.clock, ClockCommand::Keep);
        assert_eq!(transition.cues.as_slice(), &[Cue::TurnEnded]);
    }

    #[test]
    fn test_end_turn_preconditions() {
        assert_eq!(
            TurnEngine::end_turn(&GameState::new(), PlayerId::PlayerOne),
            Err(EngineError::NoActiveTurn)
        );

        let state = started(PlayerId::PlayerOne);
        assert_eq!(
            TurnEngine::end_turn(&state, PlayerId::PlayerTwo),
            Err(EngineError::NotPlayersTurn {
                expected: PlayerId::PlayerOne,
                actual: PlayerId::PlayerTwo,
            })
        );
    }

    #[test]
    fn test_final_countdown() {
        let state = started(PlayerId::PlayerOne);
        let state = TurnEngine::end_turn(&state, PlayerId::PlayerOne).unwrap().state;

        let transition = TurnEngine::start_final_countdown(&state, 300).unwrap();

        assert_eq!(transition.state.timer().mode, ClockMode::Countdown);
        assert_eq!(transition.state.timer().elapsed_seconds, 300);
        assert_eq!(transition.state.turn_counter(), Some(0));
        assert_eq!(transition.state.current_turn(), Some(PlayerId::PlayerTwo));
        assert_eq!(transition.clock, ClockCommand::StartCountdown(300));
        assert!(transition.cues.is_empty());
    }

    #[test]
    fn test_final_countdown_needs_turn() {
        assert_eq!(
            TurnEngine::start_final_countdown(&GameState::new(), 300),
            Err(EngineError::NoActiveTurn)
        );
    }

    #[test]
    fn test_reset_from_anywhere() {
        let mut rng = GameRng::new(5);
        let rolled = TurnEngine::roll_dice(&GameState::new(), PlayerId::PlayerOne, &mut rng)
            .unwrap()
            .state;
        let seven = MemoryCell::from_index(7).unwrap();
        let selected = MemorySelector::select(&started(PlayerId::PlayerTwo), seven, false);
        let countdown = TurnEngine::start_final_countdown(&selected, 300).unwrap().state;

        for state in [GameState::new(), rolled, selected, countdown] {
            let transition = TurnEngine::reset(&state, false);
            assert_eq!(transition.state, GameState::default());
            assert_eq!(transition.clock, ClockCommand::Stop);
            assert_eq!(transition.cues.as_slice(), &[Cue::Reset { silent: false }]);
        }

        assert_eq!(
            TurnEngine::reset(&countdown, true).cues.as_slice(),
            &[Cue::Reset { silent: true }]
        );
    }
}
