//! A single match at the table.
//!
//! `GameSession` owns the current snapshot together with everything a
//! snapshot cannot hold: the clock anchor, the dice RNG, the consumed
//! settings and the event history. It is synchronous and single-threaded;
//! `SessionDriver` puts it on a task with a real ticker.

use im::Vector;
use smallvec::SmallVec;
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};

use super::event::{Event, EventRecord};
use crate::core::{ConfigError, EngineError, GameRng, GameState, SessionConfig, Settings};
use crate::cues::{Cue, Feedback};
use crate::memory::MemorySelector;
use crate::turn::{Clock, ClockCommand, Transition, TurnEngine};

/// What an accepted event or tick produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Snapshot to publish.
    pub state: GameState,
    /// Cues to publish, in order.
    pub cues: SmallVec<[Cue; 2]>,
    /// What happened to the clock; the driver uses it to manage the ticker.
    pub clock: ClockCommand,
}

/// One match: snapshot, clock, dice and history.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    settings: Settings,
    state: GameState,
    clock: Clock,
    rng: GameRng,
    history: Vector<EventRecord>,
    next_sequence: u64,
}

impl GameSession {
    /// Create a session at the initial state.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`SessionConfig::validate`].
    pub fn new(config: SessionConfig, settings: Settings) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), countdown = config.countdown_seconds, "session created");

        Ok(Self {
            config,
            settings,
            state: GameState::default(),
            clock: Clock::stopped(),
            rng,
            history: Vector::new(),
            next_sequence: 0,
        })
    }

    /// The latest snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Accepted events of the current match, starting at the last reset.
    /// Sequence numbers keep counting across resets. Cloning is O(1).
    #[must_use]
    pub fn history(&self) -> Vector<EventRecord> {
        self.history.clone()
    }

    /// Replace the settings after the settings store changed them.
    pub fn update_settings(&mut self, settings: Settings) {
        debug!("settings updated");
        self.settings = settings;
    }

    /// Feedback for `cue` under the current settings.
    #[must_use]
    pub fn feedback(&self, cue: Cue) -> Feedback {
        Feedback::for_cue(cue, &self.settings)
    }

    /// Apply `event` now.
    ///
    /// # Errors
    ///
    /// See [`GameSession::apply_at`].
    pub fn apply(&mut self, event: Event) -> Result<Outcome, EngineError> {
        self.apply_at(event, Instant::now())
    }

    /// Apply `event` as if it happened at `now` (used to anchor the
    /// stopwatch).
    ///
    /// # Errors
    ///
    /// Returns the [`EngineError`] of a refused transition. The session is
    /// left exactly as it was.
    pub fn apply_at(&mut self, event: Event, now: Instant) -> Result<Outcome, EngineError> {
        let transition = match self.transition(event) {
            Ok(transition) => transition,
            Err(err) => {
                warn!(?event, phase = ?self.state.phase(), %err, "event refused");
                return Err(err);
            }
        };

        if matches!(event, Event::Reset { .. } | Event::OpenSettings) {
            self.history.clear();
        }
        self.history.push_back(EventRecord::new(self.next_sequence, event));
        self.next_sequence += 1;

        Ok(self.commit(transition, now))
    }

    /// Advance the clock by one tick observed at `now`.
    ///
    /// Returns `None` when the clock is stopped.
    pub fn tick(&mut self, now: Instant) -> Option<Outcome> {
        if !self.clock.is_running() {
            return None;
        }

        let tick = self.clock.tick(now);
        self.clock = tick.clock;
        self.state = self.state.with_timer(self.clock.timer());
        trace!(elapsed = self.clock.elapsed_seconds(), "clock tick");

        let mut cues = SmallVec::new();
        if tick.expired {
            info!("final countdown expired");
            cues.push(Cue::CountdownExpired);
        }

        Some(Outcome {
            state: self.state,
            cues,
            clock: ClockCommand::Keep,
        })
    }

    fn transition(&mut self, event: Event) -> Result<Transition, EngineError> {
        let state = &self.state;
        match event {
            Event::SelectCell { cell, by_player_one } => Ok(Transition::new(
                MemorySelector::select(state, cell, by_player_one),
            )
            .with_cue(Cue::Tap)),
            Event::RollDice(player) => TurnEngine::roll_dice(state, player, &mut self.rng),
            Event::StartTurn(player) => TurnEngine::start_turn(state, player),
            Event::EndTurn(player) => TurnEngine::end_turn(state, player),
            Event::StartFinalCountdown => {
                TurnEngine::start_final_countdown(state, self.config.countdown_seconds)
            }
            Event::Reset { silent } => Ok(TurnEngine::reset(state, silent)),
            Event::OpenSettings => {
                let reset = TurnEngine::reset(state, true);
                let mut cues = SmallVec::new();
                cues.push(Cue::SettingsOpened);
                cues.extend(reset.cues);
                Ok(Transition { cues, ..reset })
            }
        }
    }

    fn commit(&mut self, transition: Transition, now: Instant) -> Outcome {
        self.clock = match transition.clock {
            ClockCommand::Keep => self.clock,
            ClockCommand::StartStopwatch => Clock::start_stopwatch(now),
            ClockCommand::StartCountdown(seconds) => Clock::start_countdown(seconds),
            ClockCommand::Stop => Clock::stopped(),
        };
        self.state = transition.state.with_timer(self.clock.timer());

        debug!(
            phase = ?self.state.phase(),
            player_one_memory = self.state.player_one_memory(),
            cues = transition.cues.len(),
            "event applied"
        );

        Outcome {
            state: self.state,
            cues: transition.cues,
            clock: transition.clock,
        }
    }
}
