//! Running a session on a tokio task.
//!
//! The driver task is the session's single thread of control: it applies
//! inbound commands and clock ticks one at a time, so the session needs no
//! lock. The ticker is an `Option<Interval>` that is replaced whenever the
//! clock is re-anchored and cleared when it stops, so at most one ticker
//! exists per session. Dropping the [`SessionHandle`] aborts the task.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval};
use tracing::{debug, info};

use super::event::Event;
use super::game_session::{GameSession, Outcome};
use crate::core::{EngineError, GameState, Settings};
use crate::cues::CueSink;
use crate::turn::ClockCommand;

/// Failure of a request sent through a [`SessionHandle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The driver task is gone.
    #[error("session driver has shut down")]
    Closed,

    /// The session refused the event.
    #[error(transparent)]
    Rejected(#[from] EngineError),
}

enum Command {
    Apply {
        event: Event,
        reply: Option<oneshot::Sender<Result<GameState, EngineError>>>,
    },
    UpdateSettings(Settings),
}

/// Spawns and runs sessions.
pub struct SessionDriver;

impl SessionDriver {
    /// Move `session` onto a new task. Cues are rendered through `sink`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S>(session: GameSession, sink: S) -> SessionHandle
    where
        S: CueSink + Send + 'static,
    {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (snapshots_tx, snapshots_rx) = watch::channel(*session.state());

        let task = tokio::spawn(run(session, sink, commands_rx, snapshots_tx));
        info!("session driver started");

        SessionHandle {
            commands: commands_tx,
            snapshots: snapshots_rx,
            task,
        }
    }
}

/// Owner-side handle of a running session.
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<GameState>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    /// Queue `event` without waiting for the result.
    ///
    /// # Errors
    ///
    /// [`DriverError::Closed`] if the driver is gone.
    pub fn send(&self, event: Event) -> Result<(), DriverError> {
        self.commands
            .send(Command::Apply { event, reply: None })
            .map_err(|_| DriverError::Closed)
    }

    /// Apply `event` and wait for the resulting snapshot.
    ///
    /// # Errors
    ///
    /// [`DriverError::Rejected`] if the session refused the event (its state
    /// is unchanged), [`DriverError::Closed`] if the driver is gone.
    pub async fn apply(&self, event: Event) -> Result<GameState, DriverError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(Command::Apply {
                event,
                reply: Some(reply_tx),
            })
            .map_err(|_| DriverError::Closed)?;

        Ok(reply_rx.await.map_err(|_| DriverError::Closed)??)
    }

    /// Hand new settings from the settings store to the session.
    ///
    /// # Errors
    ///
    /// [`DriverError::Closed`] if the driver is gone.
    pub fn update_settings(&self, settings: Settings) -> Result<(), DriverError> {
        self.commands
            .send(Command::UpdateSettings(settings))
            .map_err(|_| DriverError::Closed)
    }

    /// The latest published snapshot.
    #[must_use]
    pub fn state(&self) -> GameState {
        *self.snapshots.borrow()
    }

    /// A receiver that observes every published snapshot.
    #[must_use]
    pub fn snapshots(&self) -> watch::Receiver<GameState> {
        self.snapshots.clone()
    }

    /// Stop the driver and its ticker.
    pub fn shutdown(self) {
        // Drop does the work.
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.task.abort();
        debug!("session driver stopped");
    }
}

async fn run<S: CueSink>(
    mut session: GameSession,
    mut sink: S,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<GameState>,
) {
    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                match command {
                    Command::Apply { event, reply } => {
                        let now = Instant::now();
                        let result = session.apply_at(event, now);
                        if let Ok(outcome) = &result {
                            reschedule(&mut ticker, outcome.clock, now, &session);
                            publish(&session, outcome, &mut sink, &snapshots);
                        }
                        if let Some(reply) = reply {
                            let _ = reply.send(result.map(|outcome| outcome.state));
                        }
                    }
                    Command::UpdateSettings(settings) => session.update_settings(settings),
                }
            }
            now = next_tick(&mut ticker) => {
                if let Some(outcome) = session.tick(now) {
                    publish(&session, &outcome, &mut sink, &snapshots);
                }
            }
        }
    }

    info!("session driver finished");
}

/// Keep at most one ticker alive: drop the old one before creating the next.
fn reschedule(
    ticker: &mut Option<Interval>,
    command: ClockCommand,
    now: Instant,
    session: &GameSession,
) {
    match command {
        ClockCommand::Keep => {}
        ClockCommand::StartStopwatch | ClockCommand::StartCountdown(_) => {
            let period = session.config().tick_interval;
            *ticker = None;
            *ticker = Some(interval_at(now + period, period));
        }
        ClockCommand::Stop => *ticker = None,
    }
}

async fn next_tick(ticker: &mut Option<Interval>) -> Instant {
    match ticker {
        Some(ticker) => ticker.tick().await,
        None => std::future::pending().await,
    }
}

fn publish<S: CueSink>(
    session: &GameSession,
    outcome: &Outcome,
    sink: &mut S,
    snapshots: &watch::Sender<GameState>,
) {
    snapshots.send_replace(outcome.state);
    for &cue in &outcome.cues {
        sink.on_cue(cue, session.feedback(cue));
    }
}
