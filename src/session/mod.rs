//! The event API exposed to the UI.
//!
//! - [`Event`]: inbound taps and presses
//! - [`GameSession`]: applies events and ticks, keeps history
//! - [`SessionDriver`] / [`SessionHandle`]: run a session on a tokio task
//!   with a one-second ticker, publishing snapshots and cues
//!
//! ## Example
//!
//! ```
//! use memory_counter::core::{PlayerId, SessionConfig, Settings};
//! use memory_counter::session::{Event, GameSession};
//!
//! let mut session = GameSession::new(SessionConfig::new().with_seed(7), Settings::default())?;
//!
//! session.apply(Event::select_index(4, true)?)?;
//! assert_eq!(session.state().player_one_memory(), 5);
//! assert_eq!(session.state().player_two_memory(), -5);
//!
//! // Refused events leave the snapshot untouched.
//! assert!(session.apply(Event::EndTurn(PlayerId::PlayerOne)).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod driver;
mod event;
mod game_session;

pub use driver::{DriverError, SessionDriver, SessionHandle};
pub use event::{Event, EventRecord};
pub use game_session::{GameSession, Outcome};
