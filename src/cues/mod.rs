//! Cue signals and their feedback mapping.
//!
//! ## Key Components
//!
//! - [`Cue`]: a discrete "this happened" signal published by the session
//! - [`Feedback`]: the sound and haptic a cue maps to, after the player's
//!   toggles are applied
//! - [`CueSink`]: the collaborator that owns audio/haptic resources
//!
//! ```
//! use memory_counter::core::Settings;
//! use memory_counter::cues::{Cue, Feedback, Sound};
//!
//! let settings = Settings::default();
//! let feedback = Feedback::for_cue(Cue::Dice, &settings);
//! assert_eq!(feedback.sound, Some(Sound::Dice));
//! ```

mod cue;
mod feedback;

pub use cue::Cue;
pub use feedback::{
    CueSink, Feedback, Haptic, ImpactStyle, NotificationKind, NullSink, RecordingSink, Sound,
};
