//! Cue signals.
//!
//! A cue records that something happened at the table. The engine never
//! plays audio or drives a vibration motor; it publishes cues and a
//! collaborator renders them.

use serde::{Deserialize, Serialize};

/// Something happened that a collaborator may want to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// A memory cell was tapped.
    Tap,
    /// A die was rolled.
    Dice,
    /// The first turn started and the stopwatch began.
    TurnStarted,
    /// A player ended their turn.
    TurnEnded,
    /// The table was cleared. `silent` suppresses the audible part.
    Reset { silent: bool },
    /// The final countdown reached zero.
    CountdownExpired,
    /// The user left the match view for the settings screen.
    SettingsOpened,
}

impl Cue {
    /// Short label for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Cue::Tap => "tap",
            Cue::Dice => "dice",
            Cue::TurnStarted => "turn_started",
            Cue::TurnEnded => "turn_ended",
            Cue::Reset { .. } => "reset",
            Cue::CountdownExpired => "countdown_expired",
            Cue::SettingsOpened => "settings_opened",
        }
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names() {
        assert_eq!(Cue::Reset { silent: true }.to_string(), "reset");
        assert_eq!(Cue::CountdownExpired.name(), "countdown_expired");
    }

    #[test]
    fn test_cue_serialization() {
        let cue = Cue::Reset { silent: true };
        let json = serde_json::to_string(&cue).unwrap();
        let deserialized: Cue = serde_json::from_str(&json).unwrap();
        assert_eq!(cue, deserialized);
    }
}
