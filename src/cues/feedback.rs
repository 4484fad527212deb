//! Mapping cues to sound and haptic feedback.
//!
//! `Feedback::for_cue` decides what a cue should sound and feel like given
//! the player's toggles. A `CueSink` owns the actual audio and haptic
//! resources and renders it.

use serde::{Deserialize, Serialize};

use super::cue::Cue;
use crate::core::Settings;

/// Sound clips a collaborator is expected to provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    Tap,
    Dice,
    /// Shared by turn start, reset and countdown expiry.
    StartEnd,
}

/// Strength of an impact haptic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Kind of a notification haptic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// Haptic pattern to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Haptic {
    Impact(ImpactStyle),
    Notification(NotificationKind),
}

/// What a collaborator should render for one cue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    pub sound: Option<Sound>,
    pub haptic: Option<Haptic>,
}

impl Feedback {
    /// Feedback for `cue`, with sound and haptics dropped when the
    /// corresponding toggle is off.
    #[must_use]
    pub fn for_cue(cue: Cue, settings: &Settings) -> Self {
        let (sound, haptic) = match cue {
            Cue::Tap => (
                Some(Sound::Tap),
                Some(Haptic::Impact(ImpactStyle::Heavy)),
            ),
            Cue::Dice => (Some(Sound::Dice), None),
            Cue::TurnStarted => (
                Some(Sound::StartEnd),
                Some(Haptic::Notification(NotificationKind::Success)),
            ),
            Cue::TurnEnded => (
                Some(Sound::Tap),
                Some(Haptic::Notification(NotificationKind::Success)),
            ),
            Cue::Reset { silent } => (
                (!silent).then_some(Sound::StartEnd),
                Some(Haptic::Notification(NotificationKind::Warning)),
            ),
            Cue::CountdownExpired => (Some(Sound::StartEnd), None),
            Cue::SettingsOpened => (None, Some(Haptic::Impact(ImpactStyle::Heavy))),
        };

        Self {
            sound: sound.filter(|_| settings.sound_on),
            haptic: haptic.filter(|_| settings.haptics_on),
        }
    }

    /// Nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sound.is_none() && self.haptic.is_none()
    }
}

/// Renders cues. Implemented by whatever owns the audio players and the
/// haptic engine.
pub trait CueSink {
    /// Called once per published cue, in publication order.
    fn on_cue(&mut self, cue: Cue, feedback: Feedback);
}

/// Discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl CueSink for NullSink {
    fn on_cue(&mut self, _cue: Cue, _feedback: Feedback) {}
}

/// Collects cues in memory; handy for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub received: Vec<(Cue, Feedback)>,
}

impl RecordingSink {
    /// The cues received so far, without their feedback.
    #[must_use]
    pub fn cues(&self) -> Vec<Cue> {
        self.received.iter().map(|(cue, _)| *cue).collect()
    }
}

impl CueSink for RecordingSink {
    fn on_cue(&mut self, cue: Cue, feedback: Feedback) {
        self.received.push((cue, feedback));
    }
}

impl<F> CueSink for F
where
    F: FnMut(Cue, Feedback),
{
    fn on_cue(&mut self, cue: Cue, feedback: Feedback) {
        self(cue, feedback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_feedback() {
        let feedback = Feedback::for_cue(Cue::Tap, &Settings::default());
        assert_eq!(feedback.sound, Some(Sound::Tap));
        assert_eq!(feedback.haptic, Some(Haptic::Impact(ImpactStyle::Heavy)));
    }

    #[test]
    fn test_silent_reset_keeps_haptic() {
        let settings = Settings::default();

        let loud = Feedback::for_cue(Cue::Reset { silent: false }, &settings);
        assert_eq!(loud.sound, Some(Sound::StartEnd));

        let silent = Feedback::for_cue(Cue::Reset { silent: true }, &settings);
        assert_eq!(silent.sound, None);
        assert_eq!(
            silent.haptic,
            Some(Haptic::Notification(NotificationKind::Warning))
        );
    }

    #[test]
    fn test_toggles_suppress_feedback() {
        let settings = Settings::default().with_sound(false).with_haptics(false);

        for cue in [
            Cue::Tap,
            Cue::Dice,
            Cue::TurnStarted,
            Cue::TurnEnded,
            Cue::Reset { silent: false },
            Cue::CountdownExpired,
            Cue::SettingsOpened,
        ] {
            assert!(Feedback::for_cue(cue, &settings).is_empty(), "{cue}");
        }
    }

    #[test]
    fn test_sound_only() {
        let settings = Settings::default().with_haptics(false);
        let feedback = Feedback::for_cue(Cue::TurnStarted, &settings);

        assert_eq!(feedback.sound, Some(Sound::StartEnd));
        assert_eq!(feedback.haptic, None);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |cue: Cue, _feedback: Feedback| seen.push(cue);
            sink.on_cue(Cue::Dice, Feedback::default());
        }
        assert_eq!(seen, vec![Cue::Dice]);
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::default();
        sink.on_cue(Cue::Tap, Feedback::default());
        sink.on_cue(Cue::TurnEnded, Feedback::default());

        assert_eq!(sink.cues(), vec![Cue::Tap, Cue::TurnEnded]);
    }
}
