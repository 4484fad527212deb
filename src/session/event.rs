//! Inbound events and the session history.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, PlayerId};
use crate::memory::MemoryCell;

/// A discrete input forwarded by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// A memory cell was tapped from one of the grids.
    SelectCell { cell: MemoryCell, by_player_one: bool },
    /// A player pressed their dice button.
    RollDice(PlayerId),
    /// The dice winner started the first turn.
    StartTurn(PlayerId),
    /// The current player ended their turn.
    EndTurn(PlayerId),
    /// Long press on the clock.
    StartFinalCountdown,
    /// Long press on the neutral cell, or the reset button.
    Reset { silent: bool },
    /// The user is leaving for the settings screen.
    OpenSettings,
}

impl Event {
    /// Build a `SelectCell` event from a raw grid index (`-1` is neutral).
    ///
    /// # Errors
    ///
    /// [`EngineError::CellOutOfRange`] for indices outside `-1..=9`.
    pub fn select_index(index: i8, by_player_one: bool) -> Result<Self, EngineError> {
        Ok(Event::SelectCell {
            cell: MemoryCell::from_index(index)?,
            by_player_one,
        })
    }
}

/// An accepted event, in the order the session applied it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the session history, starting at 0.
    pub sequence: u64,
    pub event: Event,
}

impl EventRecord {
    #[must_use]
    pub fn new(sequence: u64, event: Event) -> Self {
        Self { sequence, event }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_index() {
        assert_eq!(
            Event::select_index(4, true),
            Ok(Event::SelectCell {
                cell: MemoryCell::from_index(4).unwrap(),
                by_player_one: true,
            })
        );
        assert_eq!(
            Event::select_index(-1, false),
            Ok(Event::SelectCell {
                cell: MemoryCell::NEUTRAL,
                by_player_one: false,
            })
        );
        assert_eq!(
            Event::select_index(11, false),
            Err(EngineError::CellOutOfRange(11))
        );
    }

    #[test]
    fn test_event_record_serialization() {
        let record = EventRecord::new(3, Event::EndTurn(PlayerId::PlayerTwo));
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: EventRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_bad_cell() {
        for json in [
            r#"{"SelectCell":{"cell":255,"by_player_one":true}}"#,
            r#"{"SelectCell":{"cell":10,"by_player_one":false}}"#,
            r#"{"SelectCell":{"cell":{"Value":255},"by_player_one":true}}"#,
        ] {
            assert!(serde_json::from_str::<Event>(json).is_err(), "{json} accepted");
        }

        let event: Event =
            serde_json::from_str(r#"{"SelectCell":{"cell":9,"by_player_one":true}}"#).unwrap();
        assert_eq!(event, Event::select_index(9, true).unwrap());
    }
}
