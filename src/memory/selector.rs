//! Memory selection rule.
//!
//! The two gauges are always equal and opposite: a player paying memory
//! lowers their own gauge and raises the opponent's by the same amount.
//! Tapping a cell therefore sets both gauges at once.

use tracing::trace;

use super::cell::MemoryCell;
use crate::core::{GameState, PlayerId, PlayerPair};

/// Converts grid taps into symmetric memory values.
///
/// Stateless; every method maps a snapshot to a new snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemorySelector;

impl MemorySelector {
    /// Apply a tap on `cell`, made from player one's grid when
    /// `by_player_one` is true.
    ///
    /// - Neutral: both gauges become 0.
    /// - Cell `i`: the tapping player gets `i + 1`, the opponent `-(i + 1)`.
    ///
    /// Any pending die rolls are discarded.
    #[must_use]
    pub fn select(state: &GameState, cell: MemoryCell, by_player_one: bool) -> GameState {
        let value = cell.value();
        let memory = if by_player_one {
            PlayerPair::new(value, -value)
        } else {
            PlayerPair::new(-value, value)
        };

        trace!(
            cell = cell.index(),
            by_player_one,
            player_one = memory[PlayerId::PlayerOne],
            "memory selected"
        );

        GameState {
            memory,
            dice: PlayerPair::default(),
            selected: cell,
            selected_by_player_one: by_player_one,
            ..*state
        }
    }

    /// Whether `cell` should be drawn highlighted in the grid belonging to
    /// player one (`grid_of_player_one`) or player two.
    ///
    /// A numbered cell only lights up in the grid it was tapped from. The
    /// neutral cell is shared and lights up whenever it is selected.
    #[must_use]
    pub fn is_highlighted(state: &GameState, cell: MemoryCell, grid_of_player_one: bool) -> bool {
        if state.selected != cell {
            return false;
        }
        cell.is_neutral() || state.selected_by_player_one == grid_of_player_one
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(index: i8) -> MemoryCell {
        MemoryCell::from_index(index).unwrap()
    }

    #[test]
    fn test_select_by_player_one() {
        for cell in MemoryCell::numbered() {
            let state = MemorySelector::select(&GameState::new(), cell, true);
            let value = cell.index() as i32 + 1;

            assert_eq!(state.player_one_memory(), value);
            assert_eq!(state.player_two_memory(), -value);
        }
    }

    #[test]
    fn test_select_by_player_two() {
        for cell in MemoryCell::numbered() {
            let state = MemorySelector::select(&GameState::new(), cell, false);
            let value = cell.index() as i32 + 1;

            assert_eq!(state.player_two_memory(), value);
            assert_eq!(state.player_one_memory(), -value);
        }
    }

    #[test]
    fn test_neutral_clears() {
        let state = MemorySelector::select(&GameState::new(), cell(6), true);
        let cleared = MemorySelector::select(&state, MemoryCell::NEUTRAL, true);

        assert_eq!(cleared.player_one_memory(), 0);
        assert_eq!(cleared.player_two_memory(), 0);
        assert_eq!(cleared.selected_index(), -1);
    }

    #[test]
    fn test_select_clears_dice() {
        let mut state = GameState::new();
        state.dice = PlayerPair::new(Some(12), Some(4));

        let selected = MemorySelector::select(&state, cell(0), false);

        assert_eq!(selected.die(PlayerId::PlayerOne), None);
        assert_eq!(selected.die(PlayerId::PlayerTwo), None);
    }

    #[test]
    fn test_select_keeps_turn_and_clock() {
        let mut state = GameState::new();
        state.current_turn = Some(PlayerId::PlayerTwo);
        state.turn_counter = Some(3);

        let selected = MemorySelector::select(&state, cell(2), true);

        assert_eq!(selected.current_turn(), Some(PlayerId::PlayerTwo));
        assert_eq!(selected.turn_counter(), Some(3));
        assert_eq!(selected.timer(), state.timer());
    }

    #[test]
    fn test_highlight() {
        let state = MemorySelector::select(&GameState::new(), cell(3), false);

        assert!(MemorySelector::is_highlighted(&state, cell(3), false));
        assert!(!MemorySelector::is_highlighted(&state, cell(3), true));
        assert!(!MemorySelector::is_highlighted(&state, cell(4), false));
        assert!(!MemorySelector::is_highlighted(&state, MemoryCell::NEUTRAL, false));

        let cleared = MemorySelector::select(&state, MemoryCell::NEUTRAL, false);
        assert!(MemorySelector::is_highlighted(&cleared, MemoryCell::NEUTRAL, true));
        assert!(MemorySelector::is_highlighted(&cleared, MemoryCell::NEUTRAL, false));
    }
}
