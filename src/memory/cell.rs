//! Memory grid cells.

use serde::{Deserialize, Serialize};

use crate::core::config::MEMORY_CELLS;
use crate::core::EngineError;

/// A tappable cell: the neutral "0" in the middle of the table, or one of
/// the ten numbered cells in a player's grid.
///
/// Only constructible through [`MemoryCell::from_index`] (or its
/// `TryFrom<i8>` and serde forms), so the index is always in `-1..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct MemoryCell {
    index: i8,
}

impl MemoryCell {
    /// The center "0" cell; clears both gauges.
    pub const NEUTRAL: MemoryCell = MemoryCell { index: -1 };

    /// Convert a raw grid index, where `-1` is the neutral cell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] for anything outside `-1..=9`.
    pub fn from_index(index: i8) -> Result<Self, EngineError> {
        let numbered = i8::try_from(MEMORY_CELLS)
            .map_or(false, |cells| (0..cells).contains(&index));
        if index == -1 || numbered {
            Ok(MemoryCell { index })
        } else {
            Err(EngineError::CellOutOfRange(index))
        }
    }

    /// Whether this is the shared neutral cell.
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        self.index < 0
    }

    /// The raw grid index, `-1` for the neutral cell.
    #[must_use]
    pub const fn index(self) -> i8 {
        self.index
    }

    /// Memory this cell is worth to the player who tapped it: `index + 1`,
    /// or 0 for the neutral cell.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.index as i32 + 1
    }

    /// All numbered cells, in index order.
    pub fn numbered() -> impl Iterator<Item = MemoryCell> {
        (0..MEMORY_CELLS).filter_map(|i| i8::try_from(i).ok()).map(|index| MemoryCell { index })
    }
}

impl Default for MemoryCell {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<i8> for MemoryCell {
    type Error = EngineError;

    fn try_from(index: i8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<MemoryCell> for i8 {
    fn from(cell: MemoryCell) -> Self {
        cell.index
    }
}
