//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The counter is strictly two-player: `PlayerOne` sits at the bottom of the
//! table, `PlayerTwo` across from them.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    PlayerOne,
    PlayerTwo,
}

impl PlayerId {
    /// Both players, in seating order.
    pub const ALL: [PlayerId; 2] = [PlayerId::PlayerOne, PlayerId::PlayerTwo];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::PlayerOne => 0,
            PlayerId::PlayerTwo => 1,
        }
    }

    /// The player sitting across the table.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::PlayerOne => PlayerId::PlayerTwo,
            PlayerId::PlayerTwo => PlayerId::PlayerOne,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage for exactly two players.
///
/// ## Example
///
/// ```
/// use memory_counter::core::{PlayerId, PlayerPair};
///
/// let mut dice: PlayerPair<Option<u8>> = PlayerPair::default();
/// dice[PlayerId::PlayerTwo] = Some(17);
///
/// assert_eq!(dice[PlayerId::PlayerOne], None);
/// assert_eq!(dice[PlayerId::PlayerTwo], Some(17));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from player one's and player two's values.
    pub const fn new(player_one: T, player_two: T) -> Self {
        Self {
            data: [player_one, player_two],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
