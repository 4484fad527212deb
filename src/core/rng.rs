//! Dice randomness.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls, so sessions can
//!   be replayed in tests
//! - **Seedable from entropy**: Real tables get a fresh seed per session
//!
//! ```
//! use memory_counter::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_die();
//! assert!((1..=20).contains(&roll));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::{DIE_MAX, DIE_MIN};

/// Deterministic RNG used for die rolls.
///
/// Uses ChaCha8 for speed while keeping rolls uniform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a single die, uniform over `[DIE_MIN, DIE_MAX]` inclusive.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(DIE_MIN..=DIE_MAX)
    }
}
