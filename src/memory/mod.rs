//! Memory gauges and the selection grid.
//!
//! Each player has a grid of ten numbered cells; a shared neutral cell sits
//! between the grids. Orienting player two's grid (which is drawn rotated)
//! is a presentation concern: callers pass the already-normalized 0..=9
//! index.

mod cell;
mod selector;

pub use cell::MemoryCell;
pub use selector::MemorySelector;
