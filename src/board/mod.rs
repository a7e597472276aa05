//! Board state for a single game.
//!
//! A `GeodesicYState` owns one `Cell` per graph node and shares the
//! immutable graph with every other game of the same order. Moves are
//! applied in place; search clones the state to branch.

pub mod cell;
pub mod render;
pub mod state;

pub use cell::Cell;
pub use state::{GeodesicYState, Outcome, PLAYER_COUNT};
