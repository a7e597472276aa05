//! Traits for plugging games into generic drivers.
//!
//! Games implement `Game` and `GameState` to define:
//! - Legal actions for each position
//! - How actions modify state
//! - Win/loss conditions and returns
//!
//! Search and self-play call into these traits but never interpret
//! game-specific concepts directly.

pub mod engine;

pub use engine::{Game, GameResult, GameState};
