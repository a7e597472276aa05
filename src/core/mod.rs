//! Core types shared by every layer: players, move records, configuration
//! and deterministic randomness.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;

pub use action::ActionRecord;
pub use config::{GameConfig, GAME_NAME};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
