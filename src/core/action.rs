//! Move history records.
//!
//! A game is reconstructible only by replaying its actions from the initial
//! state, so states keep an ordered record of who played what.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// One applied action with the player who made it.
///
/// Used for:
/// - Information-state strings (the full move history)
/// - Replays and debugging
/// - Self-play trajectories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord<A> {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: A,

    /// Ply number, starting at 0 for the first move of the game.
    pub ply: u32,
}

impl<A> ActionRecord<A> {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: A, ply: u32) -> Self {
        Self { player, action, ply }
    }
}
