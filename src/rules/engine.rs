//! Game and state traits consumed by generic drivers.
//!
//! A `Game` describes a configured game (sizes, utilities, how to start),
//! and a `GameState` is one position of it. Search and self-play only talk
//! to these traits.

use std::fmt::Debug;

use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// One position of a turn-based game.
///
/// ## Implementation Notes
///
/// - `apply_action` must be deterministic for MCTS
/// - `legal_actions` must be empty once `is_terminal` is true
/// - `current_player` is `None` once the game is over
/// - `Clone` must produce an independent branch
pub trait GameState: Clone {
    /// Move type.
    type Action: Clone + Eq + Debug;

    /// Number of players.
    fn player_count(&self) -> usize;

    /// Player to act, or `None` if the game is over.
    fn current_player(&self) -> Option<PlayerId>;

    /// Legal actions for the player to act.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply an action for the player to act.
    ///
    /// Illegal actions are a caller bug and may panic.
    fn apply_action(&mut self, action: &Self::Action);

    fn is_terminal(&self) -> bool;

    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn result(&self) -> Option<GameResult>;

    /// Per-player returns, zero for everyone while the game continues.
    fn returns(&self) -> PlayerMap<f64>;

    fn action_to_string(&self, player: PlayerId, action: &Self::Action) -> String;

    /// What `player` can observe, as text.
    fn observation_string(&self, player: PlayerId) -> String;

    /// Everything `player` knows, as text.
    fn information_state_string(&self, player: PlayerId) -> String;

    /// Flat observation tensor from `player`'s perspective.
    fn observation_tensor(&self, player: PlayerId) -> Vec<f32>;
}

/// A configured game: static properties and the initial state.
pub trait Game {
    type State: GameState;

    /// Size of the action id space.
    fn num_distinct_actions(&self) -> usize;

    fn num_players(&self) -> usize;

    fn min_utility(&self) -> f64;

    fn max_utility(&self) -> f64;

    /// Sum of all players' returns in any terminal state.
    fn utility_sum(&self) -> f64;

    /// Upper bound on the number of actions in one game.
    fn max_game_length(&self) -> usize;

    /// Shape of `GameState::observation_tensor`.
    fn observation_tensor_shape(&self) -> Vec<usize>;

    fn new_initial_state(&self) -> Self::State;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.winner(), Some(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
        assert_eq!(draw.winner(), None);
    }
}
