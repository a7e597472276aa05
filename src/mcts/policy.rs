//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to choose which child to explore (UCB1)
//! - `SimulationPolicy`: How to run rollouts (uniform random)

use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::rules::{GameResult, GameState};

use super::config::MCTSConfig;
use super::node::MCTSNode;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy<A>: Send + Sync {
    /// Select the edge to follow from a fully expanded node.
    ///
    /// `player` is the player to move at `node`; rewards are read from
    /// their perspective.
    fn select(&self, node: &MCTSNode<A>, player: PlayerId, config: &MCTSConfig) -> usize;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high reward) with exploration (low visits).
/// Formula: Q(a) + c * sqrt(ln(N) / n(a))
#[derive(Clone, Copy, Debug, Default)]
pub struct UCB1;

impl<A> SelectionPolicy<A> for UCB1 {
    fn select(&self, node: &MCTSNode<A>, player: PlayerId, config: &MCTSConfig) -> usize {
        let ln_parent = f64::from(node.visits.max(1)).ln();

        node.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| {
                let exploitation = edge.mean_reward(player);
                let exploration = if edge.visits == 0 {
                    f64::INFINITY
                } else {
                    config.exploration_constant * (ln_parent / f64::from(edge.visits)).sqrt()
                };
                (i, exploitation + exploration)
            })
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map_or(0, |(i, _)| i)
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf node.
pub trait SimulationPolicy<S: GameState>: Send + Sync {
    /// Play out `state`, returning rewards per player.
    ///
    /// The state is consumed by the playout.
    fn simulate(&self, state: &mut S, rng: &mut GameRng, max_depth: u32) -> PlayerMap<f64>;
}

/// Plays uniformly random legal actions until the game ends.
///
/// Hitting `max_depth` (when non-zero) scores the playout as a draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSimulation;

impl<S: GameState> SimulationPolicy<S> for RandomSimulation {
    fn simulate(&self, state: &mut S, rng: &mut GameRng, max_depth: u32) -> PlayerMap<f64> {
        let player_count = state.player_count();
        let mut depth = 0;

        loop {
            if let Some(result) = state.result() {
                return result_to_rewards(&result, player_count);
            }

            if max_depth > 0 && depth >= max_depth {
                return draw_rewards(player_count);
            }

            let actions = state.legal_actions();
            let Some(action) = rng.choose(&actions) else {
                return draw_rewards(player_count);
            };
            state.apply_action(action);

            depth += 1;
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert a game result to per-player rewards: 1 for a win, 0 for a loss,
/// 0.5 each for a draw.
pub fn result_to_rewards(result: &GameResult, player_count: usize) -> PlayerMap<f64> {
    PlayerMap::new(player_count, |player| match result {
        GameResult::Winner(winner) if *winner == player => 1.0,
        GameResult::Winner(_) => 0.0,
        GameResult::Draw => 0.5,
    })
}

/// Rewards for a playout with no decided result.
pub fn draw_rewards(player_count: usize) -> PlayerMap<f64> {
    PlayerMap::with_value(player_count, 0.5)
}
