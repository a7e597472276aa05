//! Self-play loop for generating training data.
//!
//! Runs games using MCTS to generate trajectories for training
//! networks in an AlphaZero-style loop.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mcts::{MCTSConfig, MCTSSearch};
use crate::nn::StateEncoder;
use crate::rules::{Game, GameState};

use super::agent::Agent;
use super::trajectory::{Step, Trajectory};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of MCTS iterations per move.
    pub mcts_iterations: u32,

    /// Temperature for action selection during early game.
    /// Higher = more exploration.
    pub temperature: f64,

    /// Move number at which to switch to greedy (temperature = 0).
    /// 0 = always use temperature.
    pub temperature_threshold: usize,

    /// Maximum moves per game.
    pub max_moves: usize,

    /// MCTS exploration constant.
    pub exploration_constant: f64,

    /// Seed offset (combined with game index for unique seeds).
    pub seed_offset: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            mcts_iterations: 800,
            temperature: 1.0,
            temperature_threshold: 30,
            max_moves: 500,
            exploration_constant: std::f64::consts::SQRT_2,
            seed_offset: 0,
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mcts_iterations(mut self, iterations: u32) -> Self {
        self.mcts_iterations = iterations;
        self
    }

    pub fn with_temperature(mut self, temp: f64) -> Self {
        self.temperature = temp;
        self
    }

    /// Set the move threshold for switching to greedy.
    pub fn with_temperature_threshold(mut self, threshold: usize) -> Self {
        self.temperature_threshold = threshold;
        self
    }

    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Get the temperature for a given move number.
    pub fn effective_temperature(&self, move_number: usize) -> f64 {
        if self.temperature_threshold > 0 && move_number >= self.temperature_threshold {
            0.0
        } else {
            self.temperature
        }
    }
}

/// Play `state` to the end with one agent per seat.
///
/// `agents[i]` moves for player `i`. Stops early after `max_moves` moves or
/// when the agent to move has nothing to play.
pub fn play_match<S: GameState>(
    state: &mut S,
    agents: &mut [Box<dyn Agent<S>>],
    encoder: &dyn StateEncoder<S>,
    seed: u64,
    max_moves: usize,
) -> Trajectory<S::Action> {
    let mut trajectory = Trajectory::new(seed, state.player_count());

    for move_number in 0..max_moves {
        let Some(player) = state.current_player() else {
            break;
        };
        let Some(agent) = agents.get_mut(player.index()) else {
            break;
        };
        let Some(action) = agent.choose_action(state) else {
            break;
        };

        trajectory.push(Step::new(
            encoder.encode(state, player),
            agent.last_policy(),
            action.clone(),
            player,
            move_number,
        ));
        state.apply_action(&action);
    }

    trajectory.finish(state.returns(), state.result().and_then(|r| r.winner()));
    trajectory
}

/// Worker for running self-play games.
///
/// Both seats are played by the same MCTS configuration.
pub struct SelfPlayWorker<G: Game> {
    game: G,
    encoder: Box<dyn StateEncoder<G::State>>,
    config: SelfPlayConfig,
}

impl<G> SelfPlayWorker<G>
where
    G: Game,
    G::State: 'static,
{
    pub fn new(game: G, encoder: Box<dyn StateEncoder<G::State>>, config: SelfPlayConfig) -> Self {
        Self {
            game,
            encoder,
            config,
        }
    }

    /// Play a single game from the initial state (pure MCTS with random
    /// rollouts).
    pub fn play_game(&self, seed: u64) -> Trajectory<<G::State as GameState>::Action> {
        let mut state = self.game.new_initial_state();
        let mut trajectory = Trajectory::new(seed, state.player_count());

        for move_number in 0..self.config.max_moves {
            let Some(player) = state.current_player() else {
                break;
            };

            let mcts_config = MCTSConfig::default()
                .with_exploration(self.config.exploration_constant)
                .with_temperature(self.config.effective_temperature(move_number))
                .with_seed(seed.wrapping_add(move_number as u64));

            let mut search = MCTSSearch::new(mcts_config);
            let Some(action) = search.search(&state, self.config.mcts_iterations) else {
                break;
            };

            trajectory.push(Step::new(
                self.encoder.encode(&state, player),
                search.action_probabilities(),
                action.clone(),
                player,
                move_number,
            ));
            state.apply_action(&action);
        }

        trajectory.finish(state.returns(), state.result().and_then(|r| r.winner()));
        debug!(
            seed,
            moves = trajectory.game_length,
            winner = ?trajectory.winner,
            "self-play game finished"
        );
        trajectory
    }

    /// Play `count` games with seeds `seed_offset..seed_offset + count`.
    pub fn play_games(&self, count: usize) -> Vec<Trajectory<<G::State as GameState>::Action>> {
        (0..count)
            .map(|i| self.play_game(self.config.seed_offset.wrapping_add(i as u64)))
            .collect()
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn encoder(&self) -> &dyn StateEncoder<G::State> {
        self.encoder.as_ref()
    }

    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }
}
