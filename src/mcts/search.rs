//! Core MCTS search algorithm.
//!
//! Plain UCT for perfect-information games: every node is expanded with all
//! legal actions of the player to move, children are selected with the
//! selection policy from that player's perspective, and leaves are scored by
//! the simulation policy.

use std::time::Instant;

use tracing::debug;

use crate::core::{GameRng, PlayerMap};
use crate::rules::GameState;

use super::config::MCTSConfig;
use super::node::{Edge, MCTSNode, TreeId};
use super::policy::{draw_rewards, result_to_rewards, RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Generic over the game state type. Owns the search tree and
/// configuration, and provides methods to run searches.
pub struct MCTSSearch<S: GameState> {
    config: MCTSConfig,

    tree: MCTSTree<S::Action>,

    /// RNG for expansion order, rollouts and temperature sampling.
    rng: GameRng,

    selection: Box<dyn SelectionPolicy<S::Action>>,

    simulation: Box<dyn SimulationPolicy<S>>,

    stats: SearchStats,
}

impl<S: GameState + 'static> MCTSSearch<S> {
    /// Create a new MCTS search context.
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            tree: MCTSTree::with_capacity(None, 0, config.max_nodes.min(1 << 16)),
            config,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomSimulation),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    #[must_use]
    pub fn with_selection<P: SelectionPolicy<S::Action> + 'static>(mut self, selection: P) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    #[must_use]
    pub fn with_simulation<P: SimulationPolicy<S> + 'static>(mut self, simulation: P) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Run MCTS search for a given number of iterations.
    ///
    /// Returns the chosen action for the player to move, or `None` if the
    /// game is already over.
    pub fn search(&mut self, state: &S, iterations: u32) -> Option<S::Action> {
        let start = Instant::now();
        self.stats.reset();

        self.tree = MCTSTree::with_capacity(
            state.current_player(),
            state.player_count(),
            self.config.max_nodes.min(1 << 16),
        );

        let root = self.tree.root();
        self.expand_node(root, state);

        if self.tree.get(root).is_terminal || self.tree.get(root).edges.is_empty() {
            return None;
        }

        // No choice to make.
        if self.tree.get(root).edges.len() == 1 {
            return Some(self.tree.get(root).edges[0].action.clone());
        }

        for _ in 0..iterations {
            let mut sim_state = state.clone();
            self.iteration(&mut sim_state);
            self.stats.iterations += 1;

            if self.tree.len() >= self.config.max_nodes {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            iterations = self.stats.iterations,
            simulations = self.stats.simulations,
            nodes = self.tree.len(),
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            "search finished"
        );

        self.best_action()
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, state: &mut S) {
        let mut path: Vec<(TreeId, usize)> = Vec::new();
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);

            if node.is_terminal {
                let rewards = node
                    .terminal_reward
                    .clone()
                    .unwrap_or_else(|| draw_rewards(self.tree.player_count()));
                self.stats.terminal_hits += 1;
                self.backpropagate(&path, &rewards);
                return;
            }

            if self.config.max_depth > 0 && u32::from(node.depth) >= self.config.max_depth {
                let rewards = draw_rewards(self.tree.player_count());
                self.backpropagate(&path, &rewards);
                return;
            }

            let Some(to_move) = node.to_move.filter(|_| !node.edges.is_empty()) else {
                // Stuck without moves and without a result.
                let rewards = draw_rewards(self.tree.player_count());
                self.backpropagate(&path, &rewards);
                return;
            };

            if node.has_unexpanded() {
                let edge_idx = self.select_unexpanded(current);
                path.push((current, edge_idx));

                let action = self.tree.get(current).edges[edge_idx].action.clone();
                state.apply_action(&action);
                self.expand_child(current, edge_idx, state);

                let rewards = self.simulate(state);
                self.backpropagate(&path, &rewards);
                return;
            }

            let edge_idx = self.selection.select(node, to_move, &self.config);
            path.push((current, edge_idx));

            let edge = &self.tree.get(current).edges[edge_idx];
            let (action, child) = (edge.action.clone(), edge.child);
            state.apply_action(&action);
            current = child;
        }
    }

    /// Populate a node's edges, or mark it terminal.
    fn expand_node(&mut self, id: TreeId, state: &S) {
        let player_count = state.player_count();

        if state.is_terminal() {
            let rewards = state
                .result()
                .map_or_else(|| draw_rewards(player_count), |r| result_to_rewards(&r, player_count));
            let node = self.tree.get_mut(id);
            node.is_terminal = true;
            node.terminal_reward = Some(rewards);
            return;
        }

        let node = self.tree.get_mut(id);
        node.edges
            .extend(state.legal_actions().into_iter().map(|a| Edge::new(a, player_count)));

        self.stats.nodes_expanded += 1;
    }

    /// Pick a random unexpanded edge.
    fn select_unexpanded(&mut self, id: TreeId) -> usize {
        let unexpanded: Vec<usize> = self.tree.get(id).unexpanded_edges().collect();
        self.rng.choose(&unexpanded).copied().unwrap_or(0)
    }

    /// Create and expand the child behind `edge_idx`.
    fn expand_child(&mut self, parent_id: TreeId, edge_idx: usize, state: &S) -> TreeId {
        let depth = self.tree.get(parent_id).depth + 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let child = MCTSNode::new(parent_id, edge_idx as u16, state.current_player(), depth);
        let child_id = self.tree.alloc(child);
        self.tree.get_mut(parent_id).edges[edge_idx].child = child_id;

        self.expand_node(child_id, state);
        child_id
    }

    /// Average the rewards of `config.rollouts` playouts from `state`.
    fn simulate(&mut self, state: &S) -> PlayerMap<f64> {
        let mut sim_rng = self.rng.fork();
        let rollouts = self.config.rollouts.max(1);
        let mut totals = PlayerMap::with_value(state.player_count(), 0.0);

        for _ in 0..rollouts {
            let mut playout = state.clone();
            let rewards = self
                .simulation
                .simulate(&mut playout, &mut sim_rng, self.config.max_depth);
            for (player, reward) in rewards.iter() {
                totals[player] += reward;
            }
            self.stats.simulations += 1;
        }

        let scale = f64::from(rollouts);
        PlayerMap::new(totals.player_count(), |p| totals[p] / scale)
    }

    /// Add `rewards` to every edge on the path.
    fn backpropagate(&mut self, path: &[(TreeId, usize)], rewards: &PlayerMap<f64>) {
        if path.is_empty() {
            self.tree.root_node_mut().visits += 1;
            return;
        }

        for &(id, edge_idx) in path.iter().rev() {
            let node = self.tree.get_mut(id);
            node.visits += 1;

            let edge = &mut node.edges[edge_idx];
            edge.visits += 1;
            for (player, reward) in rewards.iter() {
                edge.total_reward[player] += reward;
            }
        }
    }

    /// Choose the move to play from the root.
    fn best_action(&mut self) -> Option<S::Action> {
        let root = self.tree.root_node();

        if self.config.temperature <= 0.0 {
            return root.best_edge_by_visits().map(|e| e.action.clone());
        }

        // Visits are scaled into [0, 1] first so small temperatures cannot
        // overflow the weights.
        let max_visits = root.edges.iter().map(|e| e.visits).max().unwrap_or(0);
        if max_visits == 0 {
            return root.best_edge_by_visits().map(|e| e.action.clone());
        }
        let exponent = 1.0 / self.config.temperature;
        let weights: Vec<f64> = root
            .edges
            .iter()
            .map(|e| (f64::from(e.visits) / f64::from(max_visits)).powf(exponent))
            .collect();

        match self.rng.choose_weighted(&weights) {
            Some(idx) => Some(root.edges[idx].action.clone()),
            None => root.best_edge_by_visits().map(|e| e.action.clone()),
        }
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Tree from the most recent search.
    #[must_use]
    pub fn tree(&self) -> &MCTSTree<S::Action> {
        &self.tree
    }

    /// Get action visit counts from root (for training).
    pub fn action_visits(&self) -> Vec<(S::Action, u32)> {
        self.tree
            .root_node()
            .edges
            .iter()
            .map(|e| (e.action.clone(), e.visits))
            .collect()
    }

    /// Get action probabilities from root (for training).
    ///
    /// Visit counts normalized to sum to 1. Uniform when nothing was
    /// visited.
    pub fn action_probabilities(&self) -> Vec<(S::Action, f64)> {
        let root = self.tree.root_node();
        let total: u32 = root.edges.iter().map(|e| e.visits).sum();

        if total == 0 {
            let uniform = 1.0 / root.edges.len().max(1) as f64;
            return root
                .edges
                .iter()
                .map(|e| (e.action.clone(), uniform))
                .collect();
        }

        root.edges
            .iter()
            .map(|e| (e.action.clone(), f64::from(e.visits) / f64::from(total)))
            .collect()
    }

    #[must_use]
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}
