//! Geodesic Y game definition and its `GameState` implementation.

use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::board::{GeodesicYState, PLAYER_COUNT};
use crate::core::{GameConfig, PlayerId, PlayerMap};
use crate::error::ConfigError;
use crate::graph::{shared_graph, GeodesicGraph, Node};
use crate::nn::{GeodesicYEncoder, StateEncoder, CELL_STATES};
use crate::rules::{Game, GameResult, GameState};

/// A configured Geodesic Y game.
///
/// Holds the shared graph for its board order, so every state it creates
/// points at the same adjacency data.
#[derive(Clone, Debug)]
pub struct GeodesicYGame {
    config: GameConfig,
    graph: Arc<GeodesicGraph>,
}

impl GeodesicYGame {
    /// Create a game from a configuration, rejecting invalid parameters.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let graph = shared_graph(config.board_order)?;
        debug!(%config, cells = graph.len(), "created geodesic y game");
        Ok(Self { config, graph })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn graph(&self) -> &Arc<GeodesicGraph> {
        &self.graph
    }

    /// Encoder matching this game's board.
    #[must_use]
    pub fn encoder(&self) -> GeodesicYEncoder {
        GeodesicYEncoder::new(self.config.board_order)
    }
}

impl Default for GeodesicYGame {
    fn default() -> Self {
        match Self::new(GameConfig::default()) {
            Ok(game) => game,
            Err(err) => panic!("default geodesic y config is invalid: {err}"),
        }
    }
}

impl FromStr for GeodesicYGame {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.parse()?)
    }
}

impl Game for GeodesicYGame {
    type State = GeodesicYState;

    fn num_distinct_actions(&self) -> usize {
        self.graph.len()
    }

    fn num_players(&self) -> usize {
        PLAYER_COUNT
    }

    fn min_utility(&self) -> f64 {
        -1.0
    }

    fn max_utility(&self) -> f64 {
        1.0
    }

    fn utility_sum(&self) -> f64 {
        0.0
    }

    fn max_game_length(&self) -> usize {
        self.graph.len()
    }

    fn observation_tensor_shape(&self) -> Vec<usize> {
        vec![CELL_STATES, self.graph.len()]
    }

    fn new_initial_state(&self) -> GeodesicYState {
        GeodesicYState::with_graph(Arc::clone(&self.graph))
            .with_ansi_color_output(self.config.ansi_color_output)
    }
}

impl GameState for GeodesicYState {
    type Action = Node;

    fn player_count(&self) -> usize {
        PLAYER_COUNT
    }

    fn current_player(&self) -> Option<PlayerId> {
        if self.is_terminal() {
            None
        } else {
            Some(GeodesicYState::current_player(self))
        }
    }

    fn legal_actions(&self) -> Vec<Node> {
        GeodesicYState::legal_actions(self)
    }

    fn apply_action(&mut self, action: &Node) {
        self.apply_move(*action);
    }

    fn is_terminal(&self) -> bool {
        GeodesicYState::is_terminal(self)
    }

    fn result(&self) -> Option<GameResult> {
        self.winner().map(GameResult::Winner)
    }

    fn returns(&self) -> PlayerMap<f64> {
        GeodesicYState::returns(self)
    }

    fn action_to_string(&self, player: PlayerId, action: &Node) -> String {
        GeodesicYState::action_to_string(self, player, *action)
    }

    fn observation_string(&self, player: PlayerId) -> String {
        GeodesicYState::observation_string(self, player)
    }

    fn information_state_string(&self, player: PlayerId) -> String {
        GeodesicYState::information_state_string(self, player)
    }

    fn observation_tensor(&self, player: PlayerId) -> Vec<f32> {
        GeodesicYEncoder::new(self.order()).encode(self, player).tensor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_properties() {
        let game = GeodesicYGame::new(GameConfig::new(4)).unwrap();

        assert_eq!(game.num_distinct_actions(), 18);
        assert_eq!(game.max_game_length(), 18);
        assert_eq!(game.num_players(), 2);
        assert_eq!(game.min_utility(), -1.0);
        assert_eq!(game.max_utility(), 1.0);
        assert_eq!(game.utility_sum(), 0.0);
        assert_eq!(game.observation_tensor_shape(), vec![3, 18]);
    }

    #[test]
    fn test_default_game_uses_order_nine() {
        let game = GeodesicYGame::default();

        assert_eq!(game.config().board_order, 9);
        assert_eq!(game.num_distinct_actions(), 108);
    }

    #[test]
    fn test_states_share_graph() {
        let game = GeodesicYGame::new(GameConfig::new(5)).unwrap();
        let a = game.new_initial_state();
        let b = game.new_initial_state();

        assert!(Arc::ptr_eq(a.graph(), b.graph()));
        assert!(Arc::ptr_eq(a.graph(), game.graph()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            GeodesicYGame::new(GameConfig::new(1)),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            "geodesic_y(board_size=zero)".parse::<GeodesicYGame>(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_ansi_flag_reaches_states() {
        let game: GeodesicYGame = "geodesic_y(board_size=2,ansi_color_output=true)".parse().unwrap();
        let state = game.new_initial_state();

        assert!(state.ansi_color_output());
        assert!(state.to_string().contains('\x1b'));
    }

    #[test]
    fn test_trait_view_of_terminal_state() {
        let game = GeodesicYGame::new(GameConfig::new(2)).unwrap();
        let mut state = game.new_initial_state();

        assert_eq!(GameState::current_player(&state), Some(PlayerId::FIRST));
        for node in [0, 1, 2] {
            GameState::apply_action(&mut state, &Node::new(node));
        }

        assert!(GameState::is_terminal(&state));
        assert_eq!(GameState::current_player(&state), None);
        assert_eq!(state.result(), Some(GameResult::Winner(PlayerId::FIRST)));
        assert!(GameState::legal_actions(&state).is_empty());
        assert_eq!(GameState::returns(&state).to_vec(), vec![1.0, -1.0]);
    }

    #[test]
    fn test_observation_tensor_through_trait() {
        let game = GeodesicYGame::new(GameConfig::new(3)).unwrap();
        let mut state = game.new_initial_state();
        state.apply_move(Node::new(2));

        let tensor = state.observation_tensor(PlayerId::SECOND);
        assert_eq!(tensor.len(), 27);
        assert_eq!(tensor[9 + 2], 1.0);
        assert_eq!(
            state.information_state_string(PlayerId::FIRST),
            GameState::information_state_string(&state, PlayerId::FIRST)
        );
    }
}
