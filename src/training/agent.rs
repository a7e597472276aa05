//! Move-choosing agents for matches between players.

use crate::core::GameRng;
use crate::mcts::{MCTSConfig, MCTSSearch};
use crate::rules::GameState;

/// Something that picks moves.
pub trait Agent<S: GameState> {
    /// Choose an action for the player to move, or `None` if the game is over.
    fn choose_action(&mut self, state: &S) -> Option<S::Action>;

    /// Visit distribution behind the last choice. Empty if the agent does
    /// not search.
    fn last_policy(&self) -> Vec<(S::Action, f64)> {
        Vec::new()
    }

    fn name(&self) -> &str;
}

/// Picks a uniformly random legal action.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        if state.is_terminal() {
            return None;
        }
        self.rng.choose(&state.legal_actions()).cloned()
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Runs a fresh MCTS search for every move.
///
/// Each search gets its own seed derived from the base seed and the number
/// of moves chosen so far.
pub struct MctsAgent<S: GameState> {
    config: MCTSConfig,
    iterations: u32,
    moves_chosen: u64,
    last_policy: Vec<(S::Action, f64)>,
}

impl<S: GameState + 'static> MctsAgent<S> {
    pub fn new(config: MCTSConfig, iterations: u32) -> Self {
        Self {
            config,
            iterations,
            moves_chosen: 0,
            last_policy: Vec::new(),
        }
    }

    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl<S: GameState + 'static> Agent<S> for MctsAgent<S> {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        let config = self
            .config
            .clone()
            .with_seed(self.config.seed.wrapping_add(self.moves_chosen));
        self.moves_chosen += 1;

        let mut search = MCTSSearch::new(config);
        let action = search.search(state, self.iterations);
        self.last_policy = search.action_probabilities();
        action
    }

    fn last_policy(&self) -> Vec<(S::Action, f64)> {
        self.last_policy.clone()
    }

    fn name(&self) -> &str {
        "mcts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GeodesicYState;
    use crate::graph::Node;

    #[test]
    fn test_random_agent_picks_legal_moves() {
        let mut state = GeodesicYState::new(4);
        let mut agent = RandomAgent::new(11);

        while let Some(action) = Agent::<GeodesicYState>::choose_action(&mut agent, &state) {
            assert!(state.legal_actions().contains(&action));
            state.apply_move(action);
        }

        assert!(state.is_terminal());
        assert!(Agent::<GeodesicYState>::last_policy(&agent).is_empty());
    }

    #[test]
    fn test_random_agent_is_seeded() {
        let state = GeodesicYState::new(5);
        let mut a = RandomAgent::new(5);
        let mut b = RandomAgent::new(5);

        for _ in 0..5 {
            assert_eq!(
                Agent::<GeodesicYState>::choose_action(&mut a, &state),
                Agent::<GeodesicYState>::choose_action(&mut b, &state)
            );
        }
    }

    #[test]
    fn test_mcts_agent_records_policy() {
        let state = GeodesicYState::new(3);
        let mut agent: MctsAgent<GeodesicYState> = MctsAgent::new(MCTSConfig::default().with_seed(1), 50);

        let action = agent.choose_action(&state).unwrap();
        let policy = agent.last_policy();

        assert!(action.index() < 9);
        assert_eq!(policy.len(), 9);
        let total: f64 = policy.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(agent.name(), "mcts");
    }

    #[test]
    fn test_mcts_agent_takes_winning_move() {
        let mut state = GeodesicYState::new(3);
        for node in [3, 2, 1, 8, 6, 5] {
            state.apply_move(Node::new(node));
        }
        let mut agent: MctsAgent<GeodesicYState> = MctsAgent::new(MCTSConfig::default().with_seed(9), 300);

        let action = agent.choose_action(&state).unwrap();

        assert!(action == Node::new(0) || action == Node::new(4));
    }

    #[test]
    fn test_agents_return_none_when_game_over() {
        let mut state = GeodesicYState::new(2);
        for node in [0, 1, 2] {
            state.apply_move(Node::new(node));
        }
        let mut random = RandomAgent::new(0);
        let mut mcts: MctsAgent<GeodesicYState> = MctsAgent::new(MCTSConfig::default(), 10);

        assert_eq!(Agent::<GeodesicYState>::choose_action(&mut random, &state), None);
        assert_eq!(mcts.choose_action(&state), None);
    }
}
