//! MCTS integration tests on Geodesic Y boards.

use geodesic_y::board::GeodesicYState;
use geodesic_y::core::PlayerId;
use geodesic_y::graph::Node;
use geodesic_y::mcts::{MCTSConfig, MCTSSearch, MCTSTree, RandomSimulation, UCB1};
use geodesic_y::rules::GameState;

fn play(order: u16, moves: &[u16]) -> GeodesicYState {
    let mut state = GeodesicYState::new(order);
    for &m in moves {
        state.apply_move(Node::new(m));
    }
    state
}

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_mcts_returns_legal_action() {
    let state = GeodesicYState::new(5);
    let mut search = MCTSSearch::new(MCTSConfig::default());

    let action = search.search(&state, 100).expect("MCTS should return an action");

    assert!(state.legal_actions().contains(&action));
}

#[test]
fn test_mcts_with_low_iterations() {
    let state = GeodesicYState::new(4);
    let mut search = MCTSSearch::new(MCTSConfig::default());

    // Even with few iterations, should return something
    assert!(search.search(&state, 1).is_some());
}

#[test]
fn test_mcts_terminal_state_returns_none() {
    let state = play(2, &[0, 1, 2]);
    let mut search = MCTSSearch::new(MCTSConfig::default());

    assert_eq!(search.search(&state, 50), None);
    assert_eq!(search.stats().iterations, 0);
}

#[test]
fn test_mcts_single_legal_move() {
    let state = play(2, &[0, 1]);
    let mut search = MCTSSearch::new(MCTSConfig::default());

    assert_eq!(search.search(&state, 50), Some(Node::new(2)));
    assert_eq!(search.stats().iterations, 0);
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_mcts_deterministic_with_seed() {
    let state = GeodesicYState::new(5);
    let config = MCTSConfig::default().with_seed(12345);

    let mut search1 = MCTSSearch::new(config.clone());
    let mut search2 = MCTSSearch::new(config);

    let action1 = search1.search(&state, 200);
    let action2 = search2.search(&state, 200);

    assert_eq!(action1, action2, "Same seed should produce same action");
    assert_eq!(search1.action_visits(), search2.action_visits());
}

#[test]
fn test_mcts_different_seeds_differ() {
    let state = GeodesicYState::new(6);

    let visits: Vec<Vec<(Node, u32)>> = (0..4)
        .map(|seed| {
            let mut search = MCTSSearch::new(MCTSConfig::default().with_seed(seed));
            search.search(&state, 300);
            search.action_visits()
        })
        .collect();

    assert!(visits.windows(2).any(|w| w[0] != w[1]));
}

// =============================================================================
// Play Strength Tests
// =============================================================================

#[test]
fn test_mcts_finds_immediate_win() {
    let state = play(3, &[3, 2, 1, 8, 6, 5]);
    let mut search = MCTSSearch::new(MCTSConfig::default().with_seed(3));

    let action = search.search(&state, 500).unwrap();

    assert!(action == Node::new(0) || action == Node::new(4), "got {action}");
}

#[test]
fn test_mcts_wins_against_random_player() {
    let mut mcts_wins = 0;
    for game in 0..6u64 {
        let mut state = GeodesicYState::new(4);
        let mut rng = geodesic_y::core::GameRng::new(game);

        while !state.is_terminal() {
            let action = if state.current_player() == PlayerId::FIRST {
                let mut search = MCTSSearch::new(MCTSConfig::default().with_seed(game));
                search.search(&state, 300).unwrap()
            } else {
                *rng.choose(&state.legal_actions()).unwrap()
            };
            state.apply_move(action);
        }

        if state.winner() == Some(PlayerId::FIRST) {
            mcts_wins += 1;
        }
    }

    assert!(mcts_wins >= 4, "MCTS won only {mcts_wins} of 6");
}

// =============================================================================
// Statistics Tests
// =============================================================================

#[test]
fn test_mcts_statistics() {
    let state = GeodesicYState::new(4);
    let mut search = MCTSSearch::new(MCTSConfig::default());

    search.search(&state, 100);

    let stats = search.stats();
    assert_eq!(stats.iterations, 100);
    assert!(stats.nodes_expanded > 0);
    assert!(stats.max_depth >= 1);
}

#[test]
fn test_mcts_tree_stats() {
    let state = GeodesicYState::new(4);
    let mut search = MCTSSearch::new(MCTSConfig::default());

    search.search(&state, 200);

    let tree_stats = search.tree().stats();
    assert!(tree_stats.node_count > 1);
    assert!(tree_stats.total_edges >= 18);
    assert!(tree_stats.branching_factor() > 0.0);
    assert!(tree_stats.expansion_ratio() > 0.0);
}

#[test]
fn test_action_probabilities_sum_to_one() {
    let state = GeodesicYState::new(4);
    let mut search = MCTSSearch::new(MCTSConfig::default());

    search.search(&state, 200);

    let probs = search.action_probabilities();
    assert_eq!(probs.len(), 18);
    let sum: f64 = probs.iter().map(|(_, p)| p).sum();
    assert!((sum - 1.0).abs() < 1e-9, "Probabilities sum to {sum}");
}

#[test]
fn test_root_visits_match_iterations() {
    let state = GeodesicYState::new(4);
    let mut search = MCTSSearch::new(MCTSConfig::default());

    search.search(&state, 150);

    let total: u32 = search.action_visits().iter().map(|(_, v)| v).sum();
    assert_eq!(total, 150);
    assert_eq!(search.tree().root_node().visits, 150);
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_max_nodes_stops_search() {
    let state = GeodesicYState::new(6);
    let mut search = MCTSSearch::new(MCTSConfig::default().with_max_nodes(20));

    assert!(search.search(&state, 10_000).is_some());
    assert!(search.tree().len() <= 21);
    assert!(search.stats().iterations < 10_000);
}

#[test]
fn test_explicit_policies() {
    let state = GeodesicYState::new(4);
    let mut search = MCTSSearch::new(MCTSConfig::default())
        .with_selection(UCB1)
        .with_simulation(RandomSimulation);

    assert!(search.search(&state, 50).is_some());
}

#[test]
fn test_temperature_sampling_picks_visited_action() {
    let state = GeodesicYState::new(4);
    let mut search = MCTSSearch::new(MCTSConfig::default().with_temperature(1.0).with_seed(8));

    let action = search.search(&state, 100).unwrap();

    let visits = search.action_visits();
    let (_, count) = visits.iter().find(|(a, _)| *a == action).unwrap();
    assert!(*count > 0);
}

#[test]
fn test_config_serialization() {
    let config = MCTSConfig::default().with_exploration(2.5).with_seed(99).with_max_depth(10);

    let json = serde_json::to_string(&config).unwrap();
    let restored: MCTSConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config, restored);
}

#[test]
fn test_tree_starts_with_root() {
    let tree: MCTSTree<Node> = MCTSTree::new(Some(PlayerId::FIRST), 2);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root_node().to_move, Some(PlayerId::FIRST));
    assert_eq!(GameState::player_count(&GeodesicYState::new(3)), tree.player_count());
}
