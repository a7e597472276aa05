//! Game records for training data collection.
//!
//! A trajectory records a complete game, capturing:
//! - Encoded states at each decision point
//! - Search action probabilities (the "target" policy), when available
//! - Actions actually taken
//! - Final game outcome for value targets

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::nn::EncodedState;

/// A single step in a trajectory.
///
/// Captures the state, search policy, and action taken at one decision point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step<A> {
    /// Encoded game state from the acting player's perspective.
    pub encoded_state: EncodedState,

    /// Normalized visit counts. Empty for agents that do not search.
    pub action_probs: Vec<(A, f64)>,

    /// The action that was actually taken.
    pub action_taken: A,

    /// The player who made this decision.
    pub player: PlayerId,

    /// Move number in the game (0-indexed).
    pub move_number: usize,
}

impl<A: PartialEq> Step<A> {
    pub fn new(
        encoded_state: EncodedState,
        action_probs: Vec<(A, f64)>,
        action_taken: A,
        player: PlayerId,
        move_number: usize,
    ) -> Self {
        Self {
            encoded_state,
            action_probs,
            action_taken,
            player,
            move_number,
        }
    }

    /// Probability the search assigned to the taken action.
    pub fn taken_action_prob(&self) -> f64 {
        self.action_probs
            .iter()
            .find(|(a, _)| a == &self.action_taken)
            .map_or(0.0, |(_, p)| *p)
    }
}

/// A complete game.
///
/// Contains all decision points and the final outcome, which provides value
/// targets for training. The seed makes the game reproducible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory<A> {
    pub steps: Vec<Step<A>>,

    /// Final returns per player (+1 winner, -1 loser, 0 if unfinished).
    pub outcome: PlayerMap<f64>,

    pub winner: Option<PlayerId>,

    /// Total number of moves in the game.
    pub game_length: usize,

    /// Random seed used for this game.
    pub seed: u64,
}

impl<A> Trajectory<A> {
    pub fn new(seed: u64, player_count: usize) -> Self {
        Self {
            steps: Vec::new(),
            outcome: PlayerMap::with_value(player_count, 0.0),
            winner: None,
            game_length: 0,
            seed,
        }
    }

    pub fn push(&mut self, step: Step<A>) {
        self.steps.push(step);
        self.game_length += 1;
    }

    /// Record how the game ended.
    pub fn finish(&mut self, outcome: PlayerMap<f64>, winner: Option<PlayerId>) {
        self.outcome = outcome;
        self.winner = winner;
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get steps for a specific player.
    pub fn player_steps(&self, player: PlayerId) -> impl Iterator<Item = &Step<A>> {
        self.steps.iter().filter(move |s| s.player == player)
    }

    pub fn player_outcome(&self, player: PlayerId) -> f64 {
        self.outcome[player]
    }

    /// The actions in play order.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.steps.iter().map(|s| &s.action_taken)
    }

    /// Convert to training samples with a dense policy over
    /// `num_actions` action ids.
    pub fn to_training_samples(&self, num_actions: usize) -> Vec<TrainingSample>
    where
        A: Copy + Into<usize>,
    {
        self.steps
            .iter()
            .map(|step| {
                let mut policy = vec![0.0; num_actions];
                for &(action, prob) in &step.action_probs {
                    if let Some(slot) = policy.get_mut(action.into()) {
                        *slot = prob as f32;
                    }
                }
                TrainingSample {
                    state: step.encoded_state.clone(),
                    policy,
                    value: self.outcome[step.player] as f32,
                    player: step.player,
                }
            })
            .collect()
    }
}

impl<A: Serialize> Trajectory<A> {
    /// Compact binary encoding for storage.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }
}

impl<A: for<'de> Deserialize<'de>> Trajectory<A> {
    /// Decode a trajectory written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

/// A single training sample extracted from a trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub state: EncodedState,

    /// Target policy (visit distribution over every action id).
    pub policy: Vec<f32>,

    /// Target value (game outcome from `player`'s perspective).
    pub value: f32,

    pub player: PlayerId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    fn make_test_step(player: PlayerId, move_num: usize) -> Step<Node> {
        Step::new(
            EncodedState::zeros(vec![3, 3]),
            vec![(Node::new(0), 0.25), (Node::new(2), 0.75)],
            Node::new(2),
            player,
            move_num,
        )
    }

    #[test]
    fn test_step_taken_action_prob() {
        let step = make_test_step(PlayerId::FIRST, 0);
        assert!((step.taken_action_prob() - 0.75).abs() < 1e-9);

        let unsearched = Step::new(
            EncodedState::zeros(vec![3]),
            vec![],
            Node::new(1),
            PlayerId::FIRST,
            0,
        );
        assert_eq!(unsearched.taken_action_prob(), 0.0);
    }

    #[test]
    fn test_trajectory_push_and_finish() {
        let mut traj = Trajectory::new(42, 2);
        assert!(traj.is_empty());

        traj.push(make_test_step(PlayerId::FIRST, 0));
        traj.push(make_test_step(PlayerId::SECOND, 1));
        traj.push(make_test_step(PlayerId::FIRST, 2));
        traj.finish(
            PlayerMap::new(2, |p| if p == PlayerId::FIRST { 1.0 } else { -1.0 }),
            Some(PlayerId::FIRST),
        );

        assert_eq!(traj.len(), 3);
        assert_eq!(traj.game_length, 3);
        assert_eq!(traj.player_steps(PlayerId::FIRST).count(), 2);
        assert_eq!(traj.player_outcome(PlayerId::SECOND), -1.0);
        assert_eq!(traj.winner, Some(PlayerId::FIRST));
        assert_eq!(traj.actions().count(), 3);
    }

    #[test]
    fn test_to_training_samples() {
        let mut traj = Trajectory::new(1, 2);
        traj.push(make_test_step(PlayerId::FIRST, 0));
        traj.push(make_test_step(PlayerId::SECOND, 1));
        traj.finish(
            PlayerMap::new(2, |p| if p == PlayerId::SECOND { 1.0 } else { -1.0 }),
            Some(PlayerId::SECOND),
        );

        let samples = traj.to_training_samples(3);

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].policy, vec![0.25, 0.0, 0.75]);
        assert_eq!(samples[0].value, -1.0);
        assert_eq!(samples[1].value, 1.0);
        assert_eq!(samples[1].player, PlayerId::SECOND);
    }

    #[test]
    fn test_bincode_round_trip() {
        let mut traj = Trajectory::new(99, 2);
        traj.push(make_test_step(PlayerId::FIRST, 0));
        traj.finish(PlayerMap::with_value(2, 0.0), None);

        let bytes = traj.to_bytes().unwrap();
        let decoded: Trajectory<Node> = Trajectory::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, traj);
        assert!(Trajectory::<Node>::from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }
}
