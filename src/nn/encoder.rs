//! Observation tensors for Geodesic Y positions.

use crate::board::{GeodesicYState, PLAYER_COUNT};
use crate::core::PlayerId;
use crate::graph::cell_count;
use crate::nn::traits::EncodedState;
use crate::rules::GameState;

/// Turns a position into the tensor a policy/value model reads.
pub trait StateEncoder<S: GameState>: Send + Sync {
    /// Tensor for `state` as seen by `perspective`.
    fn encode(&self, state: &S, perspective: PlayerId) -> EncodedState;

    fn output_shape(&self) -> Vec<usize>;

    /// Length of the policy vector, one slot per action id.
    fn action_space_size(&self) -> usize;

    fn player_count(&self) -> usize;
}

/// Number of planes in a Geodesic Y observation.
pub const CELL_STATES: usize = 3;

/// Player-relative one-hot board encoding.
///
/// Shape `[3, N]`: plane 0 holds the perspective player's stones, plane 1
/// the opponent's, plane 2 the empty cells. Every cell is hot in exactly
/// one plane.
#[derive(Clone, Debug)]
pub struct GeodesicYEncoder {
    cells: usize,
}

impl GeodesicYEncoder {
    /// Encoder for boards of the given order.
    #[must_use]
    pub fn new(order: u16) -> Self {
        Self {
            cells: cell_count(order),
        }
    }

    /// Plane a cell falls in from `perspective`'s point of view.
    fn plane(owner: Option<PlayerId>, perspective: PlayerId) -> usize {
        match owner {
            Some(player) if player == perspective => 0,
            Some(_) => 1,
            None => 2,
        }
    }
}

impl StateEncoder<GeodesicYState> for GeodesicYEncoder {
    /// # Panics
    ///
    /// Panics if `state` is played on a board of a different order than the
    /// one this encoder was built for.
    fn encode(&self, state: &GeodesicYState, perspective: PlayerId) -> EncodedState {
        assert_eq!(
            state.cell_count(),
            self.cells,
            "encoder for {} cells given a {}-cell board",
            self.cells,
            state.cell_count()
        );

        let mut encoded = EncodedState::zeros(self.output_shape());
        for (i, cell) in state.cells().iter().enumerate() {
            encoded.set(Self::plane(cell.owner, perspective) * self.cells + i, 1.0);
        }
        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![CELL_STATES, self.cells]
    }

    fn action_space_size(&self) -> usize {
        self.cells
    }

    fn player_count(&self) -> usize {
        PLAYER_COUNT
    }
}
