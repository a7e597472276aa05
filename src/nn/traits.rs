//! The observation tensor stored in trajectories.

use serde::{Deserialize, Serialize};

/// A Geodesic Y observation laid out as `[planes, cells]`.
///
/// Row `p` holds plane `p` over every cell id in order, so the value for
/// cell `i` in plane `p` sits at flat index `p * cells + i`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Planes concatenated one after another.
    pub tensor: Vec<f32>,

    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Wrap a flat tensor. Its length must be the product of `shape`.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "{} values do not fill shape {:?}",
            tensor.len(),
            shape
        );
        Self { tensor, shape }
    }

    /// All planes cold.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Writes past the end are dropped.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.tensor.get_mut(index) {
            *slot = value;
        }
    }

    /// One slice per plane.
    ///
    /// # Panics
    ///
    /// Panics unless the shape is `[planes, cells]`.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        assert_eq!(self.shape.len(), 2, "expected [planes, cells], got {:?}", self.shape);
        self.tensor.chunks(self.shape[1].max(1))
    }
}
