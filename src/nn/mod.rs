//! Tensor encoding of game states for learning agents.
//!
//! ## Overview
//!
//! - **Tensor**: `EncodedState`, a flat row-major tensor with its shape
//! - **Encoding**: `StateEncoder` trait and the `GeodesicYEncoder`
//!   implementation
//!
//! ## Usage
//!
//! ```rust
//! use geodesic_y::board::GeodesicYState;
//! use geodesic_y::core::PlayerId;
//! use geodesic_y::nn::{GeodesicYEncoder, StateEncoder};
//!
//! let state = GeodesicYState::new(5);
//! let encoder = GeodesicYEncoder::new(5);
//!
//! let encoded = encoder.encode(&state, PlayerId::FIRST);
//! assert_eq!(encoded.shape, vec![3, 30]);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{GeodesicYEncoder, StateEncoder, CELL_STATES};
pub use traits::EncodedState;
