//! Error types for the fallible entry points.
//!
//! The panicking API (`GeodesicGraph::build`, `GeodesicYState::apply_move`)
//! treats these conditions as caller bugs and aborts. The `try_*` twins
//! report them as values instead.

use crate::graph::Node;

/// Rules and board errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeodesicError {
    #[error("board order must be at least {min}, got {order}")]
    BoardOrderTooSmall { order: u16, min: u16 },

    #[error("board order {order} needs {cells} cells, more than a node id can address")]
    BoardOrderTooLarge { order: u16, cells: usize },

    #[error("node {node} is outside the board (0..{cells})")]
    NodeOutOfRange { node: Node, cells: usize },

    #[error("node {0} is already occupied")]
    CellOccupied(Node),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised while parsing or validating game parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    #[error("invalid value '{value}' for parameter '{key}'")]
    InvalidValue { key: String, value: String },

    #[error("malformed parameter string: {0}")]
    Malformed(String),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Board(#[from] GeodesicError),
}
