//! Geodesic Y, registered as `geodesic_y`.
//!
//! Two players alternately place stones on the nodes of a subdivided
//! triangle. The first to connect all three sides with one group wins.
//! There are no draws: a full board always holds a winning group.
//!
//! Parameters:
//! - `board_size` (default 9): board order, at least 2
//! - `ansi_color_output` (default false): color the board rendering

mod game;

pub use game::GeodesicYGame;
