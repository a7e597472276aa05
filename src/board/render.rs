//! Text rendering of board states.
//!
//! The board is printed as one character per node in node order, followed by
//! a newline: `O` for the first player, `@` for the second and `.` for empty.
//! With ANSI output enabled both players print as `@`, colored bright yellow
//! and bright blue.

use std::fmt;

use super::state::GeodesicYState;
use crate::core::PlayerId;
use crate::graph::Node;

const ESC_RESET: &str = "\x1b[0m";

struct Glyphs {
    first: &'static str,
    second: &'static str,
    empty: &'static str,
    reset: &'static str,
}

impl Glyphs {
    const PLAIN: Glyphs = Glyphs {
        first: "O",
        second: "@",
        empty: ".",
        reset: "",
    };

    const ANSI: Glyphs = Glyphs {
        first: "\x1b[1;33m@",
        second: "\x1b[1;34m@",
        empty: "\x1b[0m.",
        reset: ESC_RESET,
    };

    fn for_owner(&self, owner: Option<PlayerId>) -> &'static str {
        match owner {
            Some(PlayerId::FIRST) => self.first,
            Some(_) => self.second,
            None => self.empty,
        }
    }
}

impl fmt::Display for GeodesicYState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs = if self.ansi_color_output() {
            &Glyphs::ANSI
        } else {
            &Glyphs::PLAIN
        };

        for cell in self.cells() {
            f.write_str(glyphs.for_owner(cell.owner))?;
        }
        writeln!(f)?;
        f.write_str(glyphs.reset)
    }
}

impl GeodesicYState {
    /// Human-readable form of an action: the node number.
    #[must_use]
    pub fn action_to_string(&self, _player: PlayerId, action: Node) -> String {
        action.to_string()
    }

    /// What `player` sees. The board is fully public, so this is the board
    /// rendering for everyone.
    #[must_use]
    pub fn observation_string(&self, _player: PlayerId) -> String {
        self.to_string()
    }

    /// Everything `player` knows: the full move history as
    /// comma-separated node numbers.
    #[must_use]
    pub fn information_state_string(&self, _player: PlayerId) -> String {
        self.history()
            .iter()
            .map(|record| record.action.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
