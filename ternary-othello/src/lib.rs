//! `ternary-othello` is an Othello library for square boards from 3x3 up to 8x8.
//!
//! Every row, column and diagonal of the board is stored as a single base-3 number
//! (a [`LineCode`]). Legality checks and disc flipping become lookups into a
//! [`MobilityTable`] computed once per board size, instead of scans over the grid.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`line`], [`topology`] and [`mobility`] contain the raw building blocks:
//!    the line codec, the layout of lines on a board, and the flip lookup table.
//!  - [`Board`] implements the core rules on top of those tables. Its unchecked
//!    operations are fast, and are what search engines should use.
//!  - [`Game`] is a high-level, safe interface which also tracks passes and the end of the game.

pub mod line;
pub mod mobility;
pub mod test_utils;
pub mod topology;

mod board;
mod cell;
mod game;
mod position;
mod tables;

pub use board::*;
pub use cell::*;
pub use game::*;
pub use line::LineCode;
pub use mobility::{Flips, MobilityTable};
pub use position::*;
pub use topology::{line_count, LineId, LineKind, LineSlot, Topology};

/// The smallest supported board edge length.
pub const MIN_EDGE_LENGTH: usize = 3;

/// The largest supported board edge length.
pub const MAX_EDGE_LENGTH: usize = 8;

/// The number of spaces on the largest supported board.
pub const MAX_SPACES: usize = MAX_EDGE_LENGTH * MAX_EDGE_LENGTH;

/// The number of lines on the largest supported board.
pub const MAX_LINES: usize = line_count(MAX_EDGE_LENGTH);
