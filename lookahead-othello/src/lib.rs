//! `lookahead-othello` implements the rules of Othello for engines and UIs.
//!
//! The crate is split into three levels:
//!
//!  - [`Board`] and [`Position`] hold raw board contents. They check coordinates
//!    but know nothing about turns.
//!  - [`rules`] computes captures, legal moves, and applies moves to a [`Board`].
//!    These functions trust their caller to pass flips computed on the same board.
//!  - [`GameState`] is the safe, high-level interface: it owns a board, tracks the
//!    side to move, skips players who cannot move, and reports the outcome.
//!
//! Hosts drive a game purely through [`GameState`] queries and
//! [`GameState::apply_move`]; rendering and input are left to them.

pub mod rules;
pub mod test_utils;

mod board;
mod error;
mod game;
mod position;
mod utils;

pub use board::*;
pub use error::*;
pub use game::*;
pub use position::*;
pub use rules::{Flips, MoveList};

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
