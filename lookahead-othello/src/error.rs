//! Error types shared by the board, rules, and game layers.

use crate::{Player, Position};
use derive_more::{Display, Error};

/// Raw coordinates that fall outside the 8x8 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "({}, {}) is outside the 8x8 board", row, col)]
pub struct OutOfRange {
    pub row: usize,
    pub col: usize,
}

/// Why a move was refused. The game state is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// A move was submitted for the side that is not to move.
    #[display(fmt = "it is not {}'s turn", player)]
    NotYourTurn { player: Player },

    /// The target square is occupied or captures nothing.
    #[display(fmt = "{} cannot play {}: no pieces would be captured", player, position)]
    NoCapture { position: Position, player: Player },

    /// Neither side has a legal move left.
    #[display(fmt = "the game is over")]
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid board string")]
pub struct ParseBoardError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;
