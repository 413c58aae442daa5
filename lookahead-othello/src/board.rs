//! Raw board contents: an 8x8 grid of [`CellState`]s.
//!
//! A [`Board`] checks coordinates but not game rules. It is only mutated by
//! [`rules::apply`](crate::rules::apply), which keeps captures consistent.

use crate::{utils, OutOfRange, ParseBoardError, Player, Position, EDGE_LENGTH, NUM_SPACES};
use std::fmt::{self, Display, Formatter};

/// The contents of a single square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CellState {
    Empty,
    Black,
    White,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => CellState::Black,
            Player::White => CellState::White,
        }
    }
}

impl CellState {
    /// Single-character symbol used by [`Board`]'s text format.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Black => 'X',
            CellState::White => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            '.' | '-' => Some(CellState::Empty),
            'X' | 'B' | '#' => Some(CellState::Black),
            'O' | 'W' => Some(CellState::White),
            _ => None,
        }
    }
}

/// An 8x8 Othello board, stored row-major.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [CellState; NUM_SPACES],
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [CellState::Empty; NUM_SPACES],
        }
    }

    /// The standard starting board: White on D4 and E5, Black on E4 and D5.
    pub fn new() -> Self {
        const LOW: usize = EDGE_LENGTH / 2 - 1;
        const HIGH: usize = EDGE_LENGTH / 2;

        let mut board = Self::empty();
        board.cells[LOW * EDGE_LENGTH + LOW] = CellState::White;
        board.cells[LOW * EDGE_LENGTH + HIGH] = CellState::Black;
        board.cells[HIGH * EDGE_LENGTH + LOW] = CellState::Black;
        board.cells[HIGH * EDGE_LENGTH + HIGH] = CellState::White;
        board
    }

    /// Get the contents of a square.
    #[inline]
    pub fn get(&self, pos: Position) -> CellState {
        self.cells[pos.to_index()]
    }

    /// Get the contents of a square from raw coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, OutOfRange> {
        Ok(self.get(Position::new(row, col)?))
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, state: CellState) {
        self.cells[pos.to_index()] = state;
    }

    /// Iterate over every square and its contents in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        Position::all().zip(self.cells.iter().copied())
    }

    /// Count the squares holding `state`.
    pub fn count(&self, state: CellState) -> u8 {
        self.cells.iter().filter(|&&cell| cell == state).count() as u8
    }

    /// Count the squares with no piece.
    #[inline]
    pub fn count_empty(&self) -> u8 {
        self.count(CellState::Empty)
    }

    /// Count the squares with a piece of either colour.
    #[inline]
    pub fn count_occupied(&self) -> u8 {
        NUM_SPACES as u8 - self.count_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(self.cells.iter().map(|cell| cell.symbol()), f)
    }
}

/// Parse a board from 64 cell symbols in row-major order, ignoring whitespace.
/// `X`, `B` or `#` is Black; `O` or `W` is White; `.` or `-` is empty.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut symbols = s.chars().filter(|c| !c.is_whitespace());

        for cell in board.cells.iter_mut() {
            let symbol = symbols.next().ok_or(ParseBoardError)?;
            *cell = CellState::from_symbol(symbol).ok_or(ParseBoardError)?;
        }

        match symbols.next() {
            None => Ok(board),
            Some(_) => Err(ParseBoardError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn starting_board_has_four_center_pieces() {
        let board = Board::new();
        assert_eq!(board.count_occupied(), 4);
        assert_eq!(board.get(pos(3, 3)), CellState::White);
        assert_eq!(board.get(pos(3, 4)), CellState::Black);
        assert_eq!(board.get(pos(4, 3)), CellState::Black);
        assert_eq!(board.get(pos(4, 4)), CellState::White);

        let occupied: Vec<Position> = board
            .cells()
            .filter(|&(_, cell)| cell != CellState::Empty)
            .map(|(p, _)| p)
            .collect();
        assert_eq!(occupied, vec![pos(3, 3), pos(3, 4), pos(4, 3), pos(4, 4)]);
    }

    #[test]
    fn cell_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell(3, 3), Ok(CellState::White));
        assert_eq!(board.cell(8, 3), Err(OutOfRange { row: 8, col: 3 }));
        assert_eq!(board.cell(0, 100), Err(OutOfRange { row: 0, col: 100 }));
    }

    #[test]
    fn set_touches_one_cell() {
        let mut board = Board::new();
        board.set(pos(0, 0), CellState::Black);
        assert_eq!(board.get(pos(0, 0)), CellState::Black);
        assert_eq!(board.count_occupied(), 5);
        assert_eq!(board.count(CellState::Black), 3);
    }

    #[test]
    fn board_from_str() {
        let board = Board::from_str(
            "........
             ........
             ........
             ...OX...
             ...XO...
             ........
             ........
             ........",
        )
        .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn board_from_str_fail() {
        assert_eq!(Board::from_str(""), Err(ParseBoardError));
        assert_eq!(Board::from_str(&".".repeat(63)), Err(ParseBoardError));
        assert_eq!(Board::from_str(&".".repeat(65)), Err(ParseBoardError));
        assert_eq!(
            Board::from_str(&format!("{}Z", ".".repeat(63))),
            Err(ParseBoardError)
        );
    }

    #[test]
    fn board_display() {
        let expected = "   A B C D E F G H
 1 . . . . . . . .
 2 . . . . . . . .
 3 . . . . . . . .
 4 . . . O X . . .
 5 . . . X O . . .
 6 . . . . . . . .
 7 . . . . . . . .
 8 . . . . . . . .";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn full_board() {
        let board = Board::from_str(&"XO".repeat(32)).unwrap();
        assert!(board.is_full());
        assert_eq!(board.count(CellState::Black), 32);
        assert_eq!(board.count(CellState::White), 32);
    }
}
