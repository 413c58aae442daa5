//! Code for working with [`Position`]s on the Othello board.

use crate::{OutOfRange, ParsePositionError, EDGE_LENGTH, NUM_SPACES};
use std::fmt::{self, Display, Formatter, Write};

/// A square on the Othello board, stored as 0-indexed row and column.
///
/// Positions order row-major: `(0, 0) < (0, 7) < (1, 0)`. Every enumeration in
/// this crate follows that order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

/// A step between neighbouring squares, as (row delta, column delta).
pub type Direction = (i8, i8);

impl Position {
    /// Build a position from 0-indexed row and column coordinates.
    pub fn new(row: usize, col: usize) -> Result<Self, OutOfRange> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(OutOfRange { row, col });
        }

        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Convert from a row-major square index: 0 is the top left, 63 the bottom right.
    #[inline]
    pub fn from_index(index: usize) -> Result<Self, OutOfRange> {
        Self::new(index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * EDGE_LENGTH + self.col as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The neighbouring square one step in `direction`, or None off the edge.
    #[inline]
    pub fn step(self, (d_row, d_col): Direction) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize).ok()
    }

    /// Iterate over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_SPACES).map(|index| Self {
            row: (index / EDGE_LENGTH) as u8,
            col: (index % EDGE_LENGTH) as u8,
        })
    }
}

/// Convert this [`Position`] into string notation ("D3": column letter, 1-indexed row).
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Build a [`Position`] from 1-indexed string notation ("D3", case-insensitive).
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParsePositionError)?;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParsePositionError);
        }

        Self::new(row - 1, col).or(Err(ParsePositionError))
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
    fn position_new_rejects_out_of_range() {
        assert_eq!(Position::new(0, 8), Err(OutOfRange { row: 0, col: 8 }));
        assert_eq!(Position::new(8, 0), Err(OutOfRange { row: 8, col: 0 }));
        assert!(Position::new(7, 7).is_ok());
    }

    #[test]
    fn position_index_is_row_major() {
        assert_eq!(Position::from_index(0), Ok(pos(0, 0)));
        assert_eq!(Position::from_index(9), Ok(pos(1, 1)));
        assert_eq!(Position::from_index(63), Ok(pos(7, 7)));
        assert!(Position::from_index(64).is_err());
        assert_eq!(pos(2, 3).to_index(), 19);
    }

    #[test]
    fn position_all_is_sorted() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), NUM_SPACES);
        assert_eq!(all[0], pos(0, 0));
        assert_eq!(all[8], pos(1, 0));
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn position_step() {
        assert_eq!(pos(3, 3).step((-1, 1)), Some(pos(2, 4)));
        assert_eq!(pos(0, 0).step((-1, 0)), None);
        assert_eq!(pos(0, 0).step((0, -1)), None);
        assert_eq!(pos(7, 7).step((1, 1)), None);
        assert_eq!(pos(7, 0).step((0, 1)), Some(pos(7, 1)));
    }

    #[test]
    fn position_from_str_success() {
        assert_eq!(Position::from_str("A1"), Ok(pos(0, 0)));
        assert_eq!(Position::from_str("h8"), Ok(pos(7, 7)));
        assert_eq!(Position::from_str("D3"), Ok(pos(2, 3)));
        assert_eq!(Position::from_str(" c4\n"), Ok(pos(3, 2)));
    }

    #[test]
    fn position_from_str_fail() {
        assert_eq!(Position::from_str(""), Err(ParsePositionError));
        assert_eq!(Position::from_str("A12"), Err(ParsePositionError));
        assert_eq!(Position::from_str("AA"), Err(ParsePositionError));
        assert_eq!(Position::from_str("A9"), Err(ParsePositionError));
        assert_eq!(Position::from_str("A0"), Err(ParsePositionError));
        assert_eq!(Position::from_str("I5"), Err(ParsePositionError));
    }

    #[test]
    fn position_to_str() {
        assert_eq!(pos(7, 7).to_string(), "H8");
        assert_eq!(pos(0, 0).to_string(), "A1");
        assert_eq!(pos(2, 3).to_string(), "D3");
        assert_eq!(Position::from_str("F6").unwrap().to_string(), "F6");
    }
}
