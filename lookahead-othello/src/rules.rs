//! Capture computation, legality, and move application.
//!
//! These functions work on a bare [`Board`] for an explicit [`Player`]; they
//! don't know whose turn it is. [`apply`] trusts that the flips it receives
//! were computed by [`flips_for`] on the same board.

use crate::{Board, CellState, Direction, Player, Position, NUM_SPACES};
use arrayvec::ArrayVec;
use itertools::Itertools;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// The squares a move captures, innermost first within each direction.
pub type Flips = ArrayVec<Position, NUM_SPACES>;

/// Walk order for captures: NW, N, NE, W, E, SW, S, SE.
pub const DIRECTIONS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Compute the squares `player` would flip by playing at `pos`.
/// Empty if `pos` is occupied or nothing is captured.
pub fn flips_for(board: &Board, pos: Position, player: Player) -> Flips {
    let mut flips = Flips::new();
    if board.get(pos) != CellState::Empty {
        return flips;
    }

    let own = CellState::from(player);
    let opposing = CellState::from(!player);

    for &direction in DIRECTIONS.iter() {
        let run_start = flips.len();
        let mut cursor = pos.step(direction);

        while let Some(next) = cursor.filter(|&p| board.get(p) == opposing) {
            flips.push(next);
            cursor = next.step(direction);
        }

        // The run only counts if it is closed off by one of our own pieces.
        let bracketed = cursor.map_or(false, |end| board.get(end) == own);
        if !bracketed {
            flips.truncate(run_start);
        }
    }

    flips
}

/// Returns whether `player` may play at `pos`.
#[inline]
pub fn is_legal(board: &Board, pos: Position, player: Player) -> bool {
    !flips_for(board, pos, player).is_empty()
}

/// Every legal move for `player`, with the flips each would make.
pub fn legal_moves(board: &Board, player: Player) -> MoveList {
    MoveList(
        Position::all()
            .filter_map(|pos| {
                let flips = flips_for(board, pos, player);
                if flips.is_empty() {
                    None
                } else {
                    Some((pos, flips))
                }
            })
            .collect(),
    )
}

/// Returns whether `player` has any legal move. Stops at the first one found.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Position::all().any(|pos| is_legal(board, pos, player))
}

/// Place a piece for `player` at `pos` and flip every square in `flips`.
/// `flips` must be the result of [`flips_for`] on this same board.
pub fn apply(board: &mut Board, pos: Position, player: Player, flips: &[Position]) {
    debug_assert_eq!(flips, flips_for(board, pos, player).as_slice());

    let own = CellState::from(player);
    board.set(pos, own);
    for &flip in flips {
        board.set(flip, own);
    }
}

/// The legal moves out of a position, keyed and iterated in row-major order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveList(BTreeMap<Position, Flips>);

impl MoveList {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether `pos` is a legal move.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains_key(&pos)
    }

    /// The flips `pos` would make, if it is legal.
    pub fn flips(&self, pos: Position) -> Option<&Flips> {
        self.0.get(&pos)
    }

    /// Iterate over the legal positions.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.keys().copied()
    }

    /// Iterate over each legal position and its flips.
    pub fn iter(&self) -> Moves<'_> {
        Moves(self.0.iter())
    }
}

/// Iterator over a [`MoveList`], yielding positions in row-major order.
pub struct Moves<'a>(btree_map::Iter<'a, Position, Flips>);

impl<'a> Iterator for Moves<'a> {
    type Item = (Position, &'a Flips);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(&pos, flips)| (pos, flips))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> ExactSizeIterator for Moves<'a> {}

impl<'a> IntoIterator for &'a MoveList {
    type Item = (Position, &'a Flips);
    type IntoIter = Moves<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.positions().join(", "))
    }
}
