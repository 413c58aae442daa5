//! Positional move selection with a one-ply look at the opponent's best reply.
//!
//! Each candidate move is scored as the table value of its square minus the
//! table value of the best square the opponent could answer with. Capture
//! counts play no part in the score.

use derive_more::{Display, Error};
use lookahead_othello::rules::{self, Flips};
use lookahead_othello::{Board, Player, Position, EDGE_LENGTH};
use tracing::{debug, trace};

/// Worst-reply value used when the opponent cannot answer a move.
/// Lower than any entry in a valid table, so "no reply" is always best.
pub const NO_REPLY: i32 = -100;

/// Square weights: corners are prized, squares next to them are dangerous.
pub const DEFAULT_WEIGHTS: [[i32; EDGE_LENGTH]; EDGE_LENGTH] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -10, -2, -2, -10, -50, -20],
    [10, -10, 9, 0, 0, 9, -10, 10],
    [5, -2, 0, 0, 0, 0, -2, 5],
    [5, -2, 0, 0, 0, 0, -2, 5],
    [10, -10, 9, 0, 0, 9, -10, 10],
    [-20, -50, -10, -2, -2, -10, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum InvalidTable {
    #[display(fmt = "weights at ({}, {}) and its mirror image differ", row, col)]
    Asymmetric { row: usize, col: usize },
    #[display(fmt = "weight at ({}, {}) is not above the no-reply value", row, col)]
    BelowNoReply { row: usize, col: usize },
}

/// A fixed value for every square, mirrored top-to-bottom and left-to-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionTable([[i32; EDGE_LENGTH]; EDGE_LENGTH]);

impl Default for PositionTable {
    fn default() -> Self {
        Self(DEFAULT_WEIGHTS)
    }
}

impl PositionTable {
    /// Build a table, checking it is symmetric under both reflections and
    /// that every weight beats [`NO_REPLY`].
    pub fn new(weights: [[i32; EDGE_LENGTH]; EDGE_LENGTH]) -> Result<Self, InvalidTable> {
        const LAST: usize = EDGE_LENGTH - 1;

        for row in 0..EDGE_LENGTH {
            for col in 0..EDGE_LENGTH {
                let weight = weights[row][col];
                if weight != weights[LAST - row][col] || weight != weights[row][LAST - col] {
                    return Err(InvalidTable::Asymmetric { row, col });
                }
                if weight <= NO_REPLY {
                    return Err(InvalidTable::BelowNoReply { row, col });
                }
            }
        }

        Ok(Self(weights))
    }

    #[inline]
    pub fn value(&self, pos: Position) -> i32 {
        self.0[pos.row()][pos.col()]
    }
}

/// The score of one candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Table value of the square played.
    pub self_value: i32,
    /// Best table value among the opponent's replies, or [`NO_REPLY`].
    pub worst_reply: i32,
    /// `self_value - worst_reply`; higher is better for the mover.
    pub score: i32,
}

/// Picks moves for the automated player.
#[derive(Clone, Copy, Debug, Default)]
pub struct Advisor {
    table: PositionTable,
}

impl Advisor {
    pub fn new(table: PositionTable) -> Self {
        Self { table }
    }

    /// Score `player` playing `pos`, whose captures on `board` are `flips`.
    ///
    /// The move is simulated on a copy; `board` is never touched.
    pub fn evaluate(&self, board: &Board, pos: Position, flips: &Flips, player: Player) -> Evaluation {
        let self_value = self.table.value(pos);

        let mut simulated = *board;
        rules::apply(&mut simulated, pos, player, flips);

        let worst_reply = rules::legal_moves(&simulated, !player)
            .positions()
            .map(|reply| self.table.value(reply))
            .max()
            .unwrap_or(NO_REPLY);

        Evaluation {
            self_value,
            worst_reply,
            score: self_value - worst_reply,
        }
    }

    /// Every legal move for `player` with its evaluation, in row-major order.
    pub fn evaluations(&self, board: &Board, player: Player) -> Vec<(Position, Evaluation)> {
        rules::legal_moves(board, player)
            .iter()
            .map(|(pos, flips)| {
                let evaluation = self.evaluate(board, pos, flips, player);
                trace!(
                    %player,
                    position = %pos,
                    self_value = evaluation.self_value,
                    worst_reply = evaluation.worst_reply,
                    score = evaluation.score,
                    "evaluated candidate"
                );
                (pos, evaluation)
            })
            .collect()
    }

    /// Choose a move for `player`, or None if there is no legal move.
    ///
    /// Ties go to the candidate that comes first in row-major order.
    pub fn choose_move(&self, board: &Board, player: Player) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;

        for (pos, evaluation) in self.evaluations(board, player) {
            match best {
                Some((_, best_score)) if evaluation.score <= best_score => {}
                _ => best = Some((pos, evaluation.score)),
            }
        }

        if let Some((pos, score)) = best {
            debug!(%player, position = %pos, score, "chose move");
        }
        best.map(|(pos, _)| pos)
    }
}
