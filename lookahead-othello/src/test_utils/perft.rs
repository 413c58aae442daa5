//! "Perft" performance test: count the number of leaves at a given depth.
//! A pass counts as a ply, and a position where both sides pass is a leaf.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::rules;
use crate::{Board, Player};

/// Count the leaves `depth` plies below the starting position.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::Black, depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = rules::legal_moves(&board, player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    all_moves
        .iter()
        .map(|(pos, flips)| {
            let mut next = board;
            rules::apply(&mut next, pos, player, flips);
            leaves_below(next, !player, depth - 1, false)
        })
        .sum()
}
