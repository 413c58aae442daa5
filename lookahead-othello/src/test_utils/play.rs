//! Random self-play, used to exercise the rules over many positions.

use crate::{GameState, IllegalMove, Player, Position, ScoreTally, Transition};
use rand::seq::IteratorRandom;
use rand::Rng;

/// One applied move, with the counts on either side of it.
#[derive(Clone, Copy, Debug)]
pub struct Ply {
    pub player: Player,
    pub position: Position,
    pub flipped: usize,
    pub before: ScoreTally,
    pub after: ScoreTally,
    pub transition: Transition,
}

/// A finished random game.
#[derive(Clone, Debug)]
pub struct Playout {
    pub plies: Vec<Ply>,
    pub final_state: GameState,
}

impl Playout {
    /// The positions played, in order.
    pub fn transcript(&self) -> Vec<Position> {
        self.plies.iter().map(|ply| ply.position).collect()
    }
}

/// Play uniformly random legal moves until neither side can move.
pub fn random_game<R: Rng>(rng: &mut R) -> Result<Playout, IllegalMove> {
    let mut game = GameState::new();
    let mut plies = Vec::new();

    loop {
        let moves = game.legal_moves();
        let (position, flips) = match moves.iter().choose(rng) {
            Some(choice) => choice,
            None => break,
        };

        let player = game.active_player();
        let before = game.tally();
        let transition = game.apply_move(position)?;
        plies.push(Ply {
            player,
            position,
            flipped: flips.len(),
            before,
            after: game.tally(),
            transition,
        });
    }

    Ok(Playout {
        plies,
        final_state: game,
    })
}
