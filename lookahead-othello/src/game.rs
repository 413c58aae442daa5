//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred, but engines may
//! use [`rules`] directly on copies of a [`Board`].

use crate::rules::{self, MoveList};
use crate::{Board, CellState, IllegalMove, ParsePlayerError, Position};
use derive_more::Display;
use std::fmt;
use tracing::{debug, info};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Self {
        !self
    }
}

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Player::Black),
            "white" | "w" | "o" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// Piece counts on a board snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub black: u8,
    pub white: u8,
}

impl ScoreTally {
    /// Count the pieces on `board`.
    pub fn of(board: &Board) -> Self {
        Self {
            black: board.count(CellState::Black),
            white: board.count(CellState::White),
        }
    }

    /// Pieces held by `player`.
    pub fn pieces(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    #[inline]
    pub fn total(self) -> u8 {
        self.black + self.white
    }

    /// The result if the game ended with these counts.
    pub fn outcome(self) -> Outcome {
        use std::cmp::Ordering;

        match self.black.cmp(&self.white) {
            Ordering::Greater => Outcome::BlackWins,
            Ordering::Less => Outcome::WhiteWins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black: {} White: {}", self.black, self.white)
    }
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Outcome {
    #[display(fmt = "Black wins")]
    BlackWins,
    #[display(fmt = "White wins")]
    WhiteWins,
    #[display(fmt = "Tie")]
    Tie,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::BlackWins => Some(Player::Black),
            Outcome::WhiteWins => Some(Player::White),
            Outcome::Tie => None,
        }
    }
}

/// What happened to the turn after a move was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The opponent is now to move.
    Alternated,
    /// The opponent had no legal move and was skipped; the mover goes again.
    OpponentPassed,
    /// Neither side can move: the game is over.
    Finished,
}

/// The complete state of an Othello game: the board and the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    active_player: Player,
}

impl Default for GameState {
    /// The starting board with Black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Start a new game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::default(),
        }
    }

    /// Set up an arbitrary position with `player` to move.
    ///
    /// If `player` cannot move but the opponent can, the opponent is to move
    /// instead, just as if `player` had been skipped.
    pub fn from_position(board: Board, player: Player) -> Self {
        let active_player = if !rules::has_legal_move(&board, player)
            && rules::has_legal_move(&board, !player)
        {
            !player
        } else {
            player
        };

        Self {
            board,
            active_player,
        }
    }

    /// Rebuild a game from the sequence of positions played since the start.
    pub fn replay<I>(moves: I) -> Result<Self, IllegalMove>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut game = Self::new();
        for pos in moves {
            game.apply_move(pos)?;
        }
        Ok(game)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move. Meaningless once the game is over.
    #[inline]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// The legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        rules::legal_moves(&self.board, self.active_player)
    }

    /// The legal moves `player` would have on the current board.
    pub fn legal_moves_for(&self, player: Player) -> MoveList {
        rules::legal_moves(&self.board, player)
    }

    /// Returns whether neither side has a legal move.
    pub fn is_terminal(&self) -> bool {
        !rules::has_legal_move(&self.board, Player::Black)
            && !rules::has_legal_move(&self.board, Player::White)
    }

    pub fn tally(&self) -> ScoreTally {
        ScoreTally::of(&self.board)
    }

    /// The result of the game, or None while either side can still move.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_terminal() {
            Some(self.tally().outcome())
        } else {
            None
        }
    }

    /// Play `pos` for `player`, refusing if it is not `player`'s turn.
    /// Once the game is over every move is refused with [`IllegalMove::GameOver`].
    pub fn apply_move_for(
        &mut self,
        player: Player,
        pos: Position,
    ) -> Result<Transition, IllegalMove> {
        if self.is_terminal() {
            return Err(IllegalMove::GameOver);
        }
        if player != self.active_player {
            return Err(IllegalMove::NotYourTurn { player });
        }
        self.apply_move(pos)
    }

    /// Play `pos` for the side to move and pass the turn on.
    ///
    /// On error the state is unchanged.
    pub fn apply_move(&mut self, pos: Position) -> Result<Transition, IllegalMove> {
        let mover = self.active_player;
        let flips = rules::flips_for(&self.board, pos, mover);

        if flips.is_empty() {
            if self.is_terminal() {
                return Err(IllegalMove::GameOver);
            }
            return Err(IllegalMove::NoCapture {
                position: pos,
                player: mover,
            });
        }

        rules::apply(&mut self.board, pos, mover, &flips);
        debug!(player = %mover, position = %pos, flipped = flips.len(), "applied move");

        let opponent = !mover;
        let transition = if rules::has_legal_move(&self.board, opponent) {
            self.active_player = opponent;
            Transition::Alternated
        } else if rules::has_legal_move(&self.board, mover) {
            info!(skipped = %opponent, "no legal move, turn stays with {}", mover);
            Transition::OpponentPassed
        } else {
            self.active_player = opponent;
            info!(tally = %self.tally(), "game over");
            Transition::Finished
        };

        Ok(transition)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        if self.is_terminal() {
            write!(f, "Game over. {}", self.tally())
        } else {
            write!(f, "{} to move. {}", self.active_player, self.tally())
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
    fn player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::default(), Player::Black);
    }

    #[test]
    fn player_from_str() {
        assert_eq!(Player::from_str("black"), Ok(Player::Black));
        assert_eq!(Player::from_str("W"), Ok(Player::White));
        assert_eq!(Player::from_str("grey"), Err(ParsePlayerError));
        assert_eq!(Player::White.to_string(), "White");
    }

    #[test]
    fn new_game_black_to_move() {
        let game = GameState::new();
        assert_eq!(game.active_player(), Player::Black);
        assert_eq!(game.legal_moves().len(), 4);
        assert!(!game.is_terminal());
        assert_eq!(game.outcome(), None);
        assert_eq!(game.tally(), ScoreTally { black: 2, white: 2 });
    }

    #[test]
    fn apply_move_alternates() {
        let mut game = GameState::new();
        assert_eq!(game.apply_move(pos(2, 3)), Ok(Transition::Alternated));
        assert_eq!(game.active_player(), Player::White);
        assert_eq!(game.board().get(pos(3, 3)), CellState::Black);
        assert_eq!(game.tally(), ScoreTally { black: 4, white: 1 });
    }

    #[test]
    fn illegal_move_leaves_state_unchanged() {
        let mut game = GameState::new();
        let before = game;

        assert_eq!(
            game.apply_move(pos(0, 0)),
            Err(IllegalMove::NoCapture {
                position: pos(0, 0),
                player: Player::Black
            })
        );
        assert_eq!(
            game.apply_move(pos(3, 3)),
            Err(IllegalMove::NoCapture {
                position: pos(3, 3),
                player: Player::Black
            })
        );
        assert_eq!(
            game.apply_move_for(Player::White, pos(2, 4)),
            Err(IllegalMove::NotYourTurn {
                player: Player::White
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn tally_outcome() {
        assert_eq!(ScoreTally { black: 40, white: 24 }.outcome(), Outcome::BlackWins);
        assert_eq!(ScoreTally { black: 3, white: 9 }.outcome(), Outcome::WhiteWins);
        assert_eq!(ScoreTally { black: 32, white: 32 }.outcome(), Outcome::Tie);
        assert_eq!(Outcome::WhiteWins.winner(), Some(Player::White));
        assert_eq!(Outcome::Tie.winner(), None);
    }

    #[test]
    fn replay_matches_manual_play() {
        let transcript = [pos(2, 3), pos(2, 2), pos(3, 2)];
        let mut game = GameState::new();
        for &p in &transcript {
            game.apply_move(p).unwrap();
        }
        assert_eq!(GameState::replay(transcript.iter().copied()), Ok(game));
    }

    #[test]
    fn replay_reports_illegal_move() {
        let transcript = [pos(2, 3), pos(2, 3)];
        assert_eq!(
            GameState::replay(transcript.iter().copied()),
            Err(IllegalMove::NoCapture {
                position: pos(2, 3),
                player: Player::White
            })
        );
    }
}
