use async_trait::async_trait;
use lookahead_othello::{GameState, IllegalMove, Player, Position, Transition};

/// A source of moves for one side: a person, an engine, or anything else.
#[async_trait]
pub trait Connector: Send {
    /// A short name for log output.
    fn name(&self) -> &str;

    /// Pick a move for the side to move in `game`. Only called while that side
    /// has a legal move. May take as long as it likes; the game waits.
    async fn next_move(&mut self, game: &GameState) -> anyhow::Result<Position>;

    /// The move last returned by [`next_move`](Connector::next_move) was refused.
    fn reject(&mut self, _err: &IllegalMove) {}

    /// A move was applied, by either side.
    fn observe(&mut self, _game: &GameState, _player: Player, _pos: Position, _transition: Transition) {}
}
