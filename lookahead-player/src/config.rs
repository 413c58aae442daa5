use lookahead_othello::Player;
use std::time::Duration;

/// How a game is hosted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayConfig {
    /// The side a person plays from the terminal; None for engine self-play.
    pub human: Option<Player>,
    /// How long the engine pauses before each move.
    pub thinking_delay: Duration,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Some(Player::Black),
            thinking_delay: Duration::from_millis(500),
        }
    }
}
