//! Hosts a single game between two [`Connector`]s.

use crate::connectors::{Connector, EngineConnector, TerminalConnector};
use crate::{Advisor, PlayConfig};
use anyhow::Context;
use lookahead_othello::{GameState, Player, Transition};
use tracing::{info, warn};

/// How many refused moves in a row a side may submit before the game is abandoned.
const MAX_REJECTIONS: usize = 16;

/// Build the connectors for Black and White described by `config`.
pub fn connectors_for(config: &PlayConfig) -> (Box<dyn Connector>, Box<dyn Connector>) {
    let side = |player: Player| -> Box<dyn Connector> {
        if config.human == Some(player) {
            Box::new(TerminalConnector::new(player))
        } else {
            Box::new(EngineConnector::new(
                Advisor::default(),
                config.thinking_delay,
            ))
        }
    };

    (side(Player::Black), side(Player::White))
}

/// Play a game from `game` until neither side can move, and return the final state.
///
/// Each turn the side to move is asked for a move, which is applied before the
/// next request is made. Refused moves are reported back and asked for again.
pub async fn play_from<'a>(
    mut game: GameState,
    black: &'a mut dyn Connector,
    white: &'a mut dyn Connector,
) -> anyhow::Result<GameState> {
    let mut rejections = 0;

    while !game.is_terminal() {
        let player = game.active_player();
        let connector = match player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };

        let pos = connector
            .next_move(&game)
            .await
            .with_context(|| format!("getting a move for {} from {}", player, connector.name()))?;

        let transition = match game.apply_move_for(player, pos) {
            Ok(transition) => transition,
            Err(err) => {
                warn!(%player, position = %pos, connector = connector.name(), "refused move: {}", err);
                connector.reject(&err);
                rejections += 1;
                if rejections >= MAX_REJECTIONS {
                    anyhow::bail!("{} made {} illegal moves in a row", player, rejections);
                }
                continue;
            }
        };
        rejections = 0;

        info!(%player, position = %pos, tally = %game.tally(), "move");
        if transition == Transition::OpponentPassed {
            info!("{} has no legal move; {} moves again", !player, player);
        }

        black.observe(&game, player, pos, transition);
        white.observe(&game, player, pos, transition);
    }

    if let Some(outcome) = game.outcome() {
        info!(%outcome, tally = %game.tally(), "game over");
    }
    Ok(game)
}

/// Play a game from the starting position.
pub async fn play_game<'a>(
    black: &'a mut dyn Connector,
    white: &'a mut dyn Connector,
) -> anyhow::Result<GameState> {
    play_from(GameState::new(), black, white).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lookahead_othello::{IllegalMove, Position};
    use std::time::Duration;

    /// Plays a fixed list of moves, recording what it is told.
    struct Scripted {
        moves: Vec<Position>,
        rejected: usize,
        observed: usize,
    }

    impl Scripted {
        fn new(moves: &[(usize, usize)]) -> Self {
            Self {
                moves: moves
                    .iter()
                    .rev()
                    .map(|&(row, col)| Position::new(row, col).unwrap())
                    .collect(),
                rejected: 0,
                observed: 0,
            }
        }
    }

    #[async_trait]
    impl Connector for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn next_move(&mut self, _game: &GameState) -> anyhow::Result<Position> {
            self.moves.pop().context("script ran out")
        }

        fn reject(&mut self, _err: &IllegalMove) {
            self.rejected += 1;
        }

        fn observe(&mut self, _: &GameState, _: Player, _: Position, _: Transition) {
            self.observed += 1;
        }
    }

    fn engine() -> EngineConnector {
        EngineConnector::new(Advisor::default(), Duration::from_millis(0))
    }

    #[test]
    fn engine_self_play_finishes() {
        let final_state =
            async_std::task::block_on(play_game(&mut engine(), &mut engine())).unwrap();
        assert!(final_state.is_terminal());
        assert!(final_state.outcome().is_some());
    }

    #[test]
    fn engine_self_play_is_deterministic() {
        let first = async_std::task::block_on(play_game(&mut engine(), &mut engine())).unwrap();
        let second = async_std::task::block_on(play_game(&mut engine(), &mut engine())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn refused_move_is_asked_again() {
        // Black first tries an occupied square, then D3; the script then runs out.
        let mut black = Scripted::new(&[(3, 3), (2, 3)]);
        let mut white = engine();

        let result = async_std::task::block_on(play_game(&mut black, &mut white));

        assert!(result.is_err());
        assert_eq!(black.rejected, 1);
        // D3 and the engine's reply were both observed.
        assert_eq!(black.observed, 2);
    }

    #[test]
    fn sides_from_different_scopes() {
        let mut black = engine();
        let white_seen = {
            // The engine opens with D3, after which C3 is legal for White.
            let mut white = Scripted::new(&[(2, 2)]);
            let result = async_std::task::block_on(play_game(&mut black, &mut white));
            assert!(result.is_err());
            assert!(white.moves.is_empty());
            assert_eq!(white.rejected, 0);
            white.observed
        };
        assert!(white_seen >= 2);
    }

    #[test]
    fn connectors_follow_config() {
        let config = PlayConfig {
            human: Some(Player::White),
            thinking_delay: Duration::from_millis(0),
        };
        let (black, white) = connectors_for(&config);
        assert_eq!(black.name(), "engine");
        assert_eq!(white.name(), "terminal");

        let self_play = PlayConfig {
            human: None,
            ..config
        };
        let (black, white) = connectors_for(&self_play);
        assert_eq!(black.name(), "engine");
        assert_eq!(white.name(), "engine");
    }
}
