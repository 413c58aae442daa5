//! [`Connector`] backed by the [`Advisor`].

use super::Connector;
use crate::Advisor;
use anyhow::anyhow;
use async_std::task;
use async_trait::async_trait;
use lookahead_othello::{GameState, Position};
use std::time::Duration;

pub struct EngineConnector {
    advisor: Advisor,
    thinking_delay: Duration,
}

impl EngineConnector {
    pub fn new(advisor: Advisor, thinking_delay: Duration) -> Self {
        Self {
            advisor,
            thinking_delay,
        }
    }
}

#[async_trait]
impl Connector for EngineConnector {
    fn name(&self) -> &str {
        "engine"
    }

    async fn next_move(&mut self, game: &GameState) -> anyhow::Result<Position> {
        // Pause for show; the game cannot change while we wait.
        if !self.thinking_delay.is_zero() {
            task::sleep(self.thinking_delay).await;
        }

        let player = game.active_player();
        self.advisor
            .choose_move(game.board(), player)
            .ok_or_else(|| anyhow!("{} has no legal move", player))
    }
}
