//! [`Connector`] for a person typing moves on the terminal.

use super::Connector;
use anyhow::{bail, Context};
use async_std::io::{self, prelude::*};
use async_trait::async_trait;
use lookahead_othello::{GameState, IllegalMove, Player, Position, Transition};

pub struct TerminalConnector {
    player: Player,
}

impl TerminalConnector {
    pub fn new(player: Player) -> Self {
        Self { player }
    }
}

async fn prompt(player: Player) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    stdout
        .write_all(format!("{} to move: ", player).as_bytes())
        .await?;
    stdout.flush().await?;
    Ok(())
}

#[async_trait]
impl Connector for TerminalConnector {
    fn name(&self) -> &str {
        "terminal"
    }

    async fn next_move(&mut self, game: &GameState) -> anyhow::Result<Position> {
        println!("\n{}\n", game);
        println!("Legal moves: {}", game.legal_moves());

        loop {
            prompt(self.player).await?;

            let mut input_line = String::new();
            let read = io::stdin()
                .read_line(&mut input_line)
                .await
                .context("reading a move from stdin")?;
            if read == 0 {
                bail!("stdin closed before {} moved", self.player);
            }

            match input_line.trim().parse() {
                Ok(pos) => return Ok(pos),
                Err(_) => println!("Cannot parse move. Enter a square like D3."),
            }
        }
    }

    fn reject(&mut self, err: &IllegalMove) {
        println!("Invalid move: {}. Please select a valid cell.", err);
    }

    fn observe(&mut self, game: &GameState, player: Player, pos: Position, transition: Transition) {
        if player != self.player {
            println!("{} plays {}.", player, pos);
        }
        if transition == Transition::OpponentPassed {
            println!("{} has no valid moves. {} moves again.", !player, player);
        }
        if transition == Transition::Finished {
            println!("\n{}\n", game);
        }
    }
}
