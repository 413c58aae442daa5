use std::time::Duration;

use clap::{Parser, ValueEnum};
use lookahead_othello::Player;
use lookahead_player::session::{connectors_for, play_game};
use lookahead_player::PlayConfig;
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    Black,
    White,
    /// The engine plays both sides
    None,
}

impl Side {
    fn player(self) -> Option<Player> {
        match self {
            Side::Black => Some(Player::Black),
            Side::White => Some(Player::White),
            Side::None => None,
        }
    }
}

#[derive(Parser)]
#[command(about = "Play Othello against the lookahead engine")]
struct Args {
    /// The side you play from the terminal
    #[arg(long, value_enum, default_value_t = Side::Black)]
    human: Side,

    /// How long the engine waits before each move, in milliseconds
    #[arg(short, long, default_value_t = 500)]
    delay_ms: u64,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

#[async_std::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let config = PlayConfig {
        human: args.human.player(),
        thinking_delay: Duration::from_millis(args.delay_ms),
    };
    debug!(?config, "starting game");

    let (mut black, mut white) = connectors_for(&config);
    let game = play_game(black.as_mut(), white.as_mut()).await?;

    let tally = game.tally();
    match game.outcome().and_then(|outcome| outcome.winner()) {
        Some(winner) => println!("{} wins! {}", winner, tally),
        None => println!("It's a tie! {}", tally),
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Moves and prompts go to stdout, so logs stay on stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
