//! `lookahead-player` plays Othello against a human or itself.
//!
//! [`Advisor`] picks moves by square value with a one-ply look at the
//! opponent's best reply. [`session::play_game`] is a minimal host: it asks a
//! [`Connector`] for each side's move and applies it to a
//! [`GameState`](lookahead_othello::GameState).

pub mod advisor;
pub mod connectors;
pub mod session;

mod config;

pub use advisor::{Advisor, Evaluation, PositionTable};
pub use config::PlayConfig;
pub use connectors::Connector;
