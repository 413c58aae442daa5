//! Connectors supply the moves for one side of a game.

mod connector;
mod engine;
mod terminal;

pub use connector::Connector;
pub use engine::EngineConnector;
pub use terminal::TerminalConnector;
