//! Utilities used for testing and benchmarking.

pub mod perft;
pub use perft::run_perft;

pub mod play;
pub use play::{random_game, Playout};
