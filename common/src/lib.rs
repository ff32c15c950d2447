//! Tic-tac-toe rules, board model and an exhaustive minimax opponent.

pub mod config;
pub mod games;
pub mod logger;

pub use games::tictactoe;
