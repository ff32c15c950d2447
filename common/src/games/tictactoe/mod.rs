mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, EmptyCells, ScratchMove};
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSE_SCORE, WIN_SCORE, calculate_move, find_best_move, minimax,
};
pub use game_state::TicTacToeGameState;
pub use types::{
    BOARD_SIZE, Line, Mark, Outcome, Player, Position, TicTacToeError, TicTacToeResult,
};
pub use win_detector::{LINES, check_win, check_win_with_line};
