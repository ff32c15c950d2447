use crate::debug_log;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::{Outcome, Player, Position, TicTacToeError, TicTacToeResult};

pub const WIN_SCORE: i32 = 10;
pub const LOSE_SCORE: i32 = -WIN_SCORE;
pub const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub current_player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_player: state.current_player(),
        }
    }
}

pub fn calculate_move(input: &BotInput) -> TicTacToeResult<Position> {
    find_best_move(&input.board, input.current_player)
}

/// Returns the move that maximizes `maximizer`'s worst-case score.
///
/// The search runs on a private copy of `board`. Among equally scored moves
/// the earliest in row-major order is chosen, except that a move completing a
/// line right away is always preferred.
pub fn find_best_move(board: &Board, maximizer: Player) -> TicTacToeResult<Position> {
    let mut scratch = *board;

    if scratch.is_full() {
        return Err(TicTacToeError::NoLegalMove);
    }

    if let Some(position) = find_winning_move(&mut scratch, maximizer)? {
        debug_log!("{} completes a line at {}", maximizer, position);
        return Ok(position);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in scratch.empty_cells() {
        let mut placed = scratch.place_scratch(position, maximizer)?;
        let score = minimax(&mut placed, maximizer, false)?;
        drop(placed);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    let position = best_move.ok_or(TicTacToeError::NoLegalMove)?;
    debug_log!("Best move for {} is {} with score {}", maximizer, position, best_score);
    Ok(position)
}

fn find_winning_move(board: &mut Board, player: Player) -> TicTacToeResult<Option<Position>> {
    for position in board.empty_cells() {
        let placed = board.place_scratch(position, player)?;
        if placed.winner() == Some(player) {
            return Ok(Some(position));
        }
    }
    Ok(None)
}

/// Full-depth minimax without pruning. Scores are relative to `maximizer`
/// and are not discounted by depth.
pub fn minimax(board: &mut Board, maximizer: Player, is_maximizer_turn: bool) -> TicTacToeResult<i32> {
    match board.outcome() {
        Outcome::Win(player) if player == maximizer => return Ok(WIN_SCORE),
        Outcome::Win(_) => return Ok(LOSE_SCORE),
        Outcome::Draw => return Ok(DRAW_SCORE),
        Outcome::InProgress => {}
    }

    let mover = if is_maximizer_turn {
        maximizer
    } else {
        maximizer.opponent()
    };

    let mut best = if is_maximizer_turn { i32::MIN } else { i32::MAX };

    for position in board.empty_cells() {
        let mut placed = board.place_scratch(position, mover)?;
        let score = minimax(&mut placed, maximizer, !is_maximizer_turn)?;

        best = if is_maximizer_turn {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    Ok(best)
}
