use crate::{debug_log, log};
use super::board::Board;
use super::bot_controller::find_best_move;
use super::types::{Line, Outcome, Player, Position, TicTacToeError, TicTacToeResult};

/// One game between two sides, at most one of them played by the computer.
///
/// The board here is the only source of truth; renderers read it and never
/// write back.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    computer: Option<Player>,
    current_player: Player,
    status: Outcome,
    last_move: Option<Position>,
    computer_pending: bool,
}

impl TicTacToeGameState {
    pub fn new(computer: Option<Player>) -> Self {
        Self {
            board: Board::new(),
            computer,
            current_player: Player::Cross,
            status: Outcome::InProgress,
            last_move: None,
            computer_pending: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn computer(&self) -> Option<Player> {
        self.computer
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            Outcome::Win(_) => self.board.winning_line().map(|(_, line)| line),
            _ => None,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == Outcome::InProgress && self.computer == Some(self.current_player)
    }

    pub fn is_computer_pending(&self) -> bool {
        self.computer_pending
    }

    pub fn place_mark(&mut self, position: Position) -> TicTacToeResult<Outcome> {
        self.ensure_in_progress()?;
        if self.computer_pending {
            return Err(TicTacToeError::ComputerMovePending);
        }
        if self.is_computer_turn() {
            return Err(TicTacToeError::NotHumanTurn);
        }
        self.commit(position)
    }

    /// Marks the computer move as outstanding and hands out a board snapshot
    /// to search on. Human moves are rejected until the move is committed.
    pub fn begin_computer_move(&mut self) -> TicTacToeResult<Board> {
        self.ensure_in_progress()?;
        if self.computer_pending {
            return Err(TicTacToeError::ComputerMovePending);
        }
        if !self.is_computer_turn() {
            return Err(TicTacToeError::NotComputerTurn);
        }
        self.computer_pending = true;
        debug_log!("{} is thinking", self.current_player);
        Ok(self.board)
    }

    pub fn commit_computer_move(&mut self, position: Position) -> TicTacToeResult<Outcome> {
        if !self.computer_pending {
            return Err(TicTacToeError::NotComputerTurn);
        }
        let outcome = self.commit(position)?;
        self.computer_pending = false;
        Ok(outcome)
    }

    pub fn play_computer_move(&mut self) -> TicTacToeResult<Position> {
        let snapshot = self.begin_computer_move()?;
        let position = match find_best_move(&snapshot, self.current_player) {
            Ok(position) => position,
            Err(e) => {
                self.computer_pending = false;
                return Err(e);
            }
        };
        self.commit_computer_move(position)?;
        Ok(position)
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.computer);
        log!("Game restarted");
    }

    fn ensure_in_progress(&self) -> TicTacToeResult<()> {
        if self.status.is_over() {
            return Err(TicTacToeError::GameOver);
        }
        Ok(())
    }

    fn commit(&mut self, position: Position) -> TicTacToeResult<Outcome> {
        self.board.set_at(position, self.current_player.into())?;
        self.last_move = Some(position);
        debug_log!("{} marks {}", self.current_player, position);

        self.status = self.board.outcome();
        match self.status {
            Outcome::InProgress => self.current_player = self.current_player.opponent(),
            Outcome::Win(player) => debug_log!("{} wins", player),
            Outcome::Draw => debug_log!("Game over, it's a tie"),
        }
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark;

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) -> Outcome {
        let mut outcome = state.status();
        for &(row, col) in moves {
            outcome = state.place_mark(Position::new(row, col)).unwrap();
        }
        outcome
    }

    #[test]
    fn test_new_game_starts_with_cross() {
        let state = TicTacToeGameState::new(Some(Player::Circle));
        assert_eq!(state.current_player(), Player::Cross);
        assert_eq!(state.status(), Outcome::InProgress);
        assert!(!state.is_computer_turn());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new(None);
        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(state.current_player(), Player::Circle);
        state.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(state.current_player(), Player::Cross);
        assert_eq!(state.board().get(1, 1), Ok(Mark::Circle));
        assert_eq!(state.last_move(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut state = TicTacToeGameState::new(None);
        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(
            state.place_mark(Position::new(0, 0)),
            Err(TicTacToeError::CellOccupied(Position::new(0, 0)))
        );
        assert_eq!(state.current_player(), Player::Circle);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = TicTacToeGameState::new(None);
        let outcome = play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(outcome, Outcome::Win(Player::Cross));
        assert_eq!(state.current_player(), Player::Cross);
        assert_eq!(
            state.winning_line(),
            Some([Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)])
        );
        assert_eq!(state.place_mark(Position::new(2, 2)), Err(TicTacToeError::GameOver));
    }

    #[test]
    fn test_draw_ends_game() {
        let mut state = TicTacToeGameState::new(None);
        let outcome = play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_human_cannot_move_for_computer() {
        let mut state = TicTacToeGameState::new(Some(Player::Circle));
        state.place_mark(Position::new(0, 0)).unwrap();
        assert!(state.is_computer_turn());
        assert_eq!(state.place_mark(Position::new(1, 1)), Err(TicTacToeError::NotHumanTurn));
    }

    #[test]
    fn test_human_move_rejected_while_computer_pending() {
        let mut state = TicTacToeGameState::new(Some(Player::Circle));
        state.place_mark(Position::new(0, 0)).unwrap();

        let snapshot = state.begin_computer_move().unwrap();
        assert!(state.is_computer_pending());
        assert_eq!(snapshot, *state.board());
        assert_eq!(
            state.place_mark(Position::new(2, 2)),
            Err(TicTacToeError::ComputerMovePending)
        );
        assert_eq!(state.begin_computer_move(), Err(TicTacToeError::ComputerMovePending));

        let position = find_best_move(&snapshot, Player::Circle).unwrap();
        state.commit_computer_move(position).unwrap();
        assert!(!state.is_computer_pending());
        assert_eq!(state.board().get_at(position), Ok(Mark::Circle));
        assert_eq!(state.current_player(), Player::Cross);
    }

    #[test]
    fn test_begin_computer_move_on_human_turn_fails() {
        let mut state = TicTacToeGameState::new(Some(Player::Circle));
        assert_eq!(state.begin_computer_move(), Err(TicTacToeError::NotComputerTurn));
        assert_eq!(
            state.commit_computer_move(Position::new(0, 0)),
            Err(TicTacToeError::NotComputerTurn)
        );
    }

    #[test]
    fn test_computer_takes_immediate_win() {
        let mut state = TicTacToeGameState::new(Some(Player::Circle));
        play(&mut state, &[(0, 0)]);
        assert_eq!(state.play_computer_move(), Ok(Position::new(1, 1)));
        play(&mut state, &[(2, 2)]);
        assert_eq!(state.play_computer_move(), Ok(Position::new(0, 1)));
        play(&mut state, &[(2, 0)]);

        assert_eq!(state.play_computer_move(), Ok(Position::new(2, 1)));
        assert_eq!(state.status(), Outcome::Win(Player::Circle));
        assert!(!state.is_computer_pending());
        assert!(!state.is_computer_turn());
    }

    #[test]
    fn test_optimal_self_play_is_a_draw() {
        let mut state = TicTacToeGameState::new(None);
        let mut moves = 0;
        while !state.status().is_over() {
            let position = find_best_move(state.board(), state.current_player()).unwrap();
            state.place_mark(position).unwrap();
            moves += 1;
        }
        assert_eq!(state.status(), Outcome::Draw);
        assert_eq!(moves, 9);
    }

    #[test]
    fn test_computer_opens_when_playing_cross() {
        let mut state = TicTacToeGameState::new(Some(Player::Cross));
        assert!(state.is_computer_turn());
        let position = state.play_computer_move().unwrap();
        assert_eq!(position, Position::new(0, 0));
        assert_eq!(state.current_player(), Player::Circle);
    }

    #[test]
    fn test_restart_resets_everything_but_computer_side() {
        let mut state = TicTacToeGameState::new(Some(Player::Circle));
        play(&mut state, &[(0, 0)]);
        state.begin_computer_move().unwrap();
        state.restart();
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_player(), Player::Cross);
        assert_eq!(state.status(), Outcome::InProgress);
        assert!(!state.is_computer_pending());
        assert_eq!(state.computer(), Some(Player::Circle));
    }
}
