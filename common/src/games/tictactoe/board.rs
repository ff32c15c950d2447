use std::ops::{Deref, DerefMut};

use super::types::{
    BOARD_SIZE, Line, Mark, Outcome, Player, Position, TicTacToeError, TicTacToeResult,
};
use super::win_detector::{LINES, check_win_with_line};

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The authoritative 3x3 grid. Cheap to copy; search works on copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw rows without checking the mark-count invariant.
    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows_of_marks(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> TicTacToeResult<Mark> {
        check_range(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn get_at(&self, position: Position) -> TicTacToeResult<Mark> {
        self.get(position.row, position.col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: Mark) -> TicTacToeResult<()> {
        check_range(row, col)?;
        if !self.cells[row][col].is_empty() {
            return Err(TicTacToeError::CellOccupied(Position::new(row, col)));
        }
        self.cells[row][col] = value;
        Ok(())
    }

    pub fn set_at(&mut self, position: Position, value: Mark) -> TicTacToeResult<()> {
        self.set(position.row, position.col, value)
    }

    pub fn rows(&self) -> &'static [Line] {
        &LINES[..BOARD_SIZE]
    }

    pub fn columns(&self) -> &'static [Line] {
        &LINES[BOARD_SIZE..2 * BOARD_SIZE]
    }

    pub fn diagonals(&self) -> &'static [Line] {
        &LINES[2 * BOARD_SIZE..]
    }

    pub fn lines(&self) -> &'static [Line] {
        &LINES
    }

    /// Empty positions in row-major order. The iterator owns a snapshot of
    /// the board, so the board may be mutated while iterating.
    pub fn empty_cells(&self) -> EmptyCells {
        EmptyCells {
            board: *self,
            next_index: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == mark).count()
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(player) = self.winner() {
            return Outcome::Win(player);
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|(player, _)| player)
    }

    pub fn winning_line(&self) -> Option<(Player, Line)> {
        check_win_with_line(&self.cells)
    }

    /// Cross moves first, so the side to move follows from the mark counts.
    pub fn next_player(&self) -> Player {
        if self.mark_count(Mark::Cross) > self.mark_count(Mark::Circle) {
            Player::Circle
        } else {
            Player::Cross
        }
    }

    pub fn validate_mark_counts(&self) -> TicTacToeResult<()> {
        let cross = self.mark_count(Mark::Cross);
        let circle = self.mark_count(Mark::Circle);
        if cross == circle || cross == circle + 1 {
            Ok(())
        } else {
            Err(TicTacToeError::InvalidMarkCount { cross, circle })
        }
    }

    /// Places `player` on an empty cell for the lifetime of the returned guard.
    pub fn place_scratch(
        &mut self,
        position: Position,
        player: Player,
    ) -> TicTacToeResult<ScratchMove<'_>> {
        self.set_at(position, player.into())?;
        Ok(ScratchMove {
            board: self,
            position,
        })
    }
}

fn check_range(row: usize, col: usize) -> TicTacToeResult<()> {
    if !Position::new(row, col).is_on_board() {
        return Err(TicTacToeError::OutOfRange { row, col });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct EmptyCells {
    board: Board,
    next_index: usize,
}

impl Iterator for EmptyCells {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while self.next_index < CELL_COUNT {
            let position = Position::from_index(self.next_index);
            self.next_index += 1;
            if self.board.cells[position.row][position.col].is_empty() {
                return Some(position);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CELL_COUNT - self.next_index))
    }
}

/// A mark placed for exploration. Dropping the guard empties the cell again.
pub struct ScratchMove<'a> {
    board: &'a mut Board,
    position: Position,
}

impl ScratchMove<'_> {
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Deref for ScratchMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for ScratchMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for ScratchMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position.row][self.position.col] = Mark::Empty;
    }
}
