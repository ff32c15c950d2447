use std::fmt;

pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Cross,
    Circle,
}

impl Mark {
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Cross => Some(Player::Cross),
            Mark::Circle => Some(Player::Circle),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::Cross => Mark::Cross,
            Player::Circle => Mark::Circle,
        }
    }
}

/// A side of the game. Cross always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Cross,
    Circle,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::Cross => 'X',
            Player::Circle => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Cross => write!(f, "cross"),
            Player::Circle => write!(f, "circle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; BOARD_SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    OutOfRange { row: usize, col: usize },
    CellOccupied(Position),
    NoLegalMove,
    InvalidMarkCount { cross: usize, circle: usize },
    GameOver,
    ComputerMovePending,
    NotHumanTurn,
    NotComputerTurn,
}

impl fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicTacToeError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is outside the {}x{} board", row, col, BOARD_SIZE, BOARD_SIZE)
            }
            TicTacToeError::CellOccupied(position) => write!(f, "Cell {} is already marked", position),
            TicTacToeError::NoLegalMove => write!(f, "No empty cell left to move to"),
            TicTacToeError::InvalidMarkCount { cross, circle } => write!(
                f,
                "Invalid mark count: {} crosses and {} circles",
                cross, circle
            ),
            TicTacToeError::GameOver => write!(f, "Game is already over"),
            TicTacToeError::ComputerMovePending => write!(f, "Computer move is still pending"),
            TicTacToeError::NotHumanTurn => write!(f, "It is the computer's turn"),
            TicTacToeError::NotComputerTurn => write!(f, "It is not the computer's turn"),
        }
    }
}

impl std::error::Error for TicTacToeError {}

pub type TicTacToeResult<T> = Result<T, TicTacToeError>;
