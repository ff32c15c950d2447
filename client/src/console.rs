use tictactoe_common::tictactoe::{
    BOARD_SIZE, Board, Line, Outcome, Position, TicTacToeGameState,
};

use crate::config::DisplayConfig;

pub const HELP_TEXT: &str = "Enter a cell number 1-9, or 'row col' (0-based). \
Other commands: 'restart', 'help', 'quit'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Position),
    Restart,
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "restart" | "r" => return Ok(Command::Restart),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [cell] => {
            let number: usize = cell
                .parse()
                .map_err(|_| format!("'{}' is not a command or cell number", input))?;
            if !(1..=BOARD_SIZE * BOARD_SIZE).contains(&number) {
                return Err(format!("Cell number must be between 1 and {}", BOARD_SIZE * BOARD_SIZE));
            }
            Ok(Command::Move(Position::from_index(number - 1)))
        }
        [row, col] => {
            let row = row.parse().map_err(|_| format!("Invalid row '{}'", row))?;
            let col = col.parse().map_err(|_| format!("Invalid column '{}'", col))?;
            Ok(Command::Move(Position::new(row, col)))
        }
        _ => Err(format!("Unrecognized input '{}'. {}", input, HELP_TEXT)),
    }
}

/// Draws the board. Empty cells show their cell number; cells of the winning
/// line are wrapped in asterisks.
pub fn render_board(board: &Board, display: &DisplayConfig, winning_line: Option<&Line>) -> String {
    let separator = vec!["---"; BOARD_SIZE].join("+");
    let rows: Vec<String> = board
        .rows_of_marks()
        .iter()
        .enumerate()
        .map(|(row, marks)| {
            marks
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let position = Position::new(row, col);
                    let symbol = match mark.player() {
                        Some(player) => display.symbol(player),
                        None => cell_number(position),
                    };
                    if winning_line.is_some_and(|line| line.contains(&position)) {
                        format!("*{}*", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join(format!("\n{}\n", separator).as_str())
}

fn cell_number(position: Position) -> char {
    char::from_digit((position.to_index() + 1) as u32, 10).unwrap_or('?')
}

pub fn status_message(state: &TicTacToeGameState, display: &DisplayConfig) -> String {
    match state.status() {
        Outcome::Win(player) => format!("{} wins! Congrats.", display.symbol(player)),
        Outcome::Draw => "Game over. It's a tie!".to_string(),
        Outcome::InProgress => {
            let symbol = display.symbol(state.current_player());
            if state.is_computer_turn() {
                format!("{} is thinking...", symbol)
            } else {
                format!("{}, your move!", symbol)
            }
        }
    }
}

pub fn render_state(state: &TicTacToeGameState, display: &DisplayConfig) -> String {
    let winning_line = state.winning_line();
    format!(
        "\n{}\n\n{}",
        render_board(state.board(), display, winning_line.as_ref()),
        status_message(state, display)
    )
}
