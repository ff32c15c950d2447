use std::error::Error;
use std::time::Duration;

use tictactoe_common::tictactoe::{Board, TicTacToeError, TicTacToeGameState, find_best_move};
use tictactoe_common::{debug_log, log};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, sleep};

use crate::config::Config;
use crate::console::{Command, HELP_TEXT, parse_command, render_state};

/// Runs games on stdin/stdout until the player quits or input ends.
///
/// The computer move is committed after `think_delay_ms`; lines typed while
/// it is pending are rejected rather than queued.
pub async fn run_game(config: Config, session: &mut TicTacToeGameState) -> Result<(), Box<dyn Error>> {
    let display = config.display;
    let delay = Duration::from_millis(config.game.think_delay_ms);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let timer = sleep(delay);
    tokio::pin!(timer);
    let mut snapshot: Option<Board> = None;

    println!("{}", HELP_TEXT);
    println!("{}", render_state(session, &display));

    loop {
        if session.is_computer_turn() && !session.is_computer_pending() {
            snapshot = Some(session.begin_computer_move()?);
            timer.as_mut().reset(Instant::now() + delay);
        }

        tokio::select! {
            _ = &mut timer, if session.is_computer_pending() => {
                let Some(board) = snapshot.take() else {
                    return Err(TicTacToeError::NotComputerTurn.into());
                };
                let player = session.current_player();
                let position = tokio::task::spawn_blocking(move || find_best_move(&board, player)).await??;
                session.commit_computer_move(position)?;
                println!("{}", render_state(session, &display));
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug_log!("Input closed");
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP_TEXT),
                    Ok(Command::Restart) => {
                        snapshot = None;
                        session.restart();
                        println!("{}", render_state(session, &display));
                    }
                    Ok(Command::Move(position)) => match session.place_mark(position) {
                        Ok(_) => println!("{}", render_state(session, &display)),
                        Err(TicTacToeError::GameOver) => {
                            println!("The game is over. Type 'restart' to play again or 'quit' to exit.");
                        }
                        Err(e) => println!("{}", e),
                    },
                    Err(message) => println!("{}", message),
                }
            }
        }
    }

    log!("Leaving game");
    Ok(())
}
