mod config;
mod console;
mod runner;

use clap::Parser;
use tictactoe_common::config::Validate;
use tictactoe_common::tictactoe::TicTacToeGameState;
use tictactoe_common::{log, logger};

use config::{ComputerSide, Config, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe in the terminal")]
struct Args {
    /// Path of the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Side played by the computer
    #[arg(long, value_enum)]
    computer: Option<ComputerSide>,

    /// Delay before the computer commits its move
    #[arg(long)]
    think_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(computer) = self.computer {
            config.game.computer = computer;
        }
        if let Some(think_delay_ms) = self.think_delay_ms {
            config.game.think_delay_ms = think_delay_ms;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let mut config = get_config_manager(args.config.as_deref()).get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    let computer = config.game.computer.resolve(&mut rand::rng());
    match computer {
        Some(player) => log!(
            "Computer plays {} with a {} ms delay",
            player,
            config.game.think_delay_ms
        ),
        None => log!("Two players, no computer"),
    }

    let mut session = TicTacToeGameState::new(computer);
    runner::run_game(config, &mut session).await
}
