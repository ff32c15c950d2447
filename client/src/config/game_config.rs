use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::tictactoe::Player;

pub const MAX_THINK_DELAY_MS: u64 = 10_000;

/// Which side, if any, the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ComputerSide {
    Nobody,
    Cross,
    Circle,
    Random,
}

impl ComputerSide {
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Option<Player> {
        match self {
            ComputerSide::Nobody => None,
            ComputerSide::Cross => Some(Player::Cross),
            ComputerSide::Circle => Some(Player::Circle),
            ComputerSide::Random => {
                if rng.random_bool(0.5) {
                    Some(Player::Cross)
                } else {
                    Some(Player::Circle)
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub computer: ComputerSide,
    pub think_delay_ms: u64,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "think_delay_ms must not exceed {} (got {})",
                MAX_THINK_DELAY_MS, self.think_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            computer: ComputerSide::Circle,
            think_delay_ms: 1000,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub cross_symbol: char,
    pub circle_symbol: char,
}

impl DisplayConfig {
    pub fn symbol(&self, player: Player) -> char {
        match player {
            Player::Cross => self.cross_symbol,
            Player::Circle => self.circle_symbol,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        for symbol in [self.cross_symbol, self.circle_symbol] {
            if symbol.is_ascii_digit() || symbol.is_whitespace() || symbol == '*' {
                return Err(format!("Symbol '{}' cannot be used for a player", symbol));
            }
        }
        if self.cross_symbol == self.circle_symbol {
            return Err("Cross and circle symbols must differ".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cross_symbol: Player::Cross.symbol(),
            circle_symbol: Player::Circle.symbol(),
        }
    }
}
