use log::warn;
use serde::{Deserialize, Serialize};

use crate::Player;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionArgs {
    pub first_player: Player,
}

impl Default for SessionArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionArgs {
    const DEFAULT_FIRST_PLAYER: Player = Player::X;

    pub fn new() -> Self {
        Self {
            first_player: SessionArgs::DEFAULT_FIRST_PLAYER,
        }
    }

    pub fn with_first_player(first_player: Player) -> Self {
        Self { first_player }
    }

    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        let first_player = match std::env::var("TICTACTOE_FIRST_PLAYER") {
            Ok(value) => value.parse::<Player>().unwrap_or_else(|e| {
                warn!(
                    "Ignoring TICTACTOE_FIRST_PLAYER: {}, {} starts",
                    e,
                    SessionArgs::DEFAULT_FIRST_PLAYER
                );
                SessionArgs::DEFAULT_FIRST_PLAYER
            }),
            Err(_) => SessionArgs::DEFAULT_FIRST_PLAYER,
        };

        Self { first_player }
    }
}
