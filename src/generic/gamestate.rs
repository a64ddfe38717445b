use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Line, Player};

/// How a finished game ended. Nothing changes the board after this except a
/// reset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { winner: Player, line: Line },
    Draw,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won { winner, .. } => Some(*winner),
            GameOutcome::Draw => None,
        }
    }

    pub fn line(&self) -> Option<Line> {
        match self {
            GameOutcome::Won { line, .. } => Some(*line),
            GameOutcome::Draw => None,
        }
    }
}

impl Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Won { winner, line } => write!(f, "{} won ({})", winner, line),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress { next_player: Player },
    Ended { outcome: GameOutcome },
}

impl GameState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::InProgress { .. })
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            GameState::InProgress { .. } => None,
            GameState::Ended { outcome } => Some(*outcome),
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::InProgress { next_player } => write!(f, "in progress, {} to move", next_player),
            GameState::Ended { outcome } => write!(f, "{}", outcome),
        }
    }
}
