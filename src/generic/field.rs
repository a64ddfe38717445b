use serde::{Deserialize, Serialize};

use crate::Player;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    Vacant,
    Occupied { player: Player },
}

impl From<Player> for Field {
    fn from(player: Player) -> Self {
        Field::Occupied { player }
    }
}

impl Field {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Field::Vacant)
    }

    /// The character used when printing a board.
    pub fn symbol(&self) -> char {
        match self {
            Field::Vacant => '.',
            Field::Occupied { player: Player::X } => 'X',
            Field::Occupied { player: Player::O } => 'O',
        }
    }
}
