use crate::{Move, Player};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything needed to rebuild a session: who started and every move since.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameData {
    pub game_id: Uuid,
    pub first_player: Player,
    pub moves: Vec<Move>,
}

impl GameData {
    pub fn new_with_id(game_id: Uuid, first_player: Player) -> Self {
        Self {
            game_id,
            first_player,
            moves: vec![],
        }
    }

    pub fn add_move(&mut self, m: Move) {
        self.moves.push(m);
    }
}
