use crate::Player;
use serde::{Deserialize, Serialize};

pub type Coordinates = (usize, usize);

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub index: usize,
    pub player: Player,
}

impl Move {
    pub fn new(index: usize, player: Player) -> Self {
        Self { index, player }
    }
}
