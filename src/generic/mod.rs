mod arbiter;
mod board;
mod error;
mod field;
mod game_data;
mod gamestate;
mod line;
mod r#move;
mod player;

pub use arbiter::{check_draw, check_win, evaluate, Win};
pub use board::Board;
pub use error::{DecodeError, ErrorKind};
pub use field::Field;
pub use game_data::GameData;
pub use gamestate::{GameOutcome, GameState};
pub use line::{Line, Orientation, LINES};
pub use player::{ParsePlayerError, Player};
pub use r#move::{Coordinates, Move};
