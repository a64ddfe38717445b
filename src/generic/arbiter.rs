use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Board, ErrorKind, Field, GameOutcome, GameState, Line, Orientation, Player, LINES};

/// A line held entirely by one player.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub player: Player,
    pub line: Line,
}

impl Win {
    pub fn orientation(&self) -> Orientation {
        self.line.orientation()
    }

    pub fn start(&self) -> usize {
        self.line.start()
    }
}

fn holds_line(board: &Board, line: &Line, field: Field) -> bool {
    line.cells().iter().all(|&index| board.get(index) == Ok(field))
}

fn find_win(board: &Board, player: Player) -> Option<Win> {
    let field = Field::from(player);
    LINES
        .iter()
        .find(|line| holds_line(board, line, field))
        .map(|line| Win {
            player,
            line: *line,
        })
}

/// Checks whether `symbol` holds a complete line on the board.
///
/// Lines are checked in the order of [`LINES`], so on a board where the player
/// holds more than one line the first row wins over any column, and any column
/// over a diagonal. A move that completes two lines at once reports the first.
///
/// Fails with [`ErrorKind::InvalidArgument`] for [`Field::Vacant`], since three
/// vacant fields in a row are not a win.
///
/// ```
/// use tictactoe::{check_win, Board, Field, Orientation, Player};
///
/// let x = Field::Occupied { player: Player::X };
/// let o = Field::Occupied { player: Player::O };
/// let v = Field::Vacant;
///
/// // X X X
/// // O O .
/// // . . .
/// let board = Board::from_fields([x, x, x, o, o, v, v, v, v]);
///
/// let win = check_win(&board, Player::X).unwrap().unwrap();
/// assert_eq!(win.orientation(), Orientation::Row);
/// assert_eq!(win.start(), 0);
/// assert_eq!(check_win(&board, Player::O), Ok(None));
/// ```
pub fn check_win(board: &Board, symbol: impl Into<Field>) -> Result<Option<Win>, ErrorKind> {
    match symbol.into() {
        Field::Vacant => Err(ErrorKind::InvalidArgument),
        Field::Occupied { player } => Ok(find_win(board, player)),
    }
}

/// True if the board is full and neither player holds a line.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
        && Player::ALL
            .iter()
            .all(|&player| find_win(board, player).is_none())
}

/// Evaluates the board after `last_mover` played.
///
/// Only the last mover can have completed a line with that move, so their win
/// is checked first, then the draw. Anything else hands the turn to the
/// opponent.
pub fn evaluate(board: &Board, last_mover: Player) -> GameState {
    let state = if let Some(win) = find_win(board, last_mover) {
        GameState::Ended {
            outcome: GameOutcome::Won {
                winner: win.player,
                line: win.line,
            },
        }
    } else if check_draw(board) {
        GameState::Ended {
            outcome: GameOutcome::Draw,
        }
    } else {
        GameState::InProgress {
            next_player: last_mover.other(),
        }
    };
    debug!("evaluated board after {} moved: {}", last_mover, state);
    state
}
