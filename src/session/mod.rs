mod config;
mod events;

pub use config::SessionArgs;
pub use events::GameEndEvent;

use std::fmt::{Debug, Display};

use log::{debug, info};
use serde::Serialize;
use uuid::Uuid;

use crate::{evaluate, Board, Field, GameData, GameOutcome, GameState, Move, Player};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    FieldOccupied,
    GameEnded,
    OutOfBounds,
    NotYourTurn,
}

impl Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::FieldOccupied => write!(f, "the field is already occupied"),
            InvalidMove::GameEnded => write!(f, "the game has ended"),
            InvalidMove::OutOfBounds => write!(f, "the field is not on the board"),
            InvalidMove::NotYourTurn => write!(f, "it is not this player's turn"),
        }
    }
}

impl std::error::Error for InvalidMove {}

type GameEndHandler = Box<dyn FnMut(&GameEndEvent)>;

/// One game of tic-tac-toe, from the first move to the next reset.
///
/// The session owns the board and the turn. Every [`Session::play`] sets one
/// field and evaluates the board before returning, so a front end can feed
/// clicks straight into it. Once the game has ended the board is frozen until
/// [`Session::reset`].
pub struct Session {
    game_id: Uuid,
    args: SessionArgs,
    board: Board,
    current_player: Player,
    state: GameState,
    moves: Vec<Move>,
    on_game_end: Option<GameEndHandler>,
}

impl Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game_id", &self.game_id)
            .field("args", &self.args)
            .field("board", &self.board)
            .field("current_player", &self.current_player)
            .field("state", &self.state)
            .field("moves", &self.moves)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionArgs::default())
    }
}

impl TryFrom<GameData> for Session {
    type Error = InvalidMove;

    fn try_from(game_data: GameData) -> Result<Self, Self::Error> {
        let mut session = Session::new_with_id(
            game_data.game_id,
            SessionArgs::with_first_player(game_data.first_player),
        );
        for m in game_data.moves {
            session.insert_move(m.index, m.player)?;
        }
        Ok(session)
    }
}

impl Session {
    pub fn new(args: SessionArgs) -> Self {
        Self::new_with_id(Uuid::new_v4(), args)
    }

    pub fn new_with_id(game_id: Uuid, args: SessionArgs) -> Self {
        debug!("Created session {}, {} starts", game_id, args.first_player);
        Self {
            game_id,
            args,
            board: Board::new(),
            current_player: args.first_player,
            state: GameState::InProgress {
                next_player: args.first_player,
            },
            moves: Vec::new(),
            on_game_end: None,
        }
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_frozen(&self) -> bool {
        !self.state.is_in_progress()
    }

    /// Registers the handler called when the game ends, replacing any earlier
    /// one. It runs synchronously inside the [`Session::play`] that ended the
    /// game.
    pub fn on_game_end<F>(&mut self, handler: F)
    where
        F: FnMut(&GameEndEvent) + 'static,
    {
        self.on_game_end = Some(Box::new(handler));
    }

    /// Places the current player's mark on `index`.
    pub fn play(&mut self, index: usize) -> Result<GameState, InvalidMove> {
        self.insert_move(index, self.current_player)
    }

    /// Places `player`'s mark on `index`, provided it is their turn.
    ///
    /// A rejected move leaves the session untouched.
    pub fn insert_move(&mut self, index: usize, player: Player) -> Result<GameState, InvalidMove> {
        let new_move = Move::new(index, player);
        self.validate_move(new_move)?;

        self.board
            .set(new_move.index, Field::from(new_move.player))
            .map_err(|_| InvalidMove::OutOfBounds)?;
        self.moves.push(new_move);

        self.state = evaluate(&self.board, new_move.player);
        match self.state {
            GameState::InProgress { next_player } => self.current_player = next_player,
            GameState::Ended { outcome } => {
                info!("Game {} ended: {}", self.game_id, outcome);
                if let Some(handler) = self.on_game_end.as_mut() {
                    handler(&GameEndEvent { outcome });
                }
            }
        }
        Ok(self.state)
    }

    pub fn validate_move(&self, new_move: Move) -> Result<(), InvalidMove> {
        // GameEnded
        if self.is_frozen() {
            return Err(InvalidMove::GameEnded);
        }
        // NotYourTurn
        if self.current_player != new_move.player {
            return Err(InvalidMove::NotYourTurn);
        }
        // OutOfBounds, FieldOccupied
        match self.board.get(new_move.index) {
            Err(_) => Err(InvalidMove::OutOfBounds),
            Ok(Field::Occupied { .. }) => Err(InvalidMove::FieldOccupied),
            Ok(Field::Vacant) => Ok(()),
        }
    }

    /// Clears the board and the outcome and gives the first move back to the
    /// configured first player. The game id is kept.
    pub fn reset(&mut self) {
        self.board.reset();
        self.moves.clear();
        self.current_player = self.args.first_player;
        self.state = GameState::InProgress {
            next_player: self.args.first_player,
        };
        info!("Game {} reset", self.game_id);
    }

    /// The line shown under the board: whose turn it is, who won, or a draw.
    pub fn status_message(&self) -> String {
        match self.state {
            GameState::InProgress { next_player } => format!("Turn: {}", next_player),
            GameState::Ended { outcome } => match outcome.winner() {
                Some(winner) => format!("Winner: {}", winner),
                None => "Draw".to_string(),
            },
        }
    }

    pub fn snapshot(&self) -> GameData {
        let mut game_data = GameData::new_with_id(self.game_id, self.args.first_player);
        for m in &self.moves {
            game_data.add_move(*m);
        }
        game_data
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Orientation, LINES};
    use std::{cell::RefCell, rc::Rc};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // X X X
    // O O .
    // . . .
    fn x_wins_top_row() -> Vec<usize> {
        vec![0, 3, 1, 4, 2]
    }

    // X O X
    // X O O
    // O X X
    fn drawn_game() -> Vec<usize> {
        vec![0, 1, 2, 4, 3, 5, 7, 6, 8]
    }

    fn play_all(session: &mut Session, indices: &[usize]) -> GameState {
        let mut state = session.state();
        for (move_index, &index) in indices.iter().enumerate() {
            state = session.play(index).unwrap_or_else(|e| {
                panic!("expected move {} on {} to be valid: {}", move_index, index, e)
            });
        }
        state
    }

    #[test]
    fn new_session() {
        let session = Session::default();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(
            session.state(),
            GameState::InProgress {
                next_player: Player::X
            }
        );
        assert!(session.moves().is_empty());
        assert!(!session.is_frozen());
        assert_eq!(session.status_message(), "Turn: X");
    }

    #[test]
    fn turns_alternate() {
        init_logging();
        let mut session = Session::default();
        session.play(4).unwrap();
        assert_eq!(session.current_player(), Player::O);
        assert_eq!(session.status_message(), "Turn: O");
        session.play(0).unwrap();
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.board().get(4), Ok(Field::from(Player::X)));
        assert_eq!(session.board().get(0), Ok(Field::from(Player::O)));
        assert_eq!(
            session.moves(),
            &[Move::new(4, Player::X), Move::new(0, Player::O)]
        );
    }

    #[test]
    fn first_player_is_configurable() {
        let mut session = Session::new(SessionArgs::with_first_player(Player::O));
        assert_eq!(session.status_message(), "Turn: O");
        session.play(0).unwrap();
        assert_eq!(session.current_player(), Player::X);
        session.reset();
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn win() {
        init_logging();
        let mut session = Session::default();
        let state = play_all(&mut session, &x_wins_top_row());
        assert_eq!(
            state,
            GameState::Ended {
                outcome: GameOutcome::Won {
                    winner: Player::X,
                    line: LINES[0],
                }
            }
        );
        let line = session.outcome().and_then(|outcome| outcome.line());
        assert_eq!(line.map(|line| (line.orientation(), line.start())), Some((Orientation::Row, 0)));
        assert!(session.is_frozen());
        assert_eq!(session.status_message(), "Winner: X");
    }

    #[test]
    fn draw() {
        let mut session = Session::default();
        let state = play_all(&mut session, &drawn_game());
        assert_eq!(
            state,
            GameState::Ended {
                outcome: GameOutcome::Draw
            }
        );
        assert!(session.board().is_full());
        assert_eq!(session.status_message(), "Draw");
    }

    #[test]
    fn invalid_moves() {
        // things to test:
        // InvalidMove::FieldOccupied;
        // InvalidMove::GameEnded;
        // InvalidMove::NotYourTurn;
        // InvalidMove::OutOfBounds;
        let tests = vec![
            vec![
                (Move::new(0, Player::X), None),
                (Move::new(0, Player::O), Some(InvalidMove::FieldOccupied)),
            ],
            x_wins_top_row()
                .iter()
                .enumerate()
                .map(|(i, &index)| {
                    let player = if i % 2 == 0 { Player::X } else { Player::O };
                    (Move::new(index, player), None)
                })
                .chain(vec![(Move::new(8, Player::O), Some(InvalidMove::GameEnded))])
                .collect(),
            vec![
                (Move::new(0, Player::O), Some(InvalidMove::NotYourTurn)),
                (Move::new(4, Player::X), None),
                (Move::new(3, Player::X), Some(InvalidMove::NotYourTurn)),
                (Move::new(3, Player::O), None),
            ],
            vec![
                (Move::new(9, Player::X), Some(InvalidMove::OutOfBounds)),
                (Move::new(0, Player::X), None),
                (Move::new(usize::MAX, Player::O), Some(InvalidMove::OutOfBounds)),
                (Move::new(1, Player::O), None),
            ],
        ];

        for (test_index, game) in tests.iter().enumerate() {
            let mut session = Session::default();
            for (move_index, (new_move, expected_error)) in game.iter().enumerate() {
                let before = session.snapshot();
                let result = session.insert_move(new_move.index, new_move.player);
                match expected_error {
                    Some(expected_error) => {
                        assert_eq!(
                            result,
                            Err(*expected_error),
                            "Test {} failed: got {:?} instead of {:?} (move {})",
                            test_index,
                            result,
                            expected_error,
                            move_index
                        );
                        // after an invalid move, nothing should be changed
                        assert_eq!(session.snapshot(), before);
                    }
                    None => assert!(
                        result.is_ok(),
                        "Test {} failed: got {:?} instead of Ok (move {})",
                        test_index,
                        result,
                        move_index
                    ),
                }
            }
        }
    }

    #[test]
    fn reset_clears_outcome() {
        let mut session = Session::default();
        let game_id = session.game_id();
        play_all(&mut session, &x_wins_top_row());
        assert!(session.is_frozen());

        session.reset();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.outcome(), None);
        assert!(session.moves().is_empty());
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.game_id(), game_id);

        // reset twice is the same as once
        let once = session.snapshot();
        session.reset();
        assert_eq!(session.snapshot(), once);
        assert_eq!(session.state(), GameState::InProgress { next_player: Player::X });

        // and the board accepts moves again
        assert!(session.play(0).is_ok());
    }

    #[test]
    fn game_end_handler_fires_once() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut session = Session::default();
        let recorded = Rc::clone(&events);
        session.on_game_end(move |event| recorded.borrow_mut().push(*event));

        session.play(0).unwrap();
        assert!(events.borrow().is_empty());

        play_all(&mut session, &x_wins_top_row()[1..]);
        assert_eq!(session.play(8), Err(InvalidMove::GameEnded));
        assert_eq!(
            *events.borrow(),
            vec![GameEndEvent {
                outcome: GameOutcome::Won {
                    winner: Player::X,
                    line: LINES[0],
                }
            }]
        );

        session.reset();
        play_all(&mut session, &drawn_game());
        assert_eq!(events.borrow().len(), 2);
        assert_eq!(events.borrow()[1].outcome, GameOutcome::Draw);
    }

    #[test]
    fn handler_is_replaced() {
        let calls = Rc::new(RefCell::new((0, 0)));
        let mut session = Session::default();
        let first = Rc::clone(&calls);
        session.on_game_end(move |_| first.borrow_mut().0 += 1);
        let second = Rc::clone(&calls);
        session.on_game_end(move |_| second.borrow_mut().1 += 1);

        play_all(&mut session, &x_wins_top_row());
        assert_eq!(*calls.borrow(), (0, 1));
    }

    #[test]
    fn snapshot_rebuilds_session() {
        let mut session = Session::new(SessionArgs::with_first_player(Player::O));
        play_all(&mut session, &[4, 0, 8]);
        let game_data = session.snapshot();
        assert_eq!(game_data.first_player, Player::O);
        assert_eq!(game_data.moves.len(), 3);

        let json = serde_json::to_string(&game_data).unwrap();
        let restored = Session::try_from(serde_json::from_str::<GameData>(&json).unwrap()).unwrap();
        assert_eq!(restored.game_id(), session.game_id());
        assert_eq!(restored.board(), session.board());
        assert_eq!(restored.current_player(), Player::X);
        assert_eq!(restored.snapshot(), game_data);
    }

    #[test]
    fn snapshot_with_bad_moves_is_rejected() {
        let mut game_data = GameData::new_with_id(Uuid::new_v4(), Player::X);
        game_data.add_move(Move::new(0, Player::X));
        game_data.add_move(Move::new(0, Player::O));
        assert_eq!(
            Session::try_from(game_data).map(|session| session.snapshot()),
            Err(InvalidMove::FieldOccupied)
        );
    }
}
