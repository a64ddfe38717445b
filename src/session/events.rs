use serde::Serialize;

use crate::GameOutcome;

/// Sent to the end-of-game handler once a session reaches a terminal state.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEndEvent {
    pub outcome: GameOutcome,
}
