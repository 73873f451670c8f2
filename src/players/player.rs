use crate::engine::{Action, GameState};
use crate::error::NimError;

/// Something that can pick a move for the side to play.
pub trait Player {
    fn play_turn(&mut self, state: &GameState) -> Result<Action, NimError>;
}
