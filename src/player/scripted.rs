use std::collections::VecDeque;

use crate::error::InputError;
use crate::game::{Action, GameState};

use super::Player;

/// Plays a fixed list of squares in order, then reports the input closed.
pub struct ScriptedPlayer {
    moves: VecDeque<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPlayer {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn next_action(&mut self, state: &GameState) -> Result<Action, InputError> {
        let square = self.moves.pop_front().ok_or(InputError::Closed)?;
        Action::parse(&square, state.current_player())
    }

    fn name(&self) -> &str {
        "Script"
    }
}
