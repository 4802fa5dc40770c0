//! Move sources. The engine only sees the [`Action`]s a [`Player`] hands
//! back, so a keyboard, a script or anything else can drive a game.

mod human;
mod scripted;

pub use human::HumanPlayer;
pub use scripted::ScriptedPlayer;

use crate::error::InputError;
use crate::game::{Action, GameState};

/// Anything that can choose a move for the side to move.
pub trait Player {
    /// Produce the next action for `state.current_player()`.
    ///
    /// The action is not checked for legality; the game state does that.
    fn next_action(&mut self, state: &GameState) -> Result<Action, InputError>;

    /// Return the player's display name.
    fn name(&self) -> &str;
}
