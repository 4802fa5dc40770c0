use std::io::BufRead;

use crate::error::InputError;
use crate::game::{Action, GameState};

use super::Player;

/// Reads one move per line in square notation (`c4`).
pub struct HumanPlayer<R> {
    input: R,
    name: String,
}

impl<R: BufRead> HumanPlayer<R> {
    pub fn new(input: R, name: impl Into<String>) -> Self {
        HumanPlayer {
            input,
            name: name.into(),
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn next_action(&mut self, state: &GameState) -> Result<Action, InputError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Action::parse(&line, state.current_player())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerColor;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_move_per_line() {
        let state = GameState::initial();
        let mut player = HumanPlayer::new(Cursor::new("d3\nc4\n"), "Human");

        let first = player.next_action(&state).unwrap();
        assert_eq!(first, Action::new(PlayerColor::Dark, 2, 3));
        let second = player.next_action(&state).unwrap();
        assert_eq!(second, Action::new(PlayerColor::Dark, 3, 2));
        assert!(matches!(player.next_action(&state), Err(InputError::Closed)));
    }

    #[test]
    fn test_uses_side_to_move() {
        let state = GameState::initial();
        let (state, _) = state.apply_move(&state.action_at(2, 3)).unwrap();
        let mut player = HumanPlayer::new(Cursor::new("c3\n"), "Human");
        assert_eq!(
            player.next_action(&state).unwrap(),
            Action::new(PlayerColor::Light, 2, 2)
        );
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let state = GameState::initial();
        let mut player = HumanPlayer::new(Cursor::new("\n?3\n"), "Human");
        assert!(matches!(player.next_action(&state), Err(InputError::Empty)));
        assert!(matches!(player.next_action(&state), Err(InputError::BadColumn('?'))));
    }

    #[test]
    fn test_player_name() {
        let player = HumanPlayer::new(Cursor::new(""), "Alice");
        assert_eq!(player.name(), "Alice");
    }
}
