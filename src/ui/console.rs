use std::io::{self, Write};

use crate::error::InputError;
use crate::game::{GameOutcome, GameState, Glyphs, PlayerColor};
use crate::player::Player;

/// Who answers for each color.
pub enum Seats<'a> {
    /// One source moves for both colors, e.g. two people sharing a terminal.
    Shared(&'a mut dyn Player),
    Split {
        dark: &'a mut dyn Player,
        light: &'a mut dyn Player,
    },
}

impl Seats<'_> {
    fn for_color(&mut self, color: PlayerColor) -> &mut dyn Player {
        match self {
            Seats::Shared(player) => &mut **player,
            Seats::Split { dark, .. } if color == PlayerColor::Dark => &mut **dark,
            Seats::Split { light, .. } => &mut **light,
        }
    }
}

/// Line-oriented game: print the board, ask the side to move for a square,
/// repeat until the game ends or a player's input runs out.
///
/// Returns the final state, which is not terminal if input ran out first.
pub fn play<W: Write>(
    mut state: GameState,
    mut seats: Seats<'_>,
    out: &mut W,
    glyphs: &Glyphs,
) -> io::Result<GameState> {
    loop {
        state.board().render_with(out, glyphs)?;
        let (dark_discs, light_discs) = state.scores();
        writeln!(out, "Dark {dark_discs}  Light {light_discs}")?;

        if let Some(outcome) = state.outcome() {
            match outcome {
                GameOutcome::Winner(color) => writeln!(out, "{color} wins!")?,
                GameOutcome::Draw => writeln!(out, "It's a draw!")?,
            }
            return Ok(state);
        }

        let color = state.current_player();
        let player = seats.for_color(color);
        write!(out, "{} ({color}) to move: ", player.name())?;
        out.flush()?;

        let action = match player.next_action(&state) {
            Ok(action) => action,
            Err(InputError::Closed) => {
                writeln!(out)?;
                return Ok(state);
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match state.apply_move_mut(&action) {
            Ok(report) => {
                if let Some(passed) = report.passed {
                    writeln!(out, "{passed} has no legal move and passes.")?;
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;
    use crate::player::ScriptedPlayer;

    fn run(dark: &[&str], light: &[&str]) -> (GameState, String) {
        let mut dark = ScriptedPlayer::new(dark.iter().copied());
        let mut light = ScriptedPlayer::new(light.iter().copied());
        let mut out = Vec::new();
        let state = play(
            GameState::initial(),
            Seats::Split {
                dark: &mut dark,
                light: &mut light,
            },
            &mut out,
            &Glyphs::default(),
        )
        .unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_plays_until_input_closes() {
        let (state, text) = run(&["d3"], &["c3"]);
        assert_eq!(state.scores(), (3, 3));
        assert_eq!(state.current_player(), PlayerColor::Dark);
        assert!(text.contains("Script (Dark) to move: "));
        assert!(text.contains("Script (Light) to move: "));
        assert!(text.contains("Dark 4  Light 1"));
    }

    #[test]
    fn test_reports_bad_input_and_retries() {
        let (state, text) = run(&["zz", "a1", "d3"], &[]);
        assert!(text.contains("'z' is not a row number"));
        assert!(text.contains("illegal move: square (0, 0) captures nothing"));
        assert_eq!(state.board().get(2, 3), Some(PlayerColor::Dark));
        assert_eq!(state.current_player(), PlayerColor::Light);
    }

    #[test]
    fn test_finished_game_prints_result() {
        let mut board = Board::with_size(4).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                board.set(row, col, PlayerColor::Empty);
            }
        }
        board.set(0, 1, PlayerColor::Light);
        board.set(0, 2, PlayerColor::Dark);

        let mut both = ScriptedPlayer::new(["a1"]);
        let mut out = Vec::new();
        let state = play(
            GameState::from_board(board, PlayerColor::Dark),
            Seats::Shared(&mut both),
            &mut out,
            &Glyphs::default(),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(state.is_terminal());
        assert!(text.contains("Dark 3  Light 0"));
        assert!(text.ends_with("Dark wins!\n"));
    }

    #[test]
    fn test_shared_seat_moves_for_both_colors() {
        let mut both = ScriptedPlayer::new(["d3", "c3", "c4"]);
        let mut out = Vec::new();
        let state = play(
            GameState::initial(),
            Seats::Shared(&mut both),
            &mut out,
            &Glyphs::default(),
        )
        .unwrap();
        assert_eq!(state.current_player(), PlayerColor::Light);
        assert_eq!(state.board().get(3, 2), Some(PlayerColor::Dark));
        assert_eq!(both.remaining(), 0);
    }
}
