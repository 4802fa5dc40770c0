use crate::error::MoveError;
use crate::game::{GameOutcome, GameState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    /// Position a restart returns to.
    fresh: GameState,
    cursor: (usize, usize),
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game_state: GameState) -> Self {
        let cursor = Self::start_cursor(&game_state);
        App {
            fresh: game_state.clone(),
            game_state,
            cursor,
            should_quit: false,
            message: None,
        }
    }

    /// First legal square, or the top-left corner.
    fn start_cursor(state: &GameState) -> (usize, usize) {
        state
            .legal_actions()
            .first()
            .map(|a| (a.row() as usize, a.col() as usize))
            .unwrap_or((0, 0))
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            if let Err(e) = terminal.draw(|f| self.render(f)) {
                return Err(e.into());
            }

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let last = self.game_state.board().size() - 1;
        let (row, col) = self.cursor;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => self.cursor.0 = row.saturating_sub(1),
            KeyCode::Down => self.cursor.0 = (row + 1).min(last),
            KeyCode::Left => self.cursor.1 = col.saturating_sub(1),
            KeyCode::Right => self.cursor.1 = (col + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_disc();
            }
            KeyCode::Char('r') => {
                self.game_state = self.fresh.clone();
                self.cursor = Self::start_cursor(&self.game_state);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Place a disc for the side to move under the cursor
    fn place_disc(&mut self) {
        let (row, col) = self.cursor;
        let action = self.game_state.action_at(row as i32, col as i32);

        match self.game_state.apply_move_mut(&action) {
            Ok(report) => {
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(color) => format!("{color} wins!"),
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                } else if let Some(passed) = report.passed {
                    self.message = Some(format!("{passed} has no legal move and passes."));
                }
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(MoveError::Rejected(rejection)) => {
                self.message = Some(format!("Illegal move: {rejection}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.cursor, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameState::initial())
    }
}
