use tracing::info;

use crate::error::{BoardError, MoveError};

use super::{Action, Board, PlayerColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerColor),
    Draw,
}

/// What happened as a result of one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Opposing discs turned over by the move.
    pub flipped: usize,
    /// The side that had to pass afterwards, if any.
    pub passed: Option<PlayerColor>,
}

/// A board plus whose turn it is.
///
/// Passing is automatic: when the side to move has no legal move the turn
/// goes straight back to the other side, and when neither side can move the
/// game ends and is decided by disc count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: PlayerColor,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Standard 8x8 game, Dark to move.
    pub fn initial() -> Self {
        Self::from_board(Board::new(), PlayerColor::Dark)
    }

    /// Fresh game on a `size` x `size` board with `first` to move.
    pub fn with_size(size: usize, first: PlayerColor) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::with_size(size)?, first))
    }

    /// Resume from an arbitrary position, resolving a pass or game end that
    /// is already due.
    pub fn from_board(board: Board, first: PlayerColor) -> Self {
        let first = if first.is_disc() { first } else { PlayerColor::Dark };
        let mut state = GameState {
            board,
            current_player: first,
            outcome: None,
        };
        if !state.board.has_any_legal_move(first) {
            state.hand_over(first.reverse());
        }
        state
    }

    /// Get current player
    pub fn current_player(&self) -> PlayerColor {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Disc counts as (dark, light).
    pub fn scores(&self) -> (usize, usize) {
        (
            self.board.count_discs(PlayerColor::Dark),
            self.board.count_discs(PlayerColor::Light),
        )
    }

    /// Legal moves for the side to move. Empty once the game is over.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves(self.current_player)
    }

    /// Build an action for the side to move.
    pub fn action_at(&self, row: i32, col: i32) -> Action {
        Action::new(self.current_player, row, col)
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, action: &Action) -> Result<(GameState, TurnReport), MoveError> {
        let mut next = self.clone();
        let report = next.apply_move_mut(action)?;
        Ok((next, report))
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, action: &Action) -> Result<TurnReport, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.check_move(action, self.current_player)?;
        let flipped = self.board.try_apply_move(action)?;

        let mover = self.current_player;
        let passed = self.hand_over(mover.reverse());
        Ok(TurnReport { flipped, passed })
    }

    /// Give the move to `next`, falling back to a pass or the end of the
    /// game. Returns the side that passed, if any.
    fn hand_over(&mut self, next: PlayerColor) -> Option<PlayerColor> {
        if self.board.has_any_legal_move(next) {
            self.current_player = next;
            return None;
        }

        let other = next.reverse();
        if self.board.has_any_legal_move(other) {
            info!(color = %next, "no legal move, passing");
            self.current_player = other;
            return Some(next);
        }

        let (dark, light) = self.scores();
        let outcome = if dark > light {
            GameOutcome::Winner(PlayerColor::Dark)
        } else if light > dark {
            GameOutcome::Winner(PlayerColor::Light)
        } else {
            GameOutcome::Draw
        };
        info!(dark, light, ?outcome, "game over");
        self.current_player = next;
        self.outcome = Some(outcome);
        None
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
