use crate::game::{GameOutcome, GameState, PlayerColor};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: (usize, usize),
    message: &Option<String>,
) {
    let board_height = game_state.board().size() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Dark => Color::Blue,
        PlayerColor::Light => Color::White,
        PlayerColor::Empty => Color::DarkGray,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (dark, light) = game_state.scores();
    let current = game_state.current_player();

    let status = match game_state.outcome() {
        Some(GameOutcome::Winner(color)) => format!("{color} wins  |  Dark {dark}  Light {light}"),
        Some(GameOutcome::Draw) => format!("Draw  |  Dark {dark}  Light {light}"),
        None => format!("{current} to move  |  Dark {dark}  Light {light}"),
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Reversi"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, cursor: (usize, usize), area: Rect) {
    let legal = game_state.legal_actions();
    let lines = board_lines(game_state.board(), Some(cursor), &legal);

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Arrows", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Move  |  Enter: Place  |  R: Restart  |  Q: Quit"),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
