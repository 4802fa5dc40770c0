use crate::game::{Action, Board, PlayerColor};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Glyph and color for one square.
fn cell_span(color: PlayerColor, legal: bool) -> (&'static str, Color) {
    match color {
        PlayerColor::Dark => (" \u{25cf} ", Color::Blue),
        PlayerColor::Light => (" \u{25cf} ", Color::White),
        PlayerColor::Empty if legal => (" \u{00b7} ", Color::Green),
        PlayerColor::Empty => (" . ", Color::DarkGray),
    }
}

fn letter_line(size: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")];
    for col in 0..size {
        spans.push(Span::raw(format!(" {} ", (b'a' + col as u8) as char)));
    }
    spans.push(Span::raw("   "));
    Line::from(spans)
}

/// Board lines with letter and number gutters. `legal` squares are marked and
/// the `cursor` square, if any, is drawn reversed.
pub fn board_lines(
    board: &Board,
    cursor: Option<(usize, usize)>,
    legal: &[Action],
) -> Vec<Line<'static>> {
    let size = board.size();
    let mut lines = Vec::with_capacity(size + 2);
    lines.push(letter_line(size));

    for row in 0..size {
        let mut spans = vec![Span::raw(format!("{:>2} ", row + 1))];
        for col in 0..size {
            let color = board.get(row, col).unwrap_or_default();
            let is_legal = legal
                .iter()
                .any(|a| a.row() == row as i32 && a.col() == col as i32);
            let (symbol, fg) = cell_span(color, is_legal);
            let mut style = Style::default().fg(fg);
            if cursor == Some((row, col)) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(symbol, style));
        }
        spans.push(Span::raw(format!(" {:<2}", row + 1)));
        lines.push(Line::from(spans));
    }

    lines.push(letter_line(size));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_board_lines_have_gutters() {
        let board = Board::new();
        let lines = board_lines(&board, None, &[]);
        assert_eq!(lines.len(), 10);
        assert_eq!(text(&lines[0]), "    a  b  c  d  e  f  g  h    ");
        assert!(text(&lines[1]).starts_with(" 1 "));
        assert!(text(&lines[8]).ends_with(" 8 "));
        assert_eq!(text(&lines[0]), text(&lines[9]));
    }

    #[test]
    fn test_legal_squares_are_marked() {
        let board = Board::new();
        let legal = board.legal_moves(PlayerColor::Dark);
        let lines = board_lines(&board, None, &legal);
        // Row 3 (index 2) has the legal square d3.
        let row = text(&lines[3]);
        assert_eq!(row.matches('\u{00b7}').count(), 1);
        let total: usize = lines.iter().map(|l| text(l).matches('\u{00b7}').count()).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_cursor_is_reversed() {
        let board = Board::new();
        let lines = board_lines(&board, Some((0, 0)), &[]);
        let first_cell = &lines[1].spans[1];
        assert!(first_cell.style.add_modifier.contains(Modifier::REVERSED));
        let second_cell = &lines[1].spans[2];
        assert!(!second_cell.style.add_modifier.contains(Modifier::REVERSED));
    }
}
