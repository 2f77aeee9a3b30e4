use crate::game::{Board, Cell, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of every board line: "  ║" + 7 cells of 3 + " ║"
const BOARD_WIDTH: u16 = 26;
/// Columns before the first cell
const LEFT_PAD: u16 = 3;
const CELL_WIDTH: u16 = 3;

/// Where the board was drawn, so pointer positions can be mapped back to
/// columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardGeometry {
    pub area: Rect,
}

impl BoardGeometry {
    /// Column under the terminal cell (x, y), if any
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.area;
        if y < area.y || y >= area.y + area.height {
            return None;
        }

        // Paragraph centres each line at half the area width
        let first_cell = area.x + (area.width / 2).saturating_sub(BOARD_WIDTH / 2) + LEFT_PAD;
        if x < first_cell {
            return None;
        }

        let col = ((x - first_cell) / CELL_WIDTH) as usize;
        (col < COLS).then_some(col)
    }
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Magenta,
        Player::Two => Color::Yellow,
    }
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) -> BoardGeometry {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    BoardGeometry { area: chunks[1] }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let current_player = game_state.current_player();
    let status = format!("Player {}'s turn", current_player.name());

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => {
            Span::styled(" ● ", Style::default().fg(player_color(player)))
        }
        Cell::Preview(player) => Span::styled(
            " ○ ",
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::DIM),
        ),
    }
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let mut lines = Vec::with_capacity(ROWS + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        row_spans.extend(row.iter().map(|&cell| cell_span(cell)));
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
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
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  Mouse: Hover/Click  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
