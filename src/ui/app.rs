use crate::config::UiConfig;
use crate::game::{DropResult, GameEngine, COLS};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

use super::game_view::{self, BoardGeometry};

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    start_column: usize,
    tick: Duration,
    should_quit: bool,
    message: Option<String>,
    geometry: BoardGeometry,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        let start_column = config.start_column.min(COLS - 1);
        let mut engine = GameEngine::new();
        engine.hover(start_column);

        App {
            engine,
            selected_column: start_column,
            start_column,
            tick: Duration::from_millis(config.tick_ms),
            should_quit: false,
            message: None,
            geometry: BoardGeometry::default(),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.select_column(self.selected_column - 1);
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.select_column(self.selected_column + 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.select_column(self.start_column);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Pointer over a column hovers it, a left click drops there
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(col) = self.geometry.column_at(mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved if col != self.selected_column => {
                self.select_column(col);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.message = None;
                self.select_column(col);
                self.drop_piece();
            }
            _ => {}
        }
    }

    fn select_column(&mut self, col: usize) {
        self.selected_column = col;
        self.engine.hover(col);
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let result = self.engine.drop_piece(self.selected_column);

        self.message = match result {
            DropResult::Continued => None,
            DropResult::Win(player) => Some(format!("Player {} wins!", player.name())),
            DropResult::Draw => Some("It's a draw!".to_string()),
            DropResult::ColumnFull => Some("Column is full!".to_string()),
            DropResult::InvalidColumn => Some("Invalid column!".to_string()),
        };

        // Fresh board: show the new game's preview under the pointer
        if result.is_game_over() {
            self.engine.hover(self.selected_column);
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.geometry = game_view::render(
            frame,
            self.engine.state(),
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}
