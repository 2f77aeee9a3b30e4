use super::board::{Board, MoveError, COLS};
use super::Player;

/// What a drop did. `Win` and `Draw` are only ever observed here: the state
/// returned alongside them is already a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    Continued,
    Win(Player),
    Draw,
    ColumnFull,
    InvalidColumn,
}

impl DropResult {
    /// The drop ended the game (and reset the board)
    pub fn is_game_over(&self) -> bool {
        matches!(self, DropResult::Win(_) | DropResult::Draw)
    }

    /// The drop was refused and nothing changed
    pub fn is_rejected(&self) -> bool {
        matches!(self, DropResult::ColumnFull | DropResult::InvalidColumn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One, // One starts
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// State with the preview moved to where the current player's piece would
    /// land in `column`. Out of range columns leave the state as is; a full
    /// column just loses the preview.
    pub fn hovered(&self, column: usize) -> GameState {
        if column >= COLS {
            return *self;
        }

        let mut new_board = self.board;
        new_board.clear_previews();
        if let Some(row) = new_board.lowest_empty(column) {
            new_board.set_preview(row, column, self.current_player);
        }

        GameState {
            board: new_board,
            current_player: self.current_player,
        }
    }

    /// Apply a drop and return the next state (immutable). A finished game
    /// comes back as the initial state; a refused drop returns `self`.
    pub fn dropped(&self, column: usize) -> (GameState, DropResult) {
        let mover = self.current_player;

        let mut new_board = self.board;
        new_board.clear_previews();
        let row = match new_board.drop_piece(column, mover) {
            Ok(row) => row,
            Err(MoveError::ColumnFull) => return (*self, DropResult::ColumnFull),
            Err(MoveError::InvalidColumn) => return (*self, DropResult::InvalidColumn),
        };

        // The next player's preview goes straight on top of the new piece
        if row > 0 {
            new_board.set_preview(row - 1, column, mover.other());
        }

        if new_board.check_win(row, column) {
            return (GameState::initial(), DropResult::Win(mover));
        }
        if new_board.is_full() {
            return (GameState::initial(), DropResult::Draw);
        }

        let next = GameState {
            board: new_board,
            current_player: mover.other(),
        };
        (next, DropResult::Continued)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
