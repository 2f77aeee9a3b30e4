use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// Axis pairs scanned from a placed piece: horizontal, vertical, diagonal,
/// anti-diagonal. Each is walked in both directions.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// A settled piece.
    Occupied(Player),
    /// Where a piece would land if dropped now. Never counts as a real piece.
    Preview(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_preview(self) -> bool {
        matches!(self, Cell::Preview(_))
    }

    /// The player whose settled piece fills this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty | Cell::Preview(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }

    /// Check if a column is full. Only settled pieces fill a column.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        matches!(self.cells[0][col], Cell::Occupied(_))
    }

    /// Row a dropped piece would settle in: the lowest cell that is empty or
    /// only holds a preview.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS)
            .rev()
            .find(|&row| !matches!(self.cells[row][col], Cell::Occupied(_)))
    }

    /// Lowest strictly empty cell in a column
    pub fn lowest_empty(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = player.piece();
        Ok(row)
    }

    /// Mark a cell as the preview for `player`. Settled pieces are left alone.
    pub fn set_preview(&mut self, row: usize, col: usize, player: Player) {
        if !matches!(self.cells[row][col], Cell::Occupied(_)) {
            self.cells[row][col] = player.preview();
        }
    }

    /// Turn every preview back into an empty cell
    pub fn clear_previews(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if cell.is_preview() {
                *cell = Cell::Empty;
            }
        }
    }

    /// Position and owner of the preview marker, if one is shown
    pub fn preview(&self) -> Option<(usize, usize, Player)> {
        (0..ROWS)
            .flat_map(|row| (0..COLS).map(move |col| (row, col)))
            .find_map(|(row, col)| match self.cells[row][col] {
                Cell::Preview(player) => Some((row, col, player)),
                _ => None,
            })
    }

    /// Number of settled pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.owner().is_some())
            .count()
    }

    /// True when no cell is empty. A preview counts as filled.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let Some(player) = self.get(row, col).owner() else {
            return false;
        };

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.run_length(row, col, player, dr, dc) >= WIN_LENGTH)
    }

    /// Length of the run through (row, col) along one axis, counting the
    /// piece itself and `player`'s pieces on both sides.
    fn run_length(&self, row: usize, col: usize, player: Player, dr: isize, dc: isize) -> usize {
        1 + self.count_from(row, col, player, dr, dc) + self.count_from(row, col, player, -dr, -dc)
    }

    /// Consecutive pieces of `player` starting next to (row, col)
    fn count_from(&self, row: usize, col: usize, player: Player, dr: isize, dc: isize) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        while r >= 0 && r < ROWS as isize && c >= 0 && c < COLS as isize {
            if self.cells[r as usize][c as usize] != Cell::Occupied(player) {
                break;
            }
            count += 1;
            r += dr;
            c += dc;
        }

        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
        assert!(board.preview().is_none());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Occupied(Player::One));

        let row = board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Occupied(Player::Two));
    }

    #[test]
    fn test_drop_lands_on_preview() {
        let mut board = Board::new();
        board.set_preview(5, 2, Player::Two);

        assert_eq!(board.landing_row(2), Some(5));
        assert_eq!(board.lowest_empty(2), Some(4));

        let row = board.drop_piece(2, Player::One).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 2), Cell::Occupied(Player::One));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_piece(0, Player::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(board.drop_piece(0, Player::Two), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(COLS, Player::One), Err(MoveError::InvalidColumn));
        assert!(board.is_column_full(COLS));
        assert_eq!(board.landing_row(COLS), None);
    }

    #[test]
    fn test_set_preview_keeps_settled_pieces() {
        let mut board = Board::new();
        board.drop_piece(1, Player::One).unwrap();
        board.set_preview(5, 1, Player::Two);
        assert_eq!(board.get(5, 1), Cell::Occupied(Player::One));
    }

    #[test]
    fn test_clear_previews() {
        let mut board = Board::new();
        board.drop_piece(4, Player::One).unwrap();
        board.set_preview(4, 4, Player::Two);
        assert_eq!(board.preview(), Some((4, 4, Player::Two)));

        board.clear_previews();
        assert!(board.preview().is_none());
        assert_eq!(board.get(4, 4), Cell::Empty);
        assert_eq!(board.get(5, 4), Cell::Occupied(Player::One));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.piece_count(), ROWS * COLS);
    }

    #[test]
    fn test_preview_counts_as_filled() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        board.cells[0][6] = Cell::Empty;
        assert!(!board.is_full());

        board.set_preview(0, 6, Player::Two);
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Player::One).unwrap();
        }
        assert!(board.check_win(5, 2)); // Check middle of the line
        assert!(board.check_win(5, 0));
        assert!(board.check_win(5, 3));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Player::Two).unwrap();
        }
        assert!(board.check_win(2, 3)); // Check the 4th piece
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Player::One).unwrap();

        board.drop_piece(1, Player::Two).unwrap();
        board.drop_piece(1, Player::One).unwrap();

        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::One).unwrap();

        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        let row = board.drop_piece(3, Player::One).unwrap();

        assert!(board.check_win(row, 3));
        assert!(board.check_win(4, 1)); // Same run seen from inside
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Player::One).unwrap();

        board.drop_piece(5, Player::Two).unwrap();
        board.drop_piece(5, Player::One).unwrap();

        board.drop_piece(4, Player::Two).unwrap();
        board.drop_piece(4, Player::Two).unwrap();
        board.drop_piece(4, Player::One).unwrap();

        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        let row = board.drop_piece(3, Player::One).unwrap();

        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        assert!(!board.check_win(5, 1)); // Only 3 in a row
    }

    #[test]
    fn test_preview_does_not_extend_run() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(0, Player::One).unwrap();
        }
        board.set_preview(2, 0, Player::One);
        assert!(!board.check_win(3, 0));
    }

    #[test]
    fn test_empty_and_preview_cells_never_win() {
        let mut board = Board::new();
        assert!(!board.check_win(5, 0));
        board.set_preview(5, 0, Player::One);
        assert!(!board.check_win(5, 0));
    }
}
