use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// A settled piece of this player
    pub fn piece(self) -> Cell {
        Cell::Occupied(self)
    }

    /// A preview marker of this player
    pub fn preview(self) -> Cell {
        Cell::Preview(self)
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "One",
            Player::Two => "Two",
        }
    }
}
