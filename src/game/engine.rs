use log::{debug, info, warn};

use super::state::{DropResult, GameState};

/// Owns the state of one game session. Every call swaps in a complete new
/// [`GameState`]; read it back through [`GameEngine::state`] to redraw.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    pub fn new() -> Self {
        GameEngine {
            state: GameState::initial(),
        }
    }

    /// Current board and player
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Show where the current player's piece would land in `column`.
    /// Never commits a piece or changes the player.
    pub fn hover(&mut self, column: usize) -> &GameState {
        debug!("hover column {column} for player {}", self.state.current_player().name());
        self.state = self.state.hovered(column);
        &self.state
    }

    /// Commit the current player's piece to `column`. A win or draw resets
    /// the board before returning.
    pub fn drop_piece(&mut self, column: usize) -> DropResult {
        let mover = self.state.current_player();
        let (next, result) = self.state.dropped(column);
        self.state = next;

        match result {
            DropResult::Continued => {
                debug!("player {} dropped in column {column}", mover.name());
            }
            DropResult::Win(winner) => {
                info!("player {} wins with a drop in column {column}", winner.name());
            }
            DropResult::Draw => {
                info!("board filled by a drop in column {column}, game drawn");
            }
            DropResult::ColumnFull => {
                warn!("player {} tried full column {column}", mover.name());
            }
            DropResult::InvalidColumn => {
                warn!("player {} tried column {column}, which is off the board", mover.name());
            }
        }

        result
    }

    /// Start over with an empty board and player One to move
    pub fn reset(&mut self) -> &GameState {
        info!("game reset");
        self.state = GameState::initial();
        &self.state
    }
}
