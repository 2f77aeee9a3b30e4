//! Terminal UI: renders the engine's board and forwards hover and drop
//! intents from the keyboard and mouse.

mod app;
pub mod game_view;

pub use app::App;
