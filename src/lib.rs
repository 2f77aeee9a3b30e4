//! # Connect Four
//!
//! A two-player Connect Four game. The engine resolves drops under gravity,
//! keeps a hover preview of where the next piece would land, and detects
//! four-in-a-row or a full-board draw. A Ratatui terminal front end drives it
//! with the keyboard or the mouse.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state transitions, engine
//! - [`ui`] — Terminal UI: board view, input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
