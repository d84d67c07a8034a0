//! Detective Quest - The Mystery of the Dark Mansion
//!
//! A terminal detective game where you explore a mansion room by room,
//! collect the clues left behind, and accuse the culprit.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Walk the mansion's rooms, each one hides a clue
//! - **Deduction**: Every clue implicates one of four suspects
//! - **Accusation**: Name the culprit - you need at least two clues
//!   pointing at them to make the charge stick
//!
//! # Architecture
//!
//! - `game` - Core game logic, state machine, investigation engine
//! - `tui` - Terminal user interface with ratatui
//! - `data` - Data structures: clue tree, suspect index, mansion map

pub mod data;
pub mod game;
pub mod tui;

pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Suspect index capacity must be non-zero (got {0})")]
    InvalidIndexCapacity(usize),

    #[error("Invalid game state: {0}")]
    InvalidState(String),
}
