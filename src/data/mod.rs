//! Data structures for the game world
//!
//! The clue tree, the suspect index, and the mansion map.

pub mod clues;
pub mod mansion;
pub mod suspects;

pub use clues::{ClueSet, MAX_CLUE_LEN};
pub use mansion::{Direction, Room};
pub use suspects::{SuspectIndex, INDEX_CAPACITY, UNKNOWN_SUSPECT};

use serde::{Deserialize, Serialize};

/// How strongly a message should be surfaced in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Info,
    Discovery,
    Warning,
    Success,
    Failure,
}

impl MessageKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            MessageKind::Info => "ℹ",
            MessageKind::Discovery => "◆",
            MessageKind::Warning => "▲",
            MessageKind::Success => "✓",
            MessageKind::Failure => "✗",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Info => write!(f, "INFO"),
            MessageKind::Discovery => write!(f, "DISCOVERY"),
            MessageKind::Warning => write!(f, "WARNING"),
            MessageKind::Success => write!(f, "SUCCESS"),
            MessageKind::Failure => write!(f, "FAILURE"),
        }
    }
}
