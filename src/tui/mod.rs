//! Terminal User Interface
//!
//! ratatui front end for the mansion investigation.

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::MessageKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub success: Color,
    pub failure: Color,
    pub warning: Color,
    pub discovery: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            failure: Color::Red,
            warning: Color::Yellow,
            discovery: Color::Magenta,
            border: Color::DarkGray,
        }
    }
}

/// Get color for a message kind
pub fn kind_color(kind: &MessageKind) -> Color {
    match kind {
        MessageKind::Info => Color::Gray,
        MessageKind::Discovery => Color::Magenta,
        MessageKind::Warning => Color::Yellow,
        MessageKind::Success => Color::Green,
        MessageKind::Failure => Color::Red,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║   ██████╗ ███████╗████████╗███████╗ ██████╗████████╗██╗██╗   ██╗███████╗
║   ██╔══██╗██╔════╝╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██║██║   ██║██╔════╝
║   ██║  ██║█████╗     ██║   █████╗  ██║        ██║   ██║██║   ██║█████╗
║   ██║  ██║██╔══╝     ██║   ██╔══╝  ██║        ██║   ██║╚██╗ ██╔╝██╔══╝
║   ██████╔╝███████╗   ██║   ███████╗╚██████╗   ██║   ██║ ╚████╔╝ ███████╗
║   ╚═════╝ ╚══════╝   ╚═╝   ╚══════╝ ╚═════╝   ╚═╝   ╚═╝  ╚═══╝  ╚══════╝
║                                                              ║
║    ██████╗ ██╗   ██╗███████╗███████╗████████╗                ║
║   ██╔═══██╗██║   ██║██╔════╝██╔════╝╚══██╔══╝                ║
║   ██║   ██║██║   ██║█████╗  ███████╗   ██║                   ║
║   ██║▄▄ ██║██║   ██║██╔══╝  ╚════██║   ██║                   ║
║   ╚██████╔╝╚██████╔╝███████╗███████║   ██║                   ║
║    ╚══▀▀═╝  ╚═════╝ ╚══════╝╚══════╝   ╚═╝                   ║
║                                                              ║
║           The Mystery of the Dark Mansion                    ║
╚══════════════════════════════════════════════════════════════╝
"#;

/// Header bar title
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════╗
║                      CONTROLS                             ║
╠═══════════════════════════════════════════════════════════╣
║  ←/e   Take the left exit                                 ║
║  →/d   Take the right exit                                ║
║  s     Leave the mansion and accuse a suspect             ║
║  ↑/↓   Navigate the suspect list                          ║
║  Enter Confirm (start game / accuse)                      ║
║  ?     Toggle this help                                   ║
║  q     Quit (menu and verdict screens)                    ║
╠═══════════════════════════════════════════════════════════╣
║                      HOW TO WIN                           ║
╠═══════════════════════════════════════════════════════════╣
║  Every room hides one clue and every clue points at one   ║
║  of the four suspects. Your accusation sticks only when   ║
║  at least two collected clues implicate the accused.      ║
╚═══════════════════════════════════════════════════════════╝
"#;

/// Create the main layout (header / content / status bar)
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (clue panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area)
        .to_vec()
}

/// Create the main area layout (room card + message log)
pub fn create_main_area_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area)
        .to_vec()
}
