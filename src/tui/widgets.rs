//! Custom widgets for the game UI

use crate::data::Room;
use crate::game::investigation::Verdict;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// A card showing the current room, its clue, and the available exits.
pub struct RoomCard<'a> {
    room: &'a Room,
    accent: Color,
}

impl<'a> RoomCard<'a> {
    pub fn new(room: &'a Room) -> Self {
        Self {
            room,
            accent: Color::Cyan,
        }
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    fn exits_line(&self) -> String {
        use crate::data::Direction::{Left, Right};
        match (self.room.has_exit(Left), self.room.has_exit(Right)) {
            (true, true) => "Exits: [e] left  [d] right  [s] accuse".to_string(),
            (true, false) => "Exits: [e] left  [s] accuse".to_string(),
            (false, true) => "Exits: [d] right  [s] accuse".to_string(),
            (false, false) => "Dead end. [s] accuse".to_string(),
        }
    }
}

impl Widget for RoomCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 4 {
            return;
        }

        let title_style = Style::default().fg(self.accent).add_modifier(Modifier::BOLD);
        buf.set_string(area.x + 1, area.y, format!("ROOM: {}", self.room.name), title_style);

        let rule: String = "─".repeat((area.width as usize).saturating_sub(2));
        buf.set_string(area.x + 1, area.y + 1, &rule, Style::default().fg(Color::DarkGray));

        // Wrap the clue text to the card width.
        let width = (area.width as usize).saturating_sub(4);
        let mut y = area.y + 2;
        let mut line = String::new();
        for word in self.room.clue.split_whitespace() {
            if !line.is_empty() && line.chars().count() + word.chars().count() + 1 > width {
                buf.set_string(area.x + 2, y, &line, Style::default().fg(Color::White));
                line.clear();
                y += 1;
                if y >= area.y + area.height - 1 {
                    return;
                }
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if !line.is_empty() {
            buf.set_string(area.x + 2, y, &line, Style::default().fg(Color::White));
            y += 1;
        }

        if y < area.y + area.height {
            buf.set_string(
                area.x + 1,
                area.y + area.height - 1,
                self.exits_line(),
                Style::default().fg(Color::Gray),
            );
        }
    }
}

/// The dramatic end-of-game banner.
pub struct VerdictBanner {
    verdict: Verdict,
    accused: String,
    tally: u32,
}

impl VerdictBanner {
    pub fn new(verdict: Verdict, accused: &str, tally: u32) -> Self {
        Self {
            verdict,
            accused: accused.to_string(),
            tally,
        }
    }

    fn lines(&self) -> Vec<String> {
        match self.verdict {
            Verdict::Correct => vec![
                "✓ ACCUSATION CORRECT!".to_string(),
                String::new(),
                format!("You accused: {}", self.accused),
                format!("Supporting clues: {}", self.tally),
                String::new(),
                "The culprit was brought to justice.".to_string(),
                "Congratulations, detective!".to_string(),
            ],
            Verdict::Incorrect => vec![
                "✗ ACCUSATION FAILED!".to_string(),
                String::new(),
                format!("You accused: {}", self.accused),
                format!("Supporting clues: {} (2 or more required)", self.tally),
                String::new(),
                "Without enough evidence, the culprit escaped...".to_string(),
            ],
        }
    }
}

impl Widget for VerdictBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < 4 {
            return;
        }
        let color = match self.verdict {
            Verdict::Correct => Color::Green,
            Verdict::Incorrect => Color::Red,
        };
        let style = Style::default().fg(color);

        // Double-line frame
        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(area.x + area.width - 1, area.y, "╗", style);
        buf.set_string(area.x, area.y + area.height - 1, "╚", style);
        buf.set_string(area.x + area.width - 1, area.y + area.height - 1, "╝", style);
        for x in 1..area.width - 1 {
            buf.set_string(area.x + x, area.y, "═", style);
            buf.set_string(area.x + x, area.y + area.height - 1, "═", style);
        }
        for y in 1..area.height - 1 {
            buf.set_string(area.x, area.y + y, "║", style);
            buf.set_string(area.x + area.width - 1, area.y + y, "║", style);
        }

        for (i, line) in self.lines().iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height - 1 {
                break;
            }
            let len = line.chars().count() as u16;
            let x = area.x + (area.width.saturating_sub(len)) / 2;
            let line_style = if i == 0 {
                style.add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            buf.set_string(x, y, line, line_style);
        }
    }
}
