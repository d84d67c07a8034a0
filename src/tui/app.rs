//! Main application state and rendering

use crate::data::{Direction, MessageKind};
use crate::game::scenario::mansion_scenario;
use crate::game::{Game, GamePhase};
use crate::tui::widgets::{RoomCard, VerdictBanner};
use crate::tui::{
    create_content_layout, create_main_area_layout, create_main_layout, kind_color, styled_block,
    Theme, HELP_TEXT, LOGO, SMALL_LOGO,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub suspect_state: ListState,
}

impl App {
    pub fn new() -> Self {
        let mut suspect_state = ListState::default();
        suspect_state.select(Some(0));

        Self {
            game: Game::new(mansion_scenario()),
            theme: Theme::default(),
            running: true,
            show_help: false,
            suspect_state,
        }
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                if key.code == KeyCode::Char('?') {
                    self.show_help = !self.show_help;
                    return Ok(true);
                }
                if self.show_help {
                    if key.code == KeyCode::Esc {
                        self.show_help = false;
                    }
                    return Ok(true);
                }

                match self.game.phase {
                    GamePhase::MainMenu => self.handle_menu_key(key.code),
                    GamePhase::Exploring => self.handle_exploring_key(key.code),
                    GamePhase::Accusing => self.handle_accusing_key(key.code),
                    GamePhase::Resolved(_) => self.handle_resolved_key(key.code),
                }
            }
        }
        Ok(self.running)
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.game.start(),
            KeyCode::Char('q') => self.running = false,
            _ => {}
        }
    }

    fn handle_exploring_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('e') => self.game.move_to(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') => self.game.move_to(Direction::Right),
            KeyCode::Char('s') => {
                self.game.leave_for_accusation();
                self.suspect_state.select(Some(0));
            }
            _ => {}
        }
    }

    fn handle_accusing_key(&mut self, code: KeyCode) {
        let roster_len = self.game.scenario.suspects.len();
        if roster_len == 0 {
            return;
        }
        match code {
            KeyCode::Up => {
                let i = self.suspect_state.selected().unwrap_or(0);
                self.suspect_state
                    .select(Some(if i == 0 { roster_len - 1 } else { i - 1 }));
            }
            KeyCode::Down => {
                let i = self.suspect_state.selected().unwrap_or(0);
                self.suspect_state.select(Some((i + 1) % roster_len));
            }
            KeyCode::Enter => {
                let selected = self.suspect_state.selected().unwrap_or(0);
                if let Some(profile) = self.game.scenario.suspects.get(selected) {
                    let name = profile.name.clone();
                    if let Err(err) = self.game.accuse(&name) {
                        self.game.add_message(MessageKind::Warning, err.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_resolved_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc) {
            self.running = false;
        }
    }

    /// Render the whole frame
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.size());
        self.render_header(frame, chunks[0]);

        match self.game.phase {
            GamePhase::MainMenu => self.render_menu(frame, chunks[1]),
            GamePhase::Exploring => self.render_exploring(frame, chunks[1]),
            GamePhase::Accusing => self.render_accusing(frame, chunks[1]),
            GamePhase::Resolved(_) => self.render_resolved(frame, chunks[1]),
        }

        self.render_status_bar(frame, chunks[2]);

        if self.show_help {
            self.render_help(frame);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                SMALL_LOGO,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                self.game.scenario.title.as_str(),
                Style::default().fg(self.theme.fg),
            ),
        ]);
        let header = Paragraph::new(title)
            .alignment(Alignment::Center)
            .block(styled_block("", &self.theme));
        frame.render_widget(header, area);
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = LOGO
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(self.theme.accent))))
            .collect();
        lines.push(Line::from(""));
        for l in self.game.scenario.synopsis.lines() {
            lines.push(Line::from(l.to_string()));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ENTER to begin the investigation - q to quit - ? for help",
            Style::default()
                .fg(self.theme.warning)
                .add_modifier(Modifier::BOLD),
        )));

        let menu = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(menu, area);
    }

    fn render_exploring(&self, frame: &mut Frame, area: Rect) {
        let content = create_content_layout(area);
        self.render_clue_panel(frame, content[0]);

        let main = create_main_area_layout(content[1]);
        let card_block = styled_block("Current Room", &self.theme);
        let inner = card_block.inner(main[0]);
        frame.render_widget(card_block, main[0]);
        frame.render_widget(
            RoomCard::new(self.game.current_room()).accent(self.theme.accent),
            inner,
        );

        self.render_message_log(frame, main[1]);
    }

    fn render_accusing(&mut self, frame: &mut Frame, area: Rect) {
        let content = create_content_layout(area);
        self.render_clue_panel(frame, content[0]);

        let items: Vec<ListItem> = self
            .game
            .scenario
            .suspects
            .iter()
            .map(|s| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        s.name.clone(),
                        Style::default()
                            .fg(self.theme.fg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" - {}", s.role), Style::default().fg(self.theme.border)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(styled_block("Whom do you accuse?", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.failure)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("➤ ");
        frame.render_stateful_widget(list, content[1], &mut self.suspect_state);
    }

    fn render_resolved(&self, frame: &mut Frame, area: Rect) {
        if let GamePhase::Resolved(res) = &self.game.phase {
            let banner_height = 9.min(area.height);
            let banner_area = Rect {
                x: area.x + area.width / 6,
                y: area.y + (area.height.saturating_sub(banner_height)) / 2,
                width: area.width * 2 / 3,
                height: banner_height,
            };
            frame.render_widget(
                VerdictBanner::new(res.verdict, &res.accused, res.tally),
                banner_area,
            );
        }
    }

    fn render_clue_panel(&self, frame: &mut Frame, area: Rect) {
        let clues = self.game.investigation.known_clues();
        let title = format!("Collected Clues ({})", clues.len());
        let items: Vec<ListItem> = clues
            .iter()
            .map(|clue| {
                ListItem::new(Line::from(vec![
                    Span::styled("• ", Style::default().fg(self.theme.discovery)),
                    Span::raw(clue.clone()),
                ]))
            })
            .collect();
        let list = List::new(items).block(styled_block(&title, &self.theme));
        frame.render_widget(list, area);
    }

    fn render_message_log(&self, frame: &mut Frame, area: Rect) {
        let visible = (area.height.saturating_sub(2)) as usize;
        let items: Vec<ListItem> = self
            .game
            .message_log
            .iter()
            .rev()
            .take(visible)
            .rev()
            .map(|msg| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", msg.kind.symbol()),
                        Style::default().fg(kind_color(&msg.kind)),
                    ),
                    Span::styled(
                        format!("[{}] ", msg.timestamp.format("%H:%M:%S")),
                        Style::default().fg(self.theme.border),
                    ),
                    Span::raw(msg.text.clone()),
                ]))
            })
            .collect();
        let log = List::new(items).block(styled_block("Investigation Log", &self.theme));
        frame.render_widget(log, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = match &self.game.phase {
            GamePhase::MainMenu => "Main menu".to_string(),
            GamePhase::Resolved(res) => format!(
                "Case closed - accused {} with {} supporting clue(s)",
                res.accused, res.tally
            ),
            _ => self.game.status_line(),
        };
        let bar = Paragraph::new(Line::from(vec![
            Span::raw(status),
            Span::styled("  |  ? help", Style::default().fg(self.theme.border)),
        ]))
        .block(styled_block("", &self.theme));
        frame.render_widget(bar, area);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = frame.size();
        let width = 63.min(area.width);
        let height = 22.min(area.height);
        let popup = Rect {
            x: (area.width.saturating_sub(width)) / 2,
            y: (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };
        frame.render_widget(Clear, popup);
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Center);
        frame.render_widget(help, popup);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
