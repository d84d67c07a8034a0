//! Core game logic and state management

pub mod investigation;
pub mod scenario;

use crate::data::{Direction, MessageKind, Room};
use crate::game::investigation::{Investigation, RecordOutcome, Verdict, ACCUSATION_THRESHOLD};
use crate::game::scenario::Scenario;
use crate::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current phase of the game
///
/// A session moves MainMenu -> Exploring -> Accusing -> Resolved and
/// never cycles back from Resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    MainMenu,
    Exploring,
    Accusing,
    Resolved(Resolution),
}

/// How the accusation came out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub accused: String,
    pub tally: u32,
    pub verdict: Verdict,
}

/// Session statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub rooms_visited: u32,
    pub dead_end_moves: u32,
    pub clues_collected: u32,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    pub text: String,
}

impl GameMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            text: text.into(),
        }
    }
}

/// The main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Current game phase
    pub phase: GamePhase,

    /// The case being played
    pub scenario: Scenario,

    /// Collected clues and the seeded suspect index
    pub investigation: Investigation,

    /// Moves taken from the mansion entrance to the current room
    path: Vec<Direction>,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,

    /// Session statistics
    pub stats: GameStats,

    /// When the session started
    pub started_at: DateTime<Utc>,
}

impl Game {
    /// Create a new game over the given scenario.
    pub fn new(scenario: Scenario) -> Self {
        let investigation = Investigation::new(scenario.build_index());
        let mut game = Self {
            phase: GamePhase::MainMenu,
            scenario,
            investigation,
            path: Vec::new(),
            message_log: Vec::new(),
            stats: GameStats::default(),
            started_at: Utc::now(),
        };
        game.add_message(MessageKind::Info, "Welcome, detective. The mansion awaits.");
        game
    }

    /// Add a message to the log
    pub fn add_message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.message_log.push(GameMessage::new(kind, text));
    }

    /// The room the player is standing in. The path only ever grows
    /// through exits that exist, so resolution cannot fail; the entrance
    /// is the fallback all the same.
    pub fn current_room(&self) -> &Room {
        self.scenario
            .mansion
            .room_at(&self.path)
            .unwrap_or(&self.scenario.mansion)
    }

    /// Leave the menu and step into the entrance hall.
    pub fn start(&mut self) {
        self.phase = GamePhase::Exploring;
        self.path.clear();
        self.add_message(MessageKind::Info, "You enter the dark mansion...");
        self.visit_current_room();
    }

    /// Try to move through an exit. A missing exit is not an error; the
    /// player stays put and gets to pick again.
    pub fn move_to(&mut self, direction: Direction) {
        if self.phase != GamePhase::Exploring {
            return;
        }
        if self.current_room().has_exit(direction) {
            self.path.push(direction);
            self.add_message(
                MessageKind::Info,
                format!("You move to the {}...", direction.label()),
            );
            self.visit_current_room();
        } else {
            self.stats.dead_end_moves += 1;
            self.add_message(
                MessageKind::Warning,
                format!("There is no path to the {}!", direction.label()),
            );
        }
    }

    /// Collect the clue in the current room.
    fn visit_current_room(&mut self) {
        let room = self.current_room();
        let (name, clue) = (room.name.clone(), room.clue.clone());
        self.stats.rooms_visited += 1;

        match self.investigation.record_clue_if_new(&clue) {
            RecordOutcome::New => {
                self.stats.clues_collected += 1;
                self.add_message(MessageKind::Discovery, format!("[{name}] New clue: {clue}"));
            }
            RecordOutcome::AlreadyCollected => {
                self.add_message(MessageKind::Info, format!("[{name}] Clue already collected"));
            }
        }
    }

    /// Stop exploring and face the suspects.
    pub fn leave_for_accusation(&mut self) {
        if self.phase != GamePhase::Exploring {
            return;
        }
        self.phase = GamePhase::Accusing;
        self.add_message(
            MessageKind::Info,
            "You leave the mansion to make your accusation.",
        );
    }

    /// Accuse a suspect. Tallies the collected clues against the accused
    /// and resolves the session; there is no way back from here.
    pub fn accuse(&mut self, suspect: &str) -> Result<Verdict> {
        if self.phase != GamePhase::Accusing {
            return Err(GameError::InvalidState(format!(
                "accusation is only possible while accusing (phase: {:?})",
                self.phase
            ))
            .into());
        }

        let tally = self.investigation.tally_for_suspect(suspect);
        let verdict = Verdict::from_tally(tally);
        match verdict {
            Verdict::Correct => self.add_message(
                MessageKind::Success,
                format!("{suspect} taken into custody - {tally} clues sealed the case."),
            ),
            Verdict::Incorrect => self.add_message(
                MessageKind::Failure,
                format!(
                    "Only {tally} clue(s) point at {suspect} (needed {ACCUSATION_THRESHOLD}). The culprit walks free."
                ),
            ),
        }
        self.phase = GamePhase::Resolved(Resolution {
            accused: suspect.to_string(),
            tally,
            verdict,
        });
        Ok(verdict)
    }

    /// One-line status summary for the UI.
    pub fn status_line(&self) -> String {
        format!(
            "Room: {} | Rooms visited: {} | Clues: {} | Elapsed: {}m",
            self.current_room().name,
            self.stats.rooms_visited,
            self.investigation.clue_count(),
            (Utc::now() - self.started_at).num_minutes(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scenario::mansion_scenario;

    fn started_game() -> Game {
        let mut game = Game::new(mansion_scenario());
        game.start();
        game
    }

    #[test]
    fn starting_collects_the_entrance_clue() {
        let game = started_game();
        assert_eq!(game.phase, GamePhase::Exploring);
        assert_eq!(game.current_room().name, "Saguao");
        assert_eq!(game.investigation.clue_count(), 1);
        assert!(game
            .investigation
            .known_clues()
            .contains(&"Porta principal arrombada - sinal de invasão".to_string()));
    }

    #[test]
    fn walking_the_left_wing_convicts_mordecai() {
        let mut game = started_game();
        // Saguao -> Escritorio -> Biblioteca -> Arquivos: three Mordecai
        // clues on the way (the Biblioteca one points at Camila).
        game.move_to(Direction::Left);
        game.move_to(Direction::Left);
        game.move_to(Direction::Left);
        game.leave_for_accusation();

        let verdict = game.accuse("Mordecai").unwrap();
        assert_eq!(verdict, Verdict::Correct);
        match &game.phase {
            GamePhase::Resolved(res) => {
                assert_eq!(res.accused, "Mordecai");
                assert_eq!(res.tally, 3);
                assert_eq!(res.verdict, Verdict::Correct);
            }
            other => panic!("expected resolution, got {other:?}"),
        }
    }

    #[test]
    fn a_hasty_accusation_fails() {
        let mut game = started_game();
        game.move_to(Direction::Right); // Sala_Estar: one Victor clue
        game.leave_for_accusation();

        let verdict = game.accuse("Victor").unwrap();
        assert_eq!(verdict, Verdict::Incorrect);
    }

    #[test]
    fn dead_end_moves_leave_the_player_in_place() {
        let mut game = started_game();
        // Arquivos is a leaf.
        game.move_to(Direction::Left);
        game.move_to(Direction::Left);
        game.move_to(Direction::Left);
        assert_eq!(game.current_room().name, "Arquivos");

        game.move_to(Direction::Left);
        assert_eq!(game.current_room().name, "Arquivos");
        assert_eq!(game.stats.dead_end_moves, 1);
        assert_eq!(
            game.message_log.last().map(|m| m.kind),
            Some(MessageKind::Warning)
        );
    }

    #[test]
    fn revisited_clues_are_not_double_counted() {
        let mut game = started_game();
        game.move_to(Direction::Left);
        // Bounce off the same dead end repeatedly, then recheck counters.
        let before = game.investigation.clue_count();
        game.move_to(Direction::Right); // Quarto_Principal (leaf)
        game.move_to(Direction::Right);
        game.move_to(Direction::Right);
        assert_eq!(game.investigation.clue_count(), before + 1);
        assert_eq!(game.stats.clues_collected, game.investigation.clue_count());
    }

    #[test]
    fn accusing_outside_the_accusation_phase_is_rejected() {
        let mut game = started_game();
        assert!(game.accuse("Mordecai").is_err());

        game.leave_for_accusation();
        game.accuse("Isabela").unwrap();
        // Resolved is terminal.
        assert!(game.accuse("Isabela").is_err());
        assert!(matches!(game.phase, GamePhase::Resolved(_)));
    }

    #[test]
    fn movement_is_ignored_once_exploration_ends() {
        let mut game = started_game();
        game.leave_for_accusation();
        game.move_to(Direction::Left);
        assert_eq!(game.current_room().name, "Saguao");
        assert_eq!(game.stats.rooms_visited, 1);
    }

    #[test]
    fn accusing_an_unknown_name_tallies_zero() {
        let mut game = started_game();
        game.leave_for_accusation();
        let verdict = game.accuse("Sherlock").unwrap();
        assert_eq!(verdict, Verdict::Incorrect);
        match &game.phase {
            GamePhase::Resolved(res) => assert_eq!(res.tally, 0),
            other => panic!("expected resolution, got {other:?}"),
        }
    }
}
