//! Investigation mechanics
//!
//! Ties the clue tree and the suspect index together: record clues as the
//! player finds them, tally how many point at the accused, pass verdict.

use crate::data::{ClueSet, SuspectIndex};
use serde::{Deserialize, Serialize};

/// Clues implicating a suspect needed for a correct accusation. A fixed
/// game rule, not a setting.
pub const ACCUSATION_THRESHOLD: u32 = 2;

/// What happened when a clue was reported to the investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordOutcome {
    /// First time this clue was seen.
    New,
    /// The clue was already in the collection; nothing changed.
    AlreadyCollected,
}

/// Outcome of an accusation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    /// Judge a clue tally against the accusation threshold.
    pub fn from_tally(tally: u32) -> Self {
        if tally >= ACCUSATION_THRESHOLD {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

/// The running investigation: the clues collected so far and the seeded
/// clue/suspect associations.
///
/// The clue set grows during play; the suspect index is seeded once and
/// only read afterwards. Both live and die with the investigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigation {
    clues: ClueSet,
    index: SuspectIndex,
    collected: u32,
}

impl Investigation {
    /// Start an investigation over a seeded suspect index.
    pub fn new(index: SuspectIndex) -> Self {
        Self {
            clues: ClueSet::new(),
            index,
            collected: 0,
        }
    }

    /// Report a clue found in a room. Inserts it and bumps the distinct
    /// clue counter only if it was not collected before. Never touches
    /// the suspect index.
    pub fn record_clue_if_new(&mut self, clue: &str) -> RecordOutcome {
        if self.clues.contains(clue) {
            return RecordOutcome::AlreadyCollected;
        }
        self.clues.insert(clue);
        self.collected += 1;
        RecordOutcome::New
    }

    /// Count how many collected clues implicate the given suspect. Every
    /// clue is looked up in the index; matches are exact and
    /// case-sensitive. The result does not depend on traversal order.
    pub fn tally_for_suspect(&self, suspect: &str) -> u32 {
        self.clues
            .iter()
            .filter(|clue| self.index.lookup(clue) == Some(suspect))
            .count() as u32
    }

    /// All collected clues in alphabetical order.
    pub fn known_clues(&self) -> Vec<String> {
        self.clues.iter().map(String::from).collect()
    }

    /// Number of distinct clues collected.
    pub fn clue_count(&self) -> u32 {
        self.collected
    }

    /// The suspect on file for a single clue, or the unknown sentinel.
    pub fn suspect_for(&self, clue: &str) -> &str {
        self.index.suspect_for(clue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scenario::mansion_scenario;

    fn seeded() -> Investigation {
        Investigation::new(mansion_scenario().build_index())
    }

    #[test]
    fn recording_a_clue_twice_counts_once() {
        let mut inv = seeded();
        assert_eq!(
            inv.record_clue_if_new("Cofre aberto e documentos espalhados"),
            RecordOutcome::New
        );
        assert_eq!(
            inv.record_clue_if_new("Cofre aberto e documentos espalhados"),
            RecordOutcome::AlreadyCollected
        );
        assert_eq!(inv.clue_count(), 1);
        assert_eq!(inv.known_clues().len(), 1);
    }

    #[test]
    fn three_mordecai_clues_convict_him() {
        let mut inv = seeded();
        inv.record_clue_if_new("Cofre aberto e documentos espalhados");
        inv.record_clue_if_new("Contrato rasgado com nome de um suspeito");
        inv.record_clue_if_new("Porta principal arrombada - sinal de invasão");

        assert_eq!(inv.tally_for_suspect("Mordecai"), 3);
        assert_eq!(Verdict::from_tally(3), Verdict::Correct);
    }

    #[test]
    fn a_single_victor_clue_is_not_enough() {
        let mut inv = seeded();
        inv.record_clue_if_new("Taça de vinho vazia na mesa de centro");

        assert_eq!(inv.tally_for_suspect("Victor"), 1);
        assert_eq!(Verdict::from_tally(1), Verdict::Incorrect);
    }

    #[test]
    fn empty_investigation_tallies_zero_for_everyone() {
        let inv = seeded();
        for suspect in ["Mordecai", "Isabela", "Victor", "Camila", "Ninguém"] {
            assert_eq!(inv.tally_for_suspect(suspect), 0);
        }
        assert_eq!(inv.clue_count(), 0);
        assert!(inv.known_clues().is_empty());
        assert_eq!(Verdict::from_tally(0), Verdict::Incorrect);
    }

    #[test]
    fn unmapped_clues_never_implicate_anyone() {
        let mut inv = seeded();
        inv.record_clue_if_new("Bilhete rabiscado sem assinatura");
        assert_eq!(inv.suspect_for("Bilhete rabiscado sem assinatura"), crate::data::UNKNOWN_SUSPECT);
        for suspect in ["Mordecai", "Isabela", "Victor", "Camila"] {
            assert_eq!(inv.tally_for_suspect(suspect), 0);
        }
    }

    #[test]
    fn tally_matches_are_case_sensitive() {
        let mut inv = seeded();
        inv.record_clue_if_new("Taça de vinho vazia na mesa de centro");
        inv.record_clue_if_new("Joia valiosa encontrada embaixo da cama");
        assert_eq!(inv.tally_for_suspect("Victor"), 2);
        assert_eq!(inv.tally_for_suspect("victor"), 0);
    }

    #[test]
    fn known_clues_come_out_alphabetical() {
        let mut inv = seeded();
        inv.record_clue_if_new("Taça de vinho vazia na mesa de centro");
        inv.record_clue_if_new("Cofre aberto e documentos espalhados");
        inv.record_clue_if_new("Faca sangrenta na pia da cozinha");
        let listed = inv.known_clues();
        let mut sorted = listed.clone();
        sorted.sort();
        assert_eq!(listed, sorted);
    }
}
