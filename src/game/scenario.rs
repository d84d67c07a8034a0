//! Scenario definition for the mansion mystery
//!
//! All fixed game content lives here as explicit configuration handed to
//! the game at construction: the mansion map, the suspect roster, and the
//! clue/suspect associations that seed the index. Nothing in the core
//! reads this data from globals.

use crate::data::{Room, SuspectIndex};
use serde::{Deserialize, Serialize};

/// A person under investigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspectProfile {
    pub name: String,
    pub role: String,
}

impl SuspectProfile {
    fn new(name: &str, role: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
        }
    }
}

/// A complete playable case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub synopsis: String,

    /// The mansion the player will explore.
    pub mansion: Room,

    /// Who can be accused.
    pub suspects: Vec<SuspectProfile>,

    /// Ground truth: which clue implicates which suspect.
    pub associations: Vec<(String, String)>,
}

impl Scenario {
    /// Seed a suspect index with this scenario's associations.
    pub fn build_index(&self) -> SuspectIndex {
        let mut index = SuspectIndex::new();
        for (clue, suspect) in &self.associations {
            index.insert(clue, suspect);
        }
        index
    }

    /// Suspect names in roster order.
    pub fn suspect_names(&self) -> Vec<&str> {
        self.suspects.iter().map(|s| s.name.as_str()).collect()
    }
}

/// The mansion of the murdered millionaire: nine rooms, nine clues, four
/// suspects.
pub fn mansion_scenario() -> Scenario {
    let mansion = Room::leaf("Saguao", "Porta principal arrombada - sinal de invasão")
        .with_left(
            Room::leaf("Escritorio", "Cofre aberto e documentos espalhados")
                .with_left(
                    Room::leaf("Biblioteca", "Livro de contabilidade com anotações suspeitas")
                        .with_left(Room::leaf(
                            "Arquivos",
                            "Contrato rasgado com nome de um suspeito",
                        ))
                        .with_right(Room::leaf(
                            "Sala_Leitura",
                            "Carta não enviada confessando um crime",
                        )),
                )
                .with_right(Room::leaf(
                    "Quarto_Principal",
                    "Joia valiosa encontrada embaixo da cama",
                )),
        )
        .with_right(
            Room::leaf("Sala_Estar", "Taça de vinho vazia na mesa de centro")
                .with_left(Room::leaf("Cozinha", "Faca sangrenta na pia da cozinha"))
                .with_right(Room::leaf(
                    "Jardim",
                    "Pegadas de bota na lama próximo à janela",
                )),
        );

    let suspects = vec![
        SuspectProfile::new("Mordecai", "the owner's personal assistant"),
        SuspectProfile::new("Isabela", "the housemaid"),
        SuspectProfile::new("Victor", "a rival businessman"),
        SuspectProfile::new("Camila", "the owner's wife"),
    ];

    let associations = [
        ("Porta principal arrombada - sinal de invasão", "Mordecai"),
        ("Cofre aberto e documentos espalhados", "Mordecai"),
        ("Contrato rasgado com nome de um suspeito", "Mordecai"),
        ("Faca sangrenta na pia da cozinha", "Isabela"),
        ("Pegadas de bota na lama próximo à janela", "Isabela"),
        ("Taça de vinho vazia na mesa de centro", "Victor"),
        ("Joia valiosa encontrada embaixo da cama", "Victor"),
        ("Livro de contabilidade com anotações suspeitas", "Camila"),
        ("Carta não enviada confessando um crime", "Camila"),
    ]
    .into_iter()
    .map(|(clue, suspect)| (clue.to_string(), suspect.to_string()))
    .collect();

    Scenario {
        title: "The Mystery of the Dark Mansion".to_string(),
        synopsis: r#"
A mysterious death at the millionaire's mansion. Four suspects, nine rooms,
and a trail of clues left behind. Walk the mansion, gather what you find,
and when you are ready, step outside and name the culprit.

Choose carefully. An accusation with fewer than two supporting clues will
let the killer walk free.
        "#
        .trim()
        .to_string(),
        mansion,
        suspects,
        associations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Direction;

    #[test]
    fn the_mansion_has_nine_rooms() {
        let scenario = mansion_scenario();
        assert_eq!(scenario.mansion.room_count(), 9);
        assert_eq!(scenario.mansion.name, "Saguao");
    }

    #[test]
    fn every_room_clue_is_on_file() {
        let scenario = mansion_scenario();
        let index = scenario.build_index();

        fn visit(room: &Room, index: &SuspectIndex) {
            assert!(
                index.lookup(&room.clue).is_some(),
                "no suspect on file for clue in {}",
                room.name
            );
            for dir in [Direction::Left, Direction::Right] {
                if let Some(child) = room.child(dir) {
                    visit(child, index);
                }
            }
        }
        visit(&scenario.mansion, &index);
    }

    #[test]
    fn index_is_seeded_with_every_association() {
        let scenario = mansion_scenario();
        let index = scenario.build_index();
        assert_eq!(index.len(), scenario.associations.len());
        assert_eq!(index.len(), 9);
        for (clue, suspect) in &scenario.associations {
            assert_eq!(index.lookup(clue), Some(suspect.as_str()));
        }
    }

    #[test]
    fn every_suspect_has_at_least_two_clues() {
        // Each roster member must be convictable if all rooms are visited.
        let scenario = mansion_scenario();
        for suspect in scenario.suspect_names() {
            let clues = scenario
                .associations
                .iter()
                .filter(|(_, s)| s == suspect)
                .count();
            assert!(clues >= 2, "{suspect} has only {clues} clue(s)");
        }
    }

    #[test]
    fn roster_holds_the_four_suspects() {
        let scenario = mansion_scenario();
        assert_eq!(
            scenario.suspect_names(),
            vec!["Mordecai", "Isabela", "Victor", "Camila"]
        );
    }
}
