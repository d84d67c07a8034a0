//! The mansion map: a fixed binary tree of rooms
//!
//! Each room has a name, the clue hidden in it, and up to two exits. The
//! map is plain data handed to the game at construction; the investigation
//! core only ever sees the clue string when a room is visited.

use serde::{Deserialize, Serialize};

/// A move through the mansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// One room of the mansion. A room owns the rooms behind its exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub clue: String,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// A dead-end room with no exits.
    pub fn leaf(name: &str, clue: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: clue.to_string(),
            left: None,
            right: None,
        }
    }

    /// Attach the room behind the left exit.
    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    /// Attach the room behind the right exit.
    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    /// The room behind an exit, if that exit exists.
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    /// True when the room has an exit in the given direction.
    pub fn has_exit(&self, direction: Direction) -> bool {
        self.child(direction).is_some()
    }

    /// True when both exits are missing.
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Walk a path of moves from this room. Returns `None` as soon as a
    /// step has no exit.
    pub fn room_at(&self, path: &[Direction]) -> Option<&Room> {
        let mut room = self;
        for &step in path {
            room = room.child(step)?;
        }
        Some(room)
    }

    /// Total number of rooms reachable from here, this one included.
    pub fn room_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |r| r.room_count())
            + self.right.as_ref().map_or(0, |r| r.room_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_mansion() -> Room {
        Room::leaf("Hall", "clue-hall")
            .with_left(Room::leaf("Study", "clue-study").with_right(Room::leaf("Vault", "clue-vault")))
            .with_right(Room::leaf("Kitchen", "clue-kitchen"))
    }

    #[test]
    fn paths_resolve_to_rooms() {
        let mansion = tiny_mansion();
        assert_eq!(mansion.room_at(&[]).unwrap().name, "Hall");
        assert_eq!(mansion.room_at(&[Direction::Left]).unwrap().name, "Study");
        assert_eq!(
            mansion
                .room_at(&[Direction::Left, Direction::Right])
                .unwrap()
                .name,
            "Vault"
        );
    }

    #[test]
    fn missing_exit_resolves_to_none() {
        let mansion = tiny_mansion();
        assert!(mansion.room_at(&[Direction::Right, Direction::Left]).is_none());
        assert!(!mansion.room_at(&[Direction::Right]).unwrap().has_exit(Direction::Left));
        assert!(mansion.room_at(&[Direction::Right]).unwrap().is_dead_end());
    }

    #[test]
    fn room_count_covers_the_whole_tree() {
        assert_eq!(tiny_mansion().room_count(), 4);
    }
}
