//! The suspect index: clue -> suspect lookup
//!
//! A fixed-capacity hash table with linear probing. It is seeded once at
//! game start with the scenario's clue/suspect associations and treated as
//! read-only for the rest of the session. The table never resizes; if it
//! ever fills up, further insertions are dropped. That degradation is part
//! of the contract, not a bug to fix with rehashing.

use crate::{GameError, Result};
use serde::{Deserialize, Serialize};

/// Default number of slots in the index.
pub const INDEX_CAPACITY: usize = 50;

/// Sentinel returned when no suspect is on file for a clue.
pub const UNKNOWN_SUSPECT: &str = "DESCONHECIDO";

/// An occupied slot: one clue bound to one suspect.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SuspectEntry {
    clue: String,
    suspect: String,
}

/// Fixed-capacity associative map from clue text to suspect name.
///
/// Invariant: no two occupied slots hold the same clue, and the number of
/// occupied slots never exceeds the capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspectIndex {
    slots: Vec<Option<SuspectEntry>>,
    occupied: usize,
}

impl SuspectIndex {
    /// Create an index with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(INDEX_CAPACITY).expect("default capacity is non-zero")
    }

    /// Create an index with an explicit capacity. Zero capacity is
    /// rejected: probing would have nowhere to land.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GameError::InvalidIndexCapacity(capacity).into());
        }
        Ok(Self {
            slots: vec![None; capacity],
            occupied: 0,
        })
    }

    /// Hash a clue to its home slot: the sum of the key's bytes, reduced
    /// modulo capacity. Deterministic and cheap; collisions are expected
    /// and resolved by probing.
    pub fn hash(&self, key: &str) -> usize {
        let sum = key
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_add(b as usize));
        sum % self.slots.len()
    }

    /// Bind a clue to a suspect.
    ///
    /// Probes linearly from the home slot, wrapping modulo capacity, for
    /// at most `capacity` attempts. An existing entry with the same clue
    /// stops the probe without modification (the binding is idempotent).
    /// If every probe lands on an occupied slot the insertion is dropped
    /// silently; lookups of that clue will report the suspect as unknown.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let capacity = self.slots.len();
        let mut index = self.hash(clue);
        for _ in 0..capacity {
            match &self.slots[index] {
                Some(entry) => {
                    if entry.clue == clue {
                        return; // already bound, keep the original
                    }
                    index = (index + 1) % capacity;
                }
                None => {
                    self.slots[index] = Some(SuspectEntry {
                        clue: clue.to_string(),
                        suspect: suspect.to_string(),
                    });
                    self.occupied += 1;
                    return;
                }
            }
        }
        // Probe bound exhausted: table full, entry dropped.
    }

    /// Look up the suspect bound to a clue. Probes linearly from the home
    /// slot, at most `capacity` times.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        let capacity = self.slots.len();
        let mut index = self.hash(clue);
        for _ in 0..capacity {
            if let Some(entry) = &self.slots[index] {
                if entry.clue == clue {
                    return Some(entry.suspect.as_str());
                }
            }
            index = (index + 1) % capacity;
        }
        None
    }

    /// Like [`lookup`](Self::lookup), but with the unknown sentinel in
    /// place of `None`.
    pub fn suspect_for(&self, clue: &str) -> &str {
        self.lookup(clue).unwrap_or(UNKNOWN_SUSPECT)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// True when no association has been stored.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Total slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}
