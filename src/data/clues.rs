//! The clue collection: an ordered binary search tree
//!
//! Clues are plain text and their text is their identity. The tree keeps
//! them in byte-lexicographic order with no duplicates, so listing the
//! collection in-order always reads alphabetically.

use serde::{Deserialize, Serialize};

/// Maximum length of a clue's text, in characters. Longer input is
/// truncated on a character boundary when it enters the collection.
pub const MAX_CLUE_LEN: usize = 99;

/// One node of the clue tree. A node owns its children outright; the
/// payload never changes after the node is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClueNode {
    clue: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(clue: String) -> Self {
        Self {
            clue,
            left: None,
            right: None,
        }
    }
}

/// The set of clues collected so far.
///
/// Invariant: for every node, everything in the left subtree compares
/// strictly less than the node's clue and everything in the right subtree
/// strictly greater. Comparison is case-sensitive with no normalization,
/// so clues differing only in case or accents are distinct entries.
///
/// The set only ever grows during a session; clues are never removed.
/// The tree is not self-balancing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClueSet {
    root: Option<Box<ClueNode>>,
}

impl ClueSet {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Insert a clue, keeping the tree ordered. Inserting a clue that is
    /// already present leaves the tree untouched; the call is idempotent.
    pub fn insert(&mut self, clue: &str) {
        let clue = bounded(clue);
        let mut node = &mut self.root;
        while let Some(n) = node {
            match clue.cmp(n.clue.as_str()) {
                std::cmp::Ordering::Less => node = &mut n.left,
                std::cmp::Ordering::Greater => node = &mut n.right,
                std::cmp::Ordering::Equal => return,
            }
        }
        *node = Some(Box::new(ClueNode::new(clue.to_string())));
    }

    /// Check whether a clue was already collected. O(depth).
    pub fn contains(&self, clue: &str) -> bool {
        let clue = bounded(clue);
        let mut node = &self.root;
        while let Some(n) = node {
            match clue.cmp(n.clue.as_str()) {
                std::cmp::Ordering::Less => node = &n.left,
                std::cmp::Ordering::Greater => node = &n.right,
                std::cmp::Ordering::Equal => return true,
            }
        }
        false
    }

    /// Number of clues in the collection.
    pub fn len(&self) -> usize {
        fn count(node: &Option<Box<ClueNode>>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + count(&n.left) + count(&n.right),
            }
        }
        count(&self.root)
    }

    /// True when nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterate the clues in ascending lexicographic order (in-order
    /// traversal). The iterator is lazy and can be restarted by calling
    /// `iter` again; it borrows the tree and never mutates it.
    pub fn iter(&self) -> InOrderIter<'_> {
        let mut iter = InOrderIter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Drop every node. Safe to call on an empty set.
    pub fn clear(&mut self) {
        // Unlink iteratively so a degenerate (list-shaped) tree cannot
        // blow the stack through recursive drop.
        let mut pending = Vec::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Some(mut node) = pending.pop() {
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
        }
    }
}

impl Drop for ClueSet {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Truncate clue text to `MAX_CLUE_LEN` characters.
fn bounded(clue: &str) -> &str {
    match clue.char_indices().nth(MAX_CLUE_LEN) {
        Some((idx, _)) => &clue[..idx],
        None => clue,
    }
}

/// In-order iterator over a `ClueSet`, backed by an explicit stack.
pub struct InOrderIter<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrderIter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.clue.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collected(set: &ClueSet) -> Vec<String> {
        set.iter().map(String::from).collect()
    }

    #[test]
    fn empty_set_has_nothing() {
        let set = ClueSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains("anything"));
        assert_eq!(collected(&set), Vec::<String>::new());
    }

    #[test]
    fn in_order_listing_is_sorted_and_unique() {
        let mut set = ClueSet::new();
        for clue in ["delta", "alpha", "echo", "bravo", "charlie", "bravo", "alpha"] {
            set.insert(clue);
        }
        let listed = collected(&set);
        assert_eq!(listed, vec!["alpha", "bravo", "charlie", "delta", "echo"]);
        // Strictly ascending: no equal neighbors either.
        for pair in listed.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn duplicate_insert_leaves_count_unchanged() {
        let mut set = ClueSet::new();
        set.insert("Faca sangrenta na pia da cozinha");
        assert_eq!(set.len(), 1);
        set.insert("Faca sangrenta na pia da cozinha");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn contains_tracks_insertions() {
        let mut set = ClueSet::new();
        assert!(!set.contains("Cofre aberto e documentos espalhados"));
        set.insert("Cofre aberto e documentos espalhados");
        assert!(set.contains("Cofre aberto e documentos espalhados"));
        assert!(!set.contains("cofre aberto e documentos espalhados")); // case matters
    }

    #[test]
    fn comparison_is_case_and_accent_sensitive() {
        let mut set = ClueSet::new();
        set.insert("Taça");
        set.insert("taça");
        set.insert("Taca");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn long_clues_are_truncated_consistently() {
        let long: String = "x".repeat(MAX_CLUE_LEN + 40);
        let mut set = ClueSet::new();
        set.insert(&long);
        // Lookup with the same over-long text goes through the same bound.
        assert!(set.contains(&long));
        assert_eq!(set.iter().next().map(str::len), Some(MAX_CLUE_LEN));
        // A second over-long clue with the same prefix is the same clue.
        let longer: String = "x".repeat(MAX_CLUE_LEN + 80);
        set.insert(&longer);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = ClueSet::new();
        set.insert("a");
        set.insert("b");
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains("a"));
        set.clear(); // no-op on empty
        assert!(set.is_empty());
    }

    #[test]
    fn degenerate_tree_drops_without_overflow() {
        // Strictly ascending insertions build a right spine.
        let mut set = ClueSet::new();
        for i in 0..50_000 {
            set.insert(&format!("{i:08}"));
        }
        drop(set);
    }

    #[test]
    fn iterator_restarts_cleanly() {
        let mut set = ClueSet::new();
        set.insert("b");
        set.insert("a");
        let first: Vec<_> = set.iter().collect();
        let second: Vec<_> = set.iter().collect();
        assert_eq!(first, second);
    }
}
