//! Depth-indexed transposition table for alpha-beta
//!
//! Entries are keyed by `(state, remaining depth)`, so a value computed with
//! a shallower search is never reused for a deeper one. The table is
//! bounded: once full, new keys are dropped while existing keys can still
//! be refreshed.

use std::collections::HashMap;

use crate::game_state::GameState;

/// What a stored value says about the true minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored value is the minimax value
    Exact,
    /// The minimax value is at least the stored value (fail high)
    Lower,
    /// The minimax value is at most the stored value (fail low)
    Upper,
}

impl Bound {
    /// Classifies a fail-soft result obtained with window `(alpha, beta)`
    pub fn classify(value: f64, alpha: f64, beta: f64) -> Self {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

/// A cached value with its bound kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranspositionEntry {
    pub value: f64,
    pub bound: Bound,
}

impl TranspositionEntry {
    /// Returns the stored value if it settles a search with window `(alpha, beta)`
    pub fn cutoff(&self, alpha: f64, beta: f64) -> Option<f64> {
        match self.bound {
            Bound::Exact => Some(self.value),
            Bound::Lower if self.value >= beta => Some(self.value),
            Bound::Upper if self.value <= alpha => Some(self.value),
            _ => None,
        }
    }
}

/// Bounded `(state, depth) → value` cache
pub struct TranspositionTable<S: GameState> {
    entries: HashMap<(S, u32), TranspositionEntry>,
    capacity: usize,
    rejected: u64,
}

impl<S: GameState> TranspositionTable<S> {
    /// Creates a table holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        TranspositionTable {
            entries: HashMap::new(),
            capacity,
            rejected: 0,
        }
    }

    /// Looks up the entry stored for `state` at remaining `depth`
    pub fn lookup(&self, state: &S, depth: u32) -> Option<TranspositionEntry> {
        self.entries.get(&(state.clone(), depth)).copied()
    }

    /// Stores an entry, returning false if the table is full and the key new
    pub fn store(&mut self, state: &S, depth: u32, entry: TranspositionEntry) -> bool {
        let key = (state.clone(), depth);
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            if self.rejected == 0 {
                log::warn!(
                    "transposition table full at {} entries; new positions are not cached",
                    self.capacity
                );
            }
            self.rejected += 1;
            return false;
        }
        self.entries.insert(key, entry);
        true
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.rejected = 0;
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stores refused since the last clear because the table was full
    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::NoPlayer;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Pos(u32);

    impl GameState for Pos {
        type Action = usize;
        type Player = NoPlayer;

        fn get_legal_actions(&self) -> Vec<usize> {
            vec![]
        }

        fn apply_action(&self, _action: &usize) -> Self {
            self.clone()
        }

        fn is_terminal(&self) -> bool {
            true
        }

        fn get_current_player(&self) -> NoPlayer {
            NoPlayer
        }
    }

    fn exact(value: f64) -> TranspositionEntry {
        TranspositionEntry {
            value,
            bound: Bound::Exact,
        }
    }

    #[test]
    fn entries_are_depth_indexed() {
        let mut table = TranspositionTable::new(16);
        table.store(&Pos(1), 3, exact(5.0));

        assert_eq!(table.lookup(&Pos(1), 3), Some(exact(5.0)));
        assert_eq!(table.lookup(&Pos(1), 2), None);
        assert_eq!(table.lookup(&Pos(2), 3), None);
    }

    #[test]
    fn full_table_refuses_new_keys_but_refreshes_old_ones() {
        let mut table = TranspositionTable::new(2);
        assert!(table.store(&Pos(1), 1, exact(1.0)));
        assert!(table.store(&Pos(2), 1, exact(2.0)));
        assert!(!table.store(&Pos(3), 1, exact(3.0)));
        assert!(table.store(&Pos(1), 1, exact(10.0)));

        assert_eq!(table.len(), 2);
        assert_eq!(table.rejected(), 1);
        assert_eq!(table.lookup(&Pos(1), 1), Some(exact(10.0)));

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.rejected(), 0);
    }

    #[test]
    fn bounds_only_cut_outside_the_window() {
        let lower = TranspositionEntry {
            value: 4.0,
            bound: Bound::Lower,
        };
        assert_eq!(lower.cutoff(0.0, 4.0), Some(4.0));
        assert_eq!(lower.cutoff(0.0, 5.0), None);

        let upper = TranspositionEntry {
            value: 1.0,
            bound: Bound::Upper,
        };
        assert_eq!(upper.cutoff(1.0, 2.0), Some(1.0));
        assert_eq!(upper.cutoff(0.5, 2.0), None);

        assert_eq!(Bound::classify(1.0, 1.0, 2.0), Bound::Upper);
        assert_eq!(Bound::classify(2.0, 1.0, 2.0), Bound::Lower);
        assert_eq!(Bound::classify(1.5, 1.0, 2.0), Bound::Exact);
    }
}
