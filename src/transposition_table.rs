use std::collections::HashMap;

use crate::board::Board;

/// A memoised search result
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CacheEntry {
    pub column: Option<usize>,
    pub score: i32,
}

/// Exact-keyed memoisation of search results
///
/// Entries are keyed by the full board contents plus the remaining search
/// depth: a result computed at one depth is never an answer for another,
/// and the equality-checked key rules out collisions between distinct
/// positions. The table grows without bound within a game and is cleared
/// when a new game starts.
#[derive(Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<(Board, u8), CacheEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, board: &Board, depth: u8) -> Option<CacheEntry> {
        self.entries.get(&(*board, depth)).copied()
    }

    pub fn set(&mut self, board: &Board, depth: u8, column: Option<usize>, score: i32) {
        self.entries
            .insert((*board, depth), CacheEntry { column, score });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
