//! Per-decision transposition table

use std::collections::HashMap;

/// What a stored score means relative to the alpha-beta window it was
/// computed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// True value of the position.
    Exact,
    /// Fail-high: the real value is at least this (beta cutoff).
    Lower,
    /// Fail-low: the real value is at most this (no move raised alpha).
    Upper,
}

/// A cached search result for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Remaining search depth the score was computed with.
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
}

/// Cache of canonical position key -> score, private to one top-level
/// `choose_move` call. Never shared across searches of different root
/// positions: keys identify positions only, so cross-search reuse could
/// hand back a score from an unrelated game line.
///
/// Two deliberate simplifications: `store` is last-write-wins regardless
/// of relative depth, and `lookup` treats every sufficient-depth hit as
/// exact even when the stored bound is `Lower` or `Upper`.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<String, ScoreEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the table.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Unconditionally records `score` for `key`, overwriting any prior
    /// entry no matter its depth.
    pub fn store(&mut self, key: String, depth: u8, score: i32, bound: Bound) {
        self.entries.insert(key, ScoreEntry { depth, score, bound });
    }

    /// Returns the stored score if the entry was searched at least as deep
    /// as requested. The bound kind is informational only here.
    pub fn lookup(&self, key: &str, depth: u8) -> Option<i32> {
        let entry = self.entries.get(key)?;
        if entry.depth >= depth {
            log::trace!("transposition hit: {key} at depth {depth}");
            return Some(entry.score);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
