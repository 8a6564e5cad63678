//! Opening book
//!
//! A small curated repertoire (Sicilian lines) mapping canonical position
//! keys to one recommended move each. Loaded once from the bundled JSON,
//! immutable afterwards; lookups are O(1).

use std::collections::HashMap;

use rules_core::{find_move, MoveRecord, Position, RulesError, RulesResult};

static OPENINGS_JSON: &str = include_str!("openings.json");

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<String, String>,
}

impl OpeningBook {
    /// The bundled repertoire.
    pub fn embedded() -> Self {
        let entries = serde_json::from_str(OPENINGS_JSON)
            .expect("bundled opening book is valid JSON");
        Self { entries }
    }

    /// Builds a book from explicit key/move pairs. Used by tests and by
    /// callers shipping their own repertoire.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The recommended move for `key` in coordinate notation.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Resolves the book recommendation for `pos` against its legal moves.
    ///
    /// A book entry naming a move that is not legal in its own keyed
    /// position is corrupt data and is reported, not papered over.
    pub fn recommended(&self, pos: &Position) -> RulesResult<Option<MoveRecord>> {
        let notation = match self.lookup(&pos.key()) {
            Some(n) => n,
            None => return Ok(None),
        };
        match find_move(pos, notation) {
            Some(mv) => Ok(Some(mv)),
            None => Err(RulesError::MalformedQuery(format!(
                "opening book move {notation} is not legal in {}",
                pos.key()
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
