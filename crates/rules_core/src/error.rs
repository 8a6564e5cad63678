//! Error taxonomy for the rules interface

use thiserror::Error;

/// Errors surfaced by the rules interface and the engines built on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The FEN string could not be parsed into a position.
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    /// A move was applied to a position it is not legal in.
    ///
    /// The engine only ever applies moves it just enumerated, so hitting
    /// this from inside a search is an internal contract violation and is
    /// propagated to the caller, never recovered silently.
    #[error("illegal move {notation} in position {key}")]
    IllegalMove { notation: String, key: String },

    /// Board or book data needed by a query was malformed.
    ///
    /// Propagated rather than defaulted to a neutral answer, so upstream
    /// data bugs don't masquerade as a balanced position.
    #[error("malformed position query: {0}")]
    MalformedQuery(String),
}

/// Result type alias for rules and engine operations.
pub type RulesResult<T> = Result<T, RulesError>;
