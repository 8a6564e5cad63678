//! Rules interface for the AI opponent
//!
//! The engine crates never talk to the board library directly: this crate
//! wraps it behind a narrow surface of positions with canonical keys,
//! verbose move records and attack-count queries, plus the `Engine` trait
//! every opponent implementation fills in.

pub mod attacks;
pub mod error;
pub mod moves;
pub mod position;

pub use attacks::attack_counts;
pub use error::{RulesError, RulesResult};
pub use moves::{find_move, legal_moves, moves_for, MoveRecord};
pub use position::Position;

// Re-export the board library's primitive types so downstream crates share
// one vocabulary without depending on the library themselves.
pub use chess::{Color, Piece, Square, ALL_SQUARES};

// =============================================================================
// Engine trait, implemented by every opponent engine
// =============================================================================

/// Result of a move-selection search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (`None` when the position has no legal moves).
    pub best_move: Option<MoveRecord>,
    /// Score of the chosen line in centipawns, from the mover's perspective.
    pub score: i32,
    /// Search depth used, in plies.
    pub depth: u8,
    /// Number of positions visited.
    pub nodes: u64,
}

/// Trait that all opponent engines implement.
pub trait Engine {
    /// Picks a move for the side to move, searching to `depth` plies.
    ///
    /// No legal moves is a normal terminal condition reported through
    /// `best_move: None`; `Err` is reserved for contract violations and
    /// malformed data.
    fn search(&mut self, pos: &Position, depth: u8) -> RulesResult<SearchResult>;

    /// Engine name for display.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
