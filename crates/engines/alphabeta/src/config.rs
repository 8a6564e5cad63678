//! Engine configuration

use serde::{Deserialize, Serialize};

/// Settings for one engine instance. Serializable so a caller's settings
/// layer can persist difficulty alongside its own options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search depth in plies used by `choose_move`; `choose_move_at`
    /// overrides it per call.
    pub depth: u8,
    /// Whether the opening book is consulted at the root.
    pub use_book: bool,
    /// Probability of following a book hit instead of searching. The
    /// remainder deliberately bypasses the book for variety.
    pub book_follow_probability: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            use_book: true,
            book_follow_probability: 0.9,
        }
    }
}
