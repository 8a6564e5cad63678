//! Alpha-Beta Opponent Engine
//!
//! Bounded-depth negamax with alpha-beta pruning, a per-decision
//! transposition table, a hand-weighted evaluator and an opening-book
//! shortcut. The rules of the game come entirely from `rules_core`; this
//! crate only decides which legal move to play.
//!
//! The search is single-threaded and runs to completion; a deep search can
//! take a while, so interactive callers should dispatch `choose_move` off
//! their UI path and deliver the result asynchronously.

mod book;
mod config;
mod eval;
mod ordering;
mod search;
mod table;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rules_core::{legal_moves, Engine, MoveRecord, Position, RulesResult, SearchResult};

pub use book::OpeningBook;
pub use config::SearchConfig;
pub use eval::{evaluate, piece_value, CHECKMATE_SCORE};
pub use ordering::order_moves;
pub use table::{Bound, ScoreEntry, TranspositionTable};

/// Move-selection engine: opening book first (with a configured chance to
/// deviate for variety), otherwise negamax with alpha-beta pruning.
///
/// The random source is injected at construction so callers and tests can
/// pin the book-bypass draw.
#[derive(Debug)]
pub struct AlphaBetaEngine {
    config: SearchConfig,
    book: OpeningBook,
    rng: StdRng,
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Builds the engine with an explicit random source for the
    /// opening-book bypass draw.
    pub fn with_rng(config: SearchConfig, rng: StdRng) -> Self {
        Self {
            config,
            book: OpeningBook::embedded(),
            rng,
            nodes: 0,
        }
    }

    /// Picks a move for the side to move at the configured search depth.
    ///
    /// `Ok(None)` means the position has no legal moves, a normal terminal
    /// condition. Errors indicate internal contract violations or corrupt
    /// book data and are never swallowed.
    pub fn choose_move(&mut self, pos: &Position) -> RulesResult<Option<MoveRecord>> {
        self.choose_move_at(pos, self.config.depth)
    }

    /// Picks a move searching `depth` plies, overriding the configured
    /// depth for this call.
    pub fn choose_move_at(&mut self, pos: &Position, depth: u8) -> RulesResult<Option<MoveRecord>> {
        Ok(self.decide(pos, depth)?.map(|(mv, _)| mv))
    }

    fn decide(&mut self, pos: &Position, depth: u8) -> RulesResult<Option<(MoveRecord, i32)>> {
        self.nodes = 0;

        if legal_moves(pos).is_empty() {
            return Ok(None);
        }

        if self.config.use_book {
            if let Some(mv) = self.book.recommended(pos)? {
                let p = self.config.book_follow_probability.clamp(0.0, 1.0);
                if self.rng.gen_bool(p) {
                    debug!("book move {} for {}", mv.notation, pos.key());
                    return Ok(Some((mv, 0)));
                }
                debug!("bypassing book in {}", pos.key());
            }
        }

        // The table lives exactly as long as this decision. Entries are
        // keyed by position only, so reuse across root positions could
        // leak scores from an unrelated game line.
        let mut table = TranspositionTable::new();
        let picked = search::pick_best_move(pos, depth, &self.book, &mut table, &mut self.nodes)?;

        if let Some((mv, score)) = &picked {
            debug!(
                "picked {} score {score} depth {depth} nodes {} table {}",
                mv.notation,
                self.nodes,
                table.len()
            );
        }
        Ok(picked)
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> RulesResult<SearchResult> {
        let picked = self.decide(pos, depth)?;
        Ok(SearchResult {
            best_move: picked.as_ref().map(|(mv, _)| mv.clone()),
            score: picked.map(|(_, score)| score).unwrap_or(0),
            depth,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
