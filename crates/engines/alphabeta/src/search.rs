//! Negamax search with alpha-beta pruning

use rules_core::{legal_moves, Color, MoveRecord, Position, RulesResult};

use crate::book::OpeningBook;
use crate::eval::evaluate;
use crate::ordering::order_moves;
use crate::table::{Bound, TranspositionTable};

/// Window sentinel: safely above any evaluation magnitude (checkmate is
/// 100_000 plus positional terms) and negation-safe in `i32`.
pub(crate) const INFINITY: i32 = 1_000_000;

/// Bonus for a move matching the book recommendation at an interior node.
const BOOK_LINE_BONUS: i32 = 200;
/// Book bias only applies this early in the game.
const BOOK_LINE_PLY: u32 = 10;

/// Static evaluation from the side-to-move's perspective, as negamax
/// requires at the leaves.
fn leaf_score(pos: &Position, book: &OpeningBook) -> i32 {
    let white_score = evaluate(pos, book);
    match pos.turn() {
        Color::White => white_score,
        Color::Black => -white_score,
    }
}

/// Searches `pos` to `depth` plies and returns the best move with its
/// score, or `None` when there are no legal moves.
///
/// `depth == 0` still yields a move: the recursion bottoms out immediately
/// and the choice degrades to a one-ply static evaluation of every move.
pub(crate) fn pick_best_move(
    pos: &Position,
    depth: u8,
    book: &OpeningBook,
    table: &mut TranspositionTable,
    nodes: &mut u64,
) -> RulesResult<Option<(MoveRecord, i32)>> {
    let moves = legal_moves(pos);
    if moves.is_empty() {
        return Ok(None);
    }

    let mut best: Option<MoveRecord> = None;
    let mut best_score = -INFINITY;

    for mv in order_moves(moves, depth) {
        let child = pos.apply(&mv)?;
        *nodes += 1;

        // The window tightens as the running best improves; ties keep the
        // earlier move under the established ordering.
        let score = -negamax(
            &child,
            depth.saturating_sub(1),
            -INFINITY,
            -best_score,
            table,
            book,
            nodes,
        )?;

        if score > best_score || best.is_none() {
            best_score = score;
            best = Some(mv);
        }
    }

    Ok(best.map(|mv| (mv, best_score)))
}

fn negamax(
    pos: &Position,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    table: &mut TranspositionTable,
    book: &OpeningBook,
    nodes: &mut u64,
) -> RulesResult<i32> {
    let key = pos.key();
    if let Some(score) = table.lookup(&key, depth) {
        return Ok(score);
    }

    if depth == 0 || pos.is_game_over() {
        let score = leaf_score(pos, book);
        table.store(key, depth, score, Bound::Exact);
        return Ok(score);
    }

    let moves = legal_moves(pos);
    if moves.is_empty() {
        let score = leaf_score(pos, book);
        table.store(key, depth, score, Bound::Exact);
        return Ok(score);
    }

    // Book recommendation for this (pre-move) position; matching moves get
    // a flat bonus so the search leans toward known lines in the opening.
    let book_line = if depth > 1 && pos.ply() < BOOK_LINE_PLY {
        book.lookup(&key)
    } else {
        None
    };

    let mut max = -INFINITY;
    let mut bound = Bound::Upper;

    for mv in order_moves(moves, depth) {
        let child = pos.apply(&mv)?;
        *nodes += 1;

        let mut score = -negamax(&child, depth - 1, -beta, -alpha, table, book, nodes)?;
        if book_line == Some(mv.notation.as_str()) {
            score += BOOK_LINE_BONUS;
        }

        if score > max {
            max = score;
        }
        if max > alpha {
            alpha = max;
            bound = Bound::Exact;
        }
        if alpha >= beta {
            bound = Bound::Lower;
            break; // beta cutoff
        }
    }

    table.store(key, depth, max, bound);
    Ok(max)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
