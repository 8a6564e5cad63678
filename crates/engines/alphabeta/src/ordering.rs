//! Move ordering for alpha-beta pruning
//!
//! Trying captures first makes cutoffs come sooner. The sort is stable and
//! a total permutation of the input: nothing is dropped, ties keep their
//! generation order.

use rules_core::MoveRecord;

use crate::eval::piece_value;

/// Flat bonus applied while more than two plies remain. It lands on every
/// move equally, so it never changes the relative order on its own.
const SHALLOW_DEPTH_BONUS: i32 = 200;

fn priority(mv: &MoveRecord, depth: u8) -> i32 {
    let mut score = 0;
    if let Some(victim) = mv.captured {
        score += 10_000 + piece_value(victim);
    }
    if depth > 2 {
        score += SHALLOW_DEPTH_BONUS;
    }
    score
}

/// Stable-sorts `moves` so the likeliest cutoff candidates come first:
/// captures ahead of quiet moves, bigger victims ahead of smaller ones.
///
/// The position itself is not a parameter: everything the priority needs
/// (victim kind, capture flag) is already carried on each `MoveRecord`.
pub fn order_moves(mut moves: Vec<MoveRecord>, depth: u8) -> Vec<MoveRecord> {
    moves.sort_by(|a, b| priority(b, depth).cmp(&priority(a, depth)));
    moves
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
