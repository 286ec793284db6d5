//! Legal move generation
//!
//! Men and kings move the same way: one diagonal step in any of the four
//! directions, or a single jump over an adjacent opposing piece onto the
//! empty cell behind it. Captures are not forced and jumps do not chain.

use crate::board::{Board, Pos};

/// Direction vectors, in generation order
pub const DIRECTIONS: [(i8, i8); 4] = [
    (-1, -1), // Up-left
    (-1, 1),  // Up-right
    (1, -1),  // Down-left
    (1, 1),   // Down-right
];

/// Destinations reachable by the piece at `from`.
///
/// Returns an empty list for an empty cell. Destinations come out in
/// [`DIRECTIONS`] order, which the search relies on for tie-breaking.
#[must_use]
pub fn legal_moves(board: &Board, from: Pos) -> Vec<Pos> {
    let Some(owner) = board.get(from).owner() else {
        return Vec::new();
    };

    let mut moves = Vec::with_capacity(DIRECTIONS.len());
    for (dr, dc) in DIRECTIONS {
        let Some(step) = from.offset(dr, dc, 1) else {
            continue;
        };

        match board.get(step).owner() {
            None => moves.push(step),
            Some(other) if other != owner => {
                if let Some(landing) = from.offset(dr, dc, 2) {
                    if board.is_empty(landing) {
                        moves.push(landing);
                    }
                }
            }
            Some(_) => {}
        }
    }
    moves
}

/// Check if `from -> to` is one of the generated moves
#[inline]
pub fn is_legal_move(board: &Board, from: Pos, to: Pos) -> bool {
    legal_moves(board, from).contains(&to)
}
