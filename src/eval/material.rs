//! Material evaluation

use crate::board::{Board, Cell, Player};

/// Value of an uncrowned piece
pub const MAN_VALUE: f64 = 1.0;
/// Value of a king
pub const KING_VALUE: f64 = 1.5;

#[inline]
fn piece_value(cell: Cell) -> f64 {
    if cell.is_king() {
        KING_VALUE
    } else {
        MAN_VALUE
    }
}

/// Total material owned by `player`
#[must_use]
pub fn material(board: &Board, player: Player) -> f64 {
    board.pieces(player).map(|(_, cell)| piece_value(cell)).sum()
}

/// Evaluate the board from the perspective of the given player.
///
/// Returns `material(player) - material(opponent)`; positive values favour
/// `player`. The score is zero-sum: swapping the perspective negates it.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> f64 {
    material(board, player) - material(board, player.opponent())
}
