//! Move simulation and full move enumeration

use std::fmt;

use crate::board::{Board, Player, Pos};

use super::movegen::legal_moves;

/// A single step or jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    #[inline]
    pub fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }

    /// Jumps travel two rows, simple steps one
    #[inline]
    pub fn is_capture(self) -> bool {
        self.from.row.abs_diff(self.to.row) == 2
    }

    /// Cell of the piece removed by a jump
    #[inline]
    pub fn captured(self) -> Option<Pos> {
        self.is_capture().then(|| {
            Pos::new(
                (self.from.row + self.to.row) / 2,
                (self.from.col + self.to.col) / 2,
            )
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A generated move together with the board it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    pub mv: Move,
    pub board: Board,
}

/// Board after playing `mv` on `board`.
///
/// The input is left untouched. A jump clears the midpoint regardless of
/// what stands there; legality is the generator's job.
#[must_use]
pub fn simulate_move(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    let piece = next.get(mv.from);

    next.clear(mv.from);
    if let Some(captured) = mv.captured() {
        next.clear(captured);
    }
    next.set(mv.to, piece.promoted(mv.to.row as usize));

    next
}

/// Every move available to `player`, with resulting boards.
///
/// Pieces are visited in row-major order and each piece's destinations in
/// direction order. Both search algorithms walk moves in exactly this order.
#[must_use]
pub fn all_moves(board: &Board, player: Player) -> Vec<Successor> {
    let mut moves = Vec::new();
    for (from, _) in board.pieces(player) {
        for to in legal_moves(board, from) {
            let mv = Move::new(from, to);
            moves.push(Successor {
                mv,
                board: simulate_move(board, mv),
            });
        }
    }
    moves
}

/// True if `player` has at least one move
pub fn has_any_move(board: &Board, player: Player) -> bool {
    board
        .pieces(player)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}

/// Number of moves available to `player` (branching factor)
pub fn count_moves(board: &Board, player: Player) -> usize {
    board
        .pieces(player)
        .map(|(from, _)| legal_moves(board, from).len())
        .sum()
}
