//! Win detection and checked move application
//!
//! A side wins as soon as the opponent has no pieces left. Checked after
//! every applied move.

use crate::board::{Board, Player, Pos};
use crate::error::{CheckersError, Result};

use super::movegen::is_legal_move;
use super::simulate::{simulate_move, Move};

/// Winner of the position, if any.
///
/// Red wins when no blue piece remains, Blue wins when no red piece remains.
#[must_use]
pub fn check_winner(board: &Board) -> Option<Player> {
    if !board.has_pieces(Player::Blue) {
        Some(Player::Red)
    } else if !board.has_pieces(Player::Red) {
        Some(Player::Blue)
    } else {
        None
    }
}

/// Result of applying a move at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub mv: Move,
    /// Set when the move removed the opponent's last piece
    pub winner: Option<Player>,
}

/// Apply a caller-supplied move after validating it.
///
/// Rejects empty source cells and destinations the generator does not
/// produce. Turn order is the caller's concern.
pub fn apply_move(board: &Board, from: Pos, to: Pos) -> Result<MoveOutcome> {
    if board.is_empty(from) {
        return Err(CheckersError::EmptySquare { pos: from });
    }
    if !is_legal_move(board, from, to) {
        return Err(CheckersError::IllegalMove { from, to });
    }

    let mv = Move::new(from, to);
    let next = simulate_move(board, mv);
    Ok(MoveOutcome {
        board: next,
        mv,
        winner: check_winner(&next),
    })
}

/// Same as [`apply_move`] for raw coordinates, with bounds checks
pub fn apply_move_at(board: &Board, from: (i32, i32), to: (i32, i32)) -> Result<MoveOutcome> {
    let from = Pos::try_new(from.0, from.1)?;
    let to = Pos::try_new(to.0, to.1)?;
    apply_move(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_no_winner_initially() {
        assert_eq!(check_winner(&Board::initial()), None);
    }

    #[test]
    fn test_red_wins_without_blue() {
        let mut board = Board::new();
        board.set(Pos::new(3, 4), Cell::RedKing);
        assert_eq!(check_winner(&board), Some(Player::Red));
    }

    #[test]
    fn test_blue_wins_without_red() {
        let mut board = Board::new();
        board.set(Pos::new(3, 4), Cell::BlueMan);
        assert_eq!(check_winner(&board), Some(Player::Blue));
    }

    #[test]
    fn test_apply_move_capture_wins() {
        let mut board = Board::new();
        board.set(Pos::new(5, 4), Cell::RedMan);
        board.set(Pos::new(4, 3), Cell::BlueMan);

        let outcome = apply_move(&board, Pos::new(5, 4), Pos::new(3, 2)).unwrap();
        assert_eq!(outcome.winner, Some(Player::Red));
        assert!(outcome.mv.is_capture());
        assert_eq!(outcome.board.get(Pos::new(3, 2)), Cell::RedMan);
    }

    #[test]
    fn test_apply_move_simple() {
        let board = Board::initial();
        let outcome = apply_move(&board, Pos::new(2, 1), Pos::new(3, 2)).unwrap();
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.board.get(Pos::new(3, 2)), Cell::BlueMan);
    }

    #[test]
    fn test_apply_move_rejects_empty_source() {
        let board = Board::initial();
        let err = apply_move(&board, Pos::new(4, 1), Pos::new(3, 2)).unwrap_err();
        assert!(matches!(err, CheckersError::EmptySquare { .. }));
    }

    #[test]
    fn test_apply_move_rejects_illegal() {
        let board = Board::initial();
        let err = apply_move(&board, Pos::new(5, 0), Pos::new(3, 2)).unwrap_err();
        assert!(matches!(err, CheckersError::IllegalMove { .. }));
    }

    #[test]
    fn test_apply_move_at_bounds() {
        let board = Board::initial();
        let err = apply_move_at(&board, (5, 0), (4, -1)).unwrap_err();
        assert!(matches!(
            err,
            CheckersError::InvalidCoordinate { row: 4, col: -1 }
        ));
        assert!(apply_move_at(&board, (5, 0), (4, 1)).is_ok());
    }
}
