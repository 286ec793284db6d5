//! Board representation for checkers

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

use std::fmt;

use crate::error::{CheckersError, Result};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Player colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Row on which this player's men are crowned
    #[inline]
    pub fn crowning_row(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => BOARD_SIZE - 1,
        }
    }

    #[inline]
    pub fn man(self) -> Cell {
        match self {
            Player::Red => Cell::RedMan,
            Player::Blue => Cell::BlueMan,
        }
    }

    #[inline]
    pub fn king(self) -> Cell {
        match self {
            Player::Red => Cell::RedKing,
            Player::Blue => Cell::BlueKing,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => f.write_str("Red"),
            Player::Blue => f.write_str("Blue"),
        }
    }
}

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    RedMan,
    RedKing,
    BlueMan,
    BlueKing,
}

impl Cell {
    /// Owner of the piece on this cell, `None` when empty
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::RedMan | Cell::RedKing => Some(Player::Red),
            Cell::BlueMan | Cell::BlueKing => Some(Player::Blue),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Cell::RedKing | Cell::BlueKing)
    }

    /// True if this cell holds a piece of `player`
    #[inline]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    /// Apply the promotion rule for a piece landing on `row`.
    ///
    /// A red man reaching row 0 or a blue man reaching row 7 is crowned.
    /// Kings and empty cells are returned unchanged.
    #[inline]
    pub fn promoted(self, row: usize) -> Cell {
        match self {
            Cell::RedMan if row == Player::Red.crowning_row() => Cell::RedKing,
            Cell::BlueMan if row == Player::Blue.crowning_row() => Cell::BlueKing,
            other => other,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the engine
    pub fn try_new(row: i32, col: i32) -> Result<Self> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(CheckersError::InvalidCoordinate { row, col })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Dark squares, the only ones pieces ever stand on
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Step `times` cells along `(dr, dc)`, `None` if that leaves the board
    #[inline]
    pub fn offset(self, dr: i8, dc: i8, times: i8) -> Option<Pos> {
        let row = self.row as i32 + (dr * times) as i32;
        let col = self.col as i32 + (dc * times) as i32;
        if Self::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
