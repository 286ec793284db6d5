//! Board structure as a plain 8x8 value

use super::{Cell, Player, Pos, BOARD_SIZE};
use crate::error::Result;

/// Game board.
///
/// Row 0 is Blue's back rank, row 7 is Red's. The board is `Copy`: every
/// simulated move works on its own value, so a parent position is never
/// touched by its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Starting position: Blue men on rows 0-2, Red men on rows 5-7,
    /// dark squares only.
    pub fn initial() -> Self {
        let mut board = Self::new();
        for row in 0..BOARD_SIZE {
            let player = match row {
                0..=2 => Player::Blue,
                5..=7 => Player::Red,
                _ => continue,
            };
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                if pos.is_playable() {
                    board.set(pos, player.man());
                }
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Get cell by raw coordinates. Callers bounds-check first.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        self.cells[row][col]
    }

    /// Checked lookup for coordinates coming from outside the engine
    pub fn try_at(&self, row: i32, col: i32) -> Result<Cell> {
        Pos::try_new(row, col).map(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.set(pos, Cell::Empty);
    }

    /// All pieces of `player` in row-major order
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE)
            .map(Pos::from_index)
            .map(move |pos| (pos, self.get(pos)))
            .filter(move |(_, cell)| cell.is_owned_by(player))
    }

    /// Number of pieces (men and kings) owned by `player`
    pub fn count(&self, player: Player) -> usize {
        self.pieces(player).count()
    }

    /// Total pieces on board
    pub fn piece_count(&self) -> usize {
        self.count(Player::Red) + self.count(Player::Blue)
    }

    #[inline]
    pub fn has_pieces(&self, player: Player) -> bool {
        self.pieces(player).next().is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
