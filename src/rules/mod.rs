//! Game rules for the simplified checkers variant
//!
//! This module implements the rule set used by the engine:
//! - Move generation (single steps and single jumps, all four diagonals)
//! - Move simulation (capture removal, promotion)
//! - Win conditions (opponent has no pieces left)

pub mod movegen;
pub mod simulate;
pub mod win;

// Re-exports for convenient access
pub use movegen::{is_legal_move, legal_moves, DIRECTIONS};
pub use simulate::{all_moves, count_moves, has_any_move, simulate_move, Move, Successor};
pub use win::{apply_move, apply_move_at, check_winner, MoveOutcome};
