//! Checkers engine with a minimax AI
//!
//! A small checkers variant played on the dark squares of an 8x8 board:
//! - Men and kings both step or jump along all four diagonals
//! - Single jumps only, captures are never forced
//! - Men reaching the far row are crowned
//! - A side with no pieces (or no legal move on its turn) loses
//!
//! # Architecture
//!
//! - [`board`]: Board representation, pieces and promotion
//! - [`rules`]: Move generation, move simulation and win detection
//! - [`eval`]: Material evaluation
//! - [`search`]: Minimax with optional alpha-beta pruning
//! - [`engine`]: AI engine with timing and node-count diagnostics
//! - [`config`]: Command-line flags and startup prompts
//! - [`ui`]: egui front end and turn driver
//!
//! # Quick Start
//!
//! ```
//! use checkers::{create_initial_board, rules, search, Player, Pos};
//!
//! let board = create_initial_board();
//!
//! // Human plays Red
//! let outcome = rules::apply_move(&board, Pos::new(5, 2), Pos::new(4, 3)).unwrap();
//! assert!(outcome.winner.is_none());
//!
//! // AI answers as Blue
//! let reply = search(&outcome.board, true, 3, Player::Blue);
//! println!("AI plays {:?} ({} nodes)", reply.best_move, reply.nodes());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::{GameConfig, GameMode};
pub use engine::{search, AIEngine, MoveResult, SearchAlgorithm};
pub use error::{CheckersError, Result};
pub use rules::Move;

/// Starting position: Blue on rows 0-2, Red on rows 5-7
pub fn create_initial_board() -> Board {
    Board::initial()
}
