//! GUI module for the checkers game
//!
//! Native GUI built on egui/eframe. The board view turns clicks into cells,
//! the game state drives turns and the AI worker thread.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::CheckersApp;
pub use game_state::{AiState, GameResult, GameState, MoveTimer, WinReason};
