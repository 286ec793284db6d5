//! Main AI engine driving the search
//!
//! This module wraps the search algorithms with configuration, timing and
//! diagnostics. One call searches the current position to a fixed depth and
//! reports the chosen board together with the score, node count and wall
//! clock time, the same figures that are logged after every AI move.
//!
//! # Example
//!
//! ```
//! use checkers::{AIEngine, Board, Player, SearchAlgorithm};
//!
//! let engine = AIEngine::with_config(SearchAlgorithm::AlphaBeta, 3);
//! let board = Board::initial();
//!
//! let result = engine.get_move_with_stats(&board, Player::Red);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Nodes: {}, time: {}ms", result.stats.nodes, result.time_ms());
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;

use crate::board::{Board, Player};
use crate::rules::Move;
use crate::search::{search_root, Bounds, SearchStats};

/// Default search depth, in plies
pub const DEFAULT_DEPTH: u8 = 3;

/// Search algorithm used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum SearchAlgorithm {
    /// Full-width minimax, no pruning
    Minimax,
    /// Minimax with alpha-beta cutoffs
    #[default]
    AlphaBeta,
}

impl SearchAlgorithm {
    #[inline]
    pub fn from_flag(use_alpha_beta: bool) -> Self {
        if use_alpha_beta {
            SearchAlgorithm::AlphaBeta
        } else {
            SearchAlgorithm::Minimax
        }
    }

    #[inline]
    fn root_bounds(self) -> Option<Bounds> {
        match self {
            SearchAlgorithm::Minimax => None,
            SearchAlgorithm::AlphaBeta => Some(Bounds::full()),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAlgorithm::Minimax => f.write_str("Minimax"),
            SearchAlgorithm::AlphaBeta => f.write_str("Alpha-Beta"),
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Board after the chosen move; the input board when no move exists
    pub board: Board,
    /// Move that produced `board`, `None` at a terminal root
    pub best_move: Option<Move>,
    /// Evaluation from the searching player's point of view
    pub score: f64,
    pub algorithm: SearchAlgorithm,
    pub depth: u8,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl MoveResult {
    /// Time taken in milliseconds
    #[inline]
    pub fn time_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.stats.nodes
    }
}

/// Fixed-depth AI engine.
///
/// # Example
///
/// ```
/// use checkers::{AIEngine, Board, Player};
///
/// let engine = AIEngine::new();
/// let board = Board::initial();
/// if let Some(mv) = engine.get_move(&board, Player::Blue) {
///     println!("Play {}", mv);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    algorithm: SearchAlgorithm,
    depth: u8,
}

impl AIEngine {
    /// Create an engine with default settings (alpha-beta, depth 3).
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: SearchAlgorithm::AlphaBeta,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Create an engine with custom configuration.
    ///
    /// `depth` is trusted here; configuration rejects zero before an engine
    /// is built, and a depth-0 search simply returns the static evaluation.
    #[must_use]
    pub fn with_config(algorithm: SearchAlgorithm, depth: u8) -> Self {
        Self { algorithm, depth }
    }

    /// Best move for `player`, or `None` if it has no legal move.
    #[must_use]
    pub fn get_move(&self, board: &Board, player: Player) -> Option<Move> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Search `board` for `player` and report the result with diagnostics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();
        let mut stats = SearchStats::default();

        let outcome = search_root(
            board,
            self.depth,
            player,
            self.algorithm.root_bounds(),
            &mut stats,
        );
        let elapsed = start.elapsed();

        let result = MoveResult {
            board: outcome.board_or(board),
            best_move: outcome.best.map(|s| s.mv),
            score: outcome.score,
            algorithm: self.algorithm,
            depth: self.depth,
            stats,
            elapsed,
        };

        info!(
            player = %player,
            algorithm = %result.algorithm,
            depth = result.depth,
            score = result.score,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms = elapsed.as_secs_f64() * 1000.0,
            "AI move"
        );

        result
    }

    #[inline]
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    #[inline]
    pub fn set_algorithm(&mut self, algorithm: SearchAlgorithm) {
        self.algorithm = algorithm;
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Search `board` for `ai_player` and return the chosen board with
/// diagnostics.
pub fn search(board: &Board, use_alpha_beta: bool, depth: u8, ai_player: Player) -> MoveResult {
    AIEngine::with_config(SearchAlgorithm::from_flag(use_alpha_beta), depth)
        .get_move_with_stats(board, ai_player)
}
