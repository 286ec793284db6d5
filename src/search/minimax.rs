//! Depth-limited minimax, with or without alpha-beta pruning
//!
//! Both algorithms share one recursive core. Passing `None` for the bounds
//! gives plain minimax; passing `Some(Bounds)` enables cutoffs. The scores
//! are always identical, only the number of visited nodes changes.
//!
//! # Example
//!
//! ```
//! use checkers::board::{Board, Player};
//! use checkers::search::{minimax, minimax_alpha_beta, SearchStats};
//!
//! let board = Board::initial();
//!
//! let mut plain = SearchStats::default();
//! let (score, _) = minimax(&board, 3, true, Player::Red, &mut plain);
//!
//! let mut pruned = SearchStats::default();
//! let (ab_score, _) = minimax_alpha_beta(
//!     &board,
//!     3,
//!     f64::NEG_INFINITY,
//!     f64::INFINITY,
//!     true,
//!     Player::Red,
//!     &mut pruned,
//! );
//!
//! assert_eq!(score, ab_score);
//! assert!(pruned.nodes < plain.nodes);
//! ```

use crate::board::{Board, Player};
use crate::eval::evaluate;
use crate::rules::{all_moves, Successor};

/// Alpha-beta window passed down the recursion by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Best score the maximizer can already guarantee
    pub alpha: f64,
    /// Best score the minimizer can already guarantee
    pub beta: f64,
}

impl Bounds {
    #[inline]
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Root window (-inf, +inf)
    #[inline]
    pub fn full() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.beta <= self.alpha
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::full()
    }
}

/// Counters accumulated over one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every recursive invocation, terminal ones included
    pub nodes: u64,
    /// Sibling loops abandoned because the window closed
    pub cutoffs: u64,
}

/// Score of a node together with the move that achieves it.
///
/// `best` is `None` at terminal nodes (depth exhausted or no moves).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub score: f64,
    pub best: Option<Successor>,
}

impl SearchOutcome {
    #[inline]
    fn terminal(board: &Board, ai_player: Player) -> Self {
        Self {
            score: evaluate(board, ai_player),
            best: None,
        }
    }

    /// Board chosen by the search, or `fallback` at a terminal node
    #[inline]
    pub fn board_or(&self, fallback: &Board) -> Board {
        self.best.map_or(*fallback, |s| s.board)
    }
}

/// Search from the root, AI to move.
///
/// `bounds = None` runs plain minimax.
pub fn search_root(
    board: &Board,
    depth: u8,
    ai_player: Player,
    bounds: Option<Bounds>,
    stats: &mut SearchStats,
) -> SearchOutcome {
    search_node(board, depth, true, ai_player, bounds, stats)
}

/// Plain minimax. Returns the score and the best resulting board.
///
/// At a terminal node the input board itself is returned.
pub fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    ai_player: Player,
    stats: &mut SearchStats,
) -> (f64, Board) {
    let outcome = search_node(board, depth, maximizing, ai_player, None, stats);
    (outcome.score, outcome.board_or(board))
}

/// Minimax with alpha-beta pruning. Same contract as [`minimax`].
pub fn minimax_alpha_beta(
    board: &Board,
    depth: u8,
    alpha: f64,
    beta: f64,
    maximizing: bool,
    ai_player: Player,
    stats: &mut SearchStats,
) -> (f64, Board) {
    let bounds = Some(Bounds::new(alpha, beta));
    let outcome = search_node(board, depth, maximizing, ai_player, bounds, stats);
    (outcome.score, outcome.board_or(board))
}

fn search_node(
    board: &Board,
    depth: u8,
    maximizing: bool,
    ai_player: Player,
    mut bounds: Option<Bounds>,
    stats: &mut SearchStats,
) -> SearchOutcome {
    stats.nodes += 1;

    if depth == 0 {
        return SearchOutcome::terminal(board, ai_player);
    }

    let side = if maximizing {
        ai_player
    } else {
        ai_player.opponent()
    };
    let moves = all_moves(board, side);
    if moves.is_empty() {
        return SearchOutcome::terminal(board, ai_player);
    }

    let mut best_score = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best = None;

    for successor in moves {
        let child = search_node(
            &successor.board,
            depth - 1,
            !maximizing,
            ai_player,
            bounds,
            stats,
        );

        // Strict comparison: the first move reaching the best score is kept
        let improves = if maximizing {
            child.score > best_score
        } else {
            child.score < best_score
        };
        if improves {
            best_score = child.score;
            best = Some(successor);
        }

        if let Some(window) = bounds.as_mut() {
            if maximizing {
                window.alpha = window.alpha.max(child.score);
            } else {
                window.beta = window.beta.min(child.score);
            }
            if window.is_closed() {
                stats.cutoffs += 1;
                break;
            }
        }
    }

    SearchOutcome {
        score: best_score,
        best,
    }
}
