//! Search module for the checkers AI
//!
//! Contains:
//! - Plain minimax
//! - Minimax with alpha-beta pruning
//!
//! Both walk the same tree in the same move order and share one recursive
//! core; node and cutoff counters are threaded through a `SearchStats`
//! owned by the caller.

pub mod minimax;

pub use minimax::{
    minimax, minimax_alpha_beta, search_root, Bounds, SearchOutcome, SearchStats,
};
