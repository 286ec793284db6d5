//! Position evaluation for the checkers AI
//!
//! Material only: no positional, mobility or tempo terms.

pub mod material;

pub use material::{evaluate, material, KING_VALUE, MAN_VALUE};
