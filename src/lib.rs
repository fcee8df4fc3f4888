//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-limited minimax search with alpha-beta pruning,
//! centre-first move ordering and a memoised position cache to pick strong
//! moves quickly.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::board::{Board, Cell};
//! use connect4_engine::solver::Solver;
//!
//! let mut solver = Solver::new(Cell::PlayerOne);
//! let best_move = solver.choose_move(&Board::new());
//!
//! assert_eq!(best_move, Some(3));
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluation;

pub mod transposition_table;

pub mod solver;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// the centre bonus and move ordering rely on a unique middle column
const_assert!(WIDTH % 2 == 1);
// every row and column must be able to hold a window of 4
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
