//! A game engine and computer opponent for the board game 'Connect 4'
//!
//! The opponent uses a depth-limited minimax search with alpha-beta
//! pruning, scoring non-terminal positions with a static heuristic that
//! rewards central control and open alignments.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::{Board, Side}, search::choose_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::new();
//! let result = choose_move(&board, Side::Computer, 1);
//!
//! assert_eq!(result.column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod evaluation;

pub mod search;

pub mod greedy;

pub mod strategy;


/// The width of the game board in tiles (number of columns)
pub const WIDTH: usize = 7;

/// The height of the game board in tiles (number of rows)
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win, and the length of a scoring window
pub const WINDOW_LENGTH: usize = 4;

/// The index of the middle column
pub const CENTER_COLUMN: usize = WIDTH / 2;

/// The search depth used by the computer player unless configured otherwise
pub const DEFAULT_DEPTH: usize = 5;

// a winning line must fit on the board in every orientation
const_assert!(WINDOW_LENGTH <= WIDTH);
const_assert!(WINDOW_LENGTH <= HEIGHT);
