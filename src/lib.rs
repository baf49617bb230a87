//! Backtracking solver for edge-matching tile puzzles
//!
//! Tiles carry one symbol per edge. The solver assigns every tile to a grid
//! cell with a rotation so that all touching edges match, searching depth-first
//! with forward-checking against already placed neighbours. Square and
//! hexagonal grids of any size are supported.

#![forbid(unsafe_code)]

/// Search engine, cancellation controls and the puzzle front door
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid topologies, tiles, symbols and boards
pub mod spatial;

pub use algorithm::game::{Attempt, Game, Outcome};
pub use io::error::{PuzzleError, Result};
