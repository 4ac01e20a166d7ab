#![warn(missing_docs)]
//! The Nonogram library
//!
//! ## Overview
//!
//! Nonogram is a library that solves nonogram (picross, griddler) puzzles by
//! line propagation. Each row and column is solved on its own by enumerating every
//! placement of its runs that agrees with the cells known so far. Cells on which
//! all placements agree are fixed, and rows and columns are swept alternately
//! until a full sweep makes no progress.
//!
//! The solver never guesses. Puzzles that need trial and error, or that have several
//! solutions, come back with unknown cells.
//!
//! ## Example
//!
//! ```
//! use nonogram::{Nonogram, SolveStatus};
//!
//! // A letter H
//! let puzzle = Nonogram::new(
//!     vec![vec![1, 1], vec![5], vec![1, 1]],
//!     vec![vec![3], vec![1], vec![1], vec![1], vec![3]],
//! ).unwrap();
//!
//! let solution = puzzle.solve();
//! assert_eq!(solution.status, SolveStatus::Solved);
//! assert!(puzzle.check(&solution.grid));
//! println!("{}", solution.grid);
//!
//! // Without validation, straight from clue lists
//! let grid = nonogram::solve(&[[1, 1], [1, 1]], &[vec![2], vec![], vec![2]]);
//! assert_eq!(grid.to_string(), "█·█\n█·█");
//! ```
pub mod board;
pub mod errors;
pub mod generator;
mod helper;
mod nonogram;
pub mod solver;

#[rustfmt::skip]
pub use crate::{
    board::{CellState, Clue, Grid, Line},
    nonogram::Nonogram,
    solver::{solve, solve_line, Solution, SolveOptions, SolveStatus, Solver},
};
