//! The line solver and the grid propagator built on it.
//!
//! Every row and column is treated as an independent one-dimensional problem:
//! all placements of its runs that agree with the already known cells are
//! enumerated, and cells on which all placements agree are fixed. Rows and
//! columns are swept alternately until nothing changes anymore.
//!
//! No guessing is performed. Puzzles that can't be solved by per-line reasoning
//! are returned with unknown cells left in them, as are contradictory puzzles.

mod arrangements;
mod line;
mod propagator;

pub use self::arrangements::{arrangements, for_each_arrangement};
pub use self::line::solve_line;

use self::propagator::Propagator;
use crate::board::{Grid, Line};
use crate::errors::DimensionMismatch;

/// Solves a nonogram by line propagation and returns the resulting grid.
///
/// `row_clues[r]` holds the run lengths of row `r`, left to right,
/// `col_clues[c]` those of column `c`, top to bottom.
/// The clues are not validated: lines whose clues can't be satisfied are simply never
/// resolved. Use [`Nonogram::new`](crate::Nonogram::new) for validation.
///
/// ```
/// let grid = nonogram::solve(&[vec![1], vec![1]], &[vec![2]]);
/// assert_eq!(grid.to_string(), "█\n█");
/// ```
pub fn solve<R, C>(row_clues: &[R], col_clues: &[C]) -> Grid
where
    R: AsRef<[usize]>,
    C: AsRef<[usize]>,
{
    Solver::default().solve(row_clues, col_clues).grid
}

/// Options for the [`Solver`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SolveOptions {
    /// Stop after this many row + column sweeps, even if the last sweep made progress.
    /// `None` runs until no sweep changes anything.
    pub max_sweeps: Option<usize>,
}

impl SolveOptions {
    /// Options with a cap on the number of sweeps
    pub fn with_max_sweeps(max_sweeps: usize) -> Self {
        SolveOptions {
            max_sweeps: Some(max_sweeps),
        }
    }
}

/// How a solve ended
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// Every cell is known
    Solved,
    /// A full sweep made no progress and unknown cells remain.
    /// The puzzle needs guessing, has several solutions, or is contradictory.
    Stalled,
    /// The sweep limit of [`SolveOptions`] was reached before the grid settled
    SweepLimit,
}

/// The result of a solve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Final state of the grid
    pub grid: Grid,
    /// Number of row + column sweeps performed, including the last one that found nothing new
    pub sweeps: usize,
    #[allow(missing_docs)]
    pub status: SolveStatus,
    /// Lines that had no arrangement consistent with their clues in the last sweep.
    /// Non-empty only for contradictory puzzles.
    pub unsatisfiable: Vec<Line>,
}

impl Solution {
    /// Returns `true` if every cell was deduced
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }
}

/// Grid propagator with configurable limits
#[derive(Copy, Clone, Debug, Default)]
pub struct Solver {
    options: SolveOptions,
}

impl Solver {
    /// Constructs a solver with the given options
    pub fn new(options: SolveOptions) -> Solver {
        Solver { options }
    }

    /// The options this solver was built with
    pub fn options(&self) -> SolveOptions {
        self.options
    }

    /// Solves a nonogram starting from an empty grid. See [`solve`].
    pub fn solve<R, C>(&self, row_clues: &[R], col_clues: &[C]) -> Solution
    where
        R: AsRef<[usize]>,
        C: AsRef<[usize]>,
    {
        let grid = Grid::new(row_clues.len(), col_clues.len());
        Propagator::new(grid, row_clues, col_clues).run(&self.options)
    }

    /// Continues solving from a partially known grid.
    ///
    /// Known cells of `grid` are taken as given and never changed.
    /// Fails if the grid dimensions don't match the number of row and column clues.
    pub fn solve_from<R, C>(
        &self,
        grid: Grid,
        row_clues: &[R],
        col_clues: &[C],
    ) -> Result<Solution, DimensionMismatch>
    where
        R: AsRef<[usize]>,
        C: AsRef<[usize]>,
    {
        let expected = (row_clues.len(), col_clues.len());
        if grid.dimensions() != expected {
            return Err(DimensionMismatch {
                expected,
                found: grid.dimensions(),
            });
        }
        Ok(Propagator::new(grid, row_clues, col_clues).run(&self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellState::*;

    const NO_CLUES: &[[usize; 0]] = &[];

    #[test]
    fn single_cell() {
        let solution = Solver::default().solve(&[[1]], &[[1]]);
        assert_eq!(solution.grid.cells(), &[Filled]);
        assert_eq!(solution.status, SolveStatus::Solved);
        assert_eq!(solution.sweeps, 2);
    }

    #[test]
    fn empty_puzzle() {
        let solution = Solver::default().solve(NO_CLUES, NO_CLUES);
        assert_eq!(solution.grid.dimensions(), (0, 0));
        assert!(solution.is_solved());
        assert_eq!(solution.sweeps, 1);
    }

    #[test]
    fn sweep_limit() {
        let rows = [vec![1, 1], vec![5], vec![1, 1]];
        let cols = [vec![3], vec![1], vec![1], vec![1], vec![3]];
        let solution = Solver::new(SolveOptions::with_max_sweeps(0)).solve(&rows, &cols);
        assert_eq!(solution.status, SolveStatus::SweepLimit);
        assert_eq!(solution.sweeps, 0);
        assert_eq!(solution.grid.n_unknown(), 15);

        let solution = Solver::new(SolveOptions::with_max_sweeps(1)).solve(&rows, &cols);
        assert_eq!(solution.sweeps, 1);
        assert!(solution.is_solved());
    }

    #[test]
    fn dimension_mismatch() {
        let err = Solver::default()
            .solve_from(Grid::new(2, 2), &[[1]], &[[1]])
            .unwrap_err();
        assert_eq!(err.expected, (1, 1));
        assert_eq!(err.found, (2, 2));
    }
}
