use crate::board::{Clue, Grid, Line};
use crate::errors::ClueError;
use crate::generator::random_picture;
use crate::solver::{SolveOptions, Solution, Solver};
use std::fmt;

/// A validated puzzle: the clues of every row and every column
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nonogram {
    row_clues: Vec<Clue>,
    col_clues: Vec<Clue>,
}

impl Nonogram {
    /// Builds a puzzle from row clues (top to bottom) and column clues (left to right).
    ///
    /// Fails if the puzzle has no cells, a run is 0 long, a clue doesn't fit its line,
    /// or rows and columns disagree on the total number of filled cells.
    pub fn new(row_clues: Vec<Vec<usize>>, col_clues: Vec<Vec<usize>>) -> Result<Nonogram, ClueError> {
        if row_clues.is_empty() || col_clues.is_empty() {
            return Err(ClueError::EmptyPuzzle);
        }
        let (rows, cols) = (row_clues.len(), col_clues.len());
        let row_clues = Self::validate(row_clues, cols, Line::Row)?;
        let col_clues = Self::validate(col_clues, rows, Line::Col)?;

        let total = |clues: &[Clue]| {
            clues.iter().map(Clue::n_filled).fold(0, |total: usize, n| total.saturating_add(n))
        };
        let (row_total, col_total) = (total(&row_clues), total(&col_clues));
        if row_total != col_total {
            return Err(ClueError::TotalsDiffer {
                rows: row_total,
                cols: col_total,
            });
        }

        Ok(Nonogram { row_clues, col_clues })
    }

    fn validate(
        clues: Vec<Vec<usize>>,
        len: usize,
        line: impl Fn(usize) -> Line,
    ) -> Result<Vec<Clue>, ClueError> {
        clues
            .into_iter()
            .enumerate()
            .map(|(idx, runs)| {
                let clue = Clue::for_line(runs, Some(line(idx)))?;
                match clue.fits(len) {
                    true => Ok(clue),
                    false => Err(ClueError::DoesNotFit {
                        line: line(idx),
                        min_len: clue.min_len(),
                        len,
                    }),
                }
            })
            .collect()
    }

    /// Derives the clues of a picture. Unknown cells are treated as blank.
    pub fn from_solution(grid: &Grid) -> Nonogram {
        let row_clues = grid.iter_rows().map(Clue::of_line).collect();
        let col_clues = (0..grid.cols())
            .map(|col| Clue::of_line(&grid.col_to_vec(col)))
            .collect();
        Nonogram { row_clues, col_clues }
    }

    /// Generates the puzzle of a random picture. See [`random_picture`](crate::generator::random_picture).
    pub fn generate(rows: usize, cols: usize, density: f64) -> Nonogram {
        let picture = random_picture(rows, cols, density, &mut rand::thread_rng());
        Nonogram::from_solution(&picture)
    }

    #[allow(missing_docs)]
    pub fn row_clues(&self) -> &[Clue] {
        &self.row_clues
    }

    #[allow(missing_docs)]
    pub fn col_clues(&self) -> &[Clue] {
        &self.col_clues
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.row_clues.len()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.col_clues.len()
    }

    /// Solves the puzzle by line propagation
    pub fn solve(&self) -> Solution {
        self.solve_with(SolveOptions::default())
    }

    /// Solves the puzzle with the given options
    pub fn solve_with(&self, options: SolveOptions) -> Solution {
        Solver::new(options).solve(&self.row_clues, &self.col_clues)
    }

    /// Checks whether `grid` is a complete solution of this puzzle
    pub fn check(&self, grid: &Grid) -> bool {
        grid.dimensions() == (self.rows(), self.cols())
            && grid.is_solved()
            && grid
                .iter_rows()
                .zip(&self.row_clues)
                .all(|(row, clue)| Clue::of_line(row) == *clue)
            && self
                .col_clues
                .iter()
                .enumerate()
                .all(|(col, clue)| Clue::of_line(&grid.col_to_vec(col)) == *clue)
    }
}

/// Prints the row clues, a blank line, then the column clues, one clue per line.
impl fmt::Display for Nonogram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for clue in &self.row_clues {
            writeln!(f, "{}", clue)?;
        }
        writeln!(f)?;
        for (i, clue) in self.col_clues.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "{}", clue)?;
        }
        Ok(())
    }
}
