//! Errors that may be encountered when building puzzles and grids
use crate::board::Line;

#[cfg(doc)]
use crate::{Grid, Nonogram, Solver};

/// Error for invalid clues, returned by [`Nonogram::new`] and [`Clue::new`](crate::Clue::new)
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ClueError {
    /// Run lengths must be positive
    #[error("{} has a run of length 0 at position {index}", describe(.line))]
    ZeroRun {
        /// Offending line, `None` for clues built outside a puzzle
        line: Option<Line>,
        /// Index of the run inside the clue
        index: usize,
    },
    /// The runs plus their mandatory separators are longer than the line
    #[error("{line} needs at least {min_len} cells but is only {len} long")]
    DoesNotFit {
        #[allow(missing_docs)]
        line: Line,
        /// `sum(runs) + runs - 1`
        min_len: usize,
        #[allow(missing_docs)]
        len: usize,
    },
    /// Puzzles need at least one row and one column
    #[error("puzzle has no rows or no columns")]
    EmptyPuzzle,
    /// Row clues and column clues describe a different number of filled cells
    #[error("row clues fill {rows} cells, column clues fill {cols}")]
    TotalsDiffer {
        #[allow(missing_docs)]
        rows: usize,
        #[allow(missing_docs)]
        cols: usize,
    },
}

fn describe(line: &Option<Line>) -> String {
    match line {
        Some(line) => line.to_string(),
        None => "clue".to_string(),
    }
}

/// Error for [`Solver::solve_from`] when the grid doesn't match the clues
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("grid should be {}x{}, found {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
pub struct DimensionMismatch {
    /// `(rows, cols)` implied by the clues
    pub expected: (usize, usize),
    /// `(rows, cols)` of the grid
    pub found: (usize, usize),
}

/// Error for parsing a [`Grid`] from its display format
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum GridParseError {
    /// Character is not a known cell glyph
    #[error("row {row}, column {col} contains invalid character '{ch}'")]
    InvalidGlyph {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        col: usize,
        #[allow(missing_docs)]
        ch: char,
    },
    /// Row has a different width than the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// Input contains no rows
    #[error("grid is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = ClueError::DoesNotFit { line: Line::Col(3), min_len: 7, len: 5 };
        assert_eq!(err.to_string(), "column 3 needs at least 7 cells but is only 5 long");
        let err = ClueError::ZeroRun { line: Some(Line::Row(2)), index: 0 };
        assert_eq!(err.to_string(), "row 2 has a run of length 0 at position 0");
        let err = DimensionMismatch { expected: (2, 3), found: (3, 2) };
        assert_eq!(err.to_string(), "grid should be 2x3, found 3x2");
    }
}
