use super::CellState;
use crate::errors::GridParseError;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// A rectangular board of cell states, stored row by row
///
/// Rows are contiguous slices. Columns are accessed with a stride of `cols`.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a `rows` × `cols` grid with every cell unknown.
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            cells: vec![CellState::Unknown; rows * cols],
        }
    }

    /// Builds a grid from a list of rows.
    ///
    /// Fails with [`GridParseError::RaggedRow`] if the rows don't all have the same length.
    pub fn from_rows<R: AsRef<[CellState]>>(rows: &[R]) -> Result<Grid, GridParseError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, cells_of_row) in rows.iter().enumerate() {
            let found = cells_of_row.as_ref().len();
            if found != cols {
                return Err(GridParseError::RaggedRow { row, expected: cols, found });
            }
            cells.extend_from_slice(cells_of_row.as_ref());
        }
        Ok(Grid { rows: rows.len(), cols, cells })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All cells, row by row
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// The cells of row `row`, left to right
    #[inline]
    pub fn row(&self, row: usize) -> &[CellState] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Mutable access to row `row`
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [CellState] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns an iterator over all rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        // chunks(0) panics
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// The cells of column `col`, top to bottom
    pub fn col(&self, col: usize) -> impl Iterator<Item = CellState> + '_ {
        assert!(col < self.cols, "column {} out of range for width {}", col, self.cols);
        self.cells.iter().skip(col).step_by(self.cols).copied()
    }

    /// Copies column `col` into a new vector
    pub fn col_to_vec(&self, col: usize) -> Vec<CellState> {
        self.col(col).collect()
    }

    /// Writes `values` into column `col`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` differs from the number of rows.
    pub fn set_col(&mut self, col: usize, values: &[CellState]) {
        assert_eq!(values.len(), self.rows);
        for (row, &value) in values.iter().enumerate() {
            self[(row, col)] = value;
        }
    }

    /// Number of cells not yet deduced
    pub fn n_unknown(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_known()).count()
    }

    /// Returns `true` if every cell is either filled or blank
    pub fn is_solved(&self) -> bool {
        self.n_unknown() == 0
    }

    /// Swaps rows and columns
    pub fn transpose(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.cols {
            cells.extend(self.col(col));
        }
        Grid {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    #[inline]
    fn index_of(&self, (row, col): (usize, usize)) -> usize {
        assert!(row < self.rows && col < self.cols, "cell ({}, {}) out of range", row, col);
        row * self.cols + col
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = CellState;

    #[inline]
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.cells[self.index_of(idx)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    #[inline]
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let idx = self.index_of(idx);
        &mut self.cells[idx]
    }
}

/* Example output of a solved 5x5 grid
·███·
█···█
█████
█···█
█···█
*/
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses the output of `Display`, one row per line.
    /// Leading and trailing empty lines are ignored, spaces inside a row mean unknown.
    fn from_str(s: &str) -> Result<Grid, GridParseError> {
        let lines: Vec<&str> = s
            .trim_matches(|ch: char| ch == '\n' || ch == '\r')
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        if lines.is_empty() || lines.iter().all(|line| line.is_empty()) {
            return Err(GridParseError::Empty);
        }

        let cols = lines[0].chars().count();
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridParseError::RaggedRow { row, expected: cols, found });
            }
            for (col, ch) in line.chars().enumerate() {
                match CellState::from_glyph(ch) {
                    Some(cell) => cells.push(cell),
                    None => return Err(GridParseError::InvalidGlyph { row, col, ch }),
                }
            }
        }

        Ok(Grid {
            rows: lines.len(),
            cols,
            cells,
        })
    }
}
