use super::line::resolve_line;
use super::{Solution, SolveOptions, SolveStatus};
use crate::board::{CellState, Grid, Line};
use crate::helper::Unsolvable;
use log::{debug, info, trace};

// Sweeps rows, then columns, until a full sweep changes nothing.
//
// Rows are solved in place on the grid's storage. Columns are copied into
// `column`, solved there and written back only if something changed.
// Cells only ever go from unknown to known, so every sweep that doesn't end
// the loop resolves at least one cell and the loop runs at most rows * cols + 1 times.
pub(crate) struct Propagator<'a, R, C> {
    grid: Grid,
    row_clues: &'a [R],
    col_clues: &'a [C],
    column: Vec<CellState>,
    n_unknown: usize,
    // lines without any consistent arrangement in the current sweep
    unsatisfiable: Vec<Line>,
}

impl<'a, R, C> Propagator<'a, R, C>
where
    R: AsRef<[usize]>,
    C: AsRef<[usize]>,
{
    pub fn new(grid: Grid, row_clues: &'a [R], col_clues: &'a [C]) -> Self {
        debug_assert_eq!(grid.dimensions(), (row_clues.len(), col_clues.len()));
        Propagator {
            column: Vec::with_capacity(grid.rows()),
            n_unknown: grid.n_unknown(),
            grid,
            row_clues,
            col_clues,
            unsatisfiable: vec![],
        }
    }

    pub fn run(mut self, options: &SolveOptions) -> Solution {
        let mut sweeps = 0;
        let status = loop {
            if options.max_sweeps.map_or(false, |max| sweeps >= max) {
                break match self.n_unknown {
                    0 => SolveStatus::Solved,
                    _ => SolveStatus::SweepLimit,
                };
            }

            self.unsatisfiable.clear();
            sweeps += 1;

            let resolved = self.row_pass() + self.col_pass();
            self.n_unknown -= resolved;
            debug!("sweep {}: resolved {} cells, {} unknown", sweeps, resolved, self.n_unknown);

            if resolved == 0 {
                break match self.n_unknown {
                    0 => SolveStatus::Solved,
                    _ => SolveStatus::Stalled,
                };
            }
        };

        info!(
            "{}x{} grid: {:?} after {} sweeps",
            self.grid.rows(),
            self.grid.cols(),
            status,
            sweeps
        );
        Solution {
            grid: self.grid,
            sweeps,
            status,
            unsatisfiable: self.unsatisfiable,
        }
    }

    fn row_pass(&mut self) -> usize {
        let mut resolved = 0;
        for row in 0..self.grid.rows() {
            let clues = self.row_clues[row].as_ref();
            match resolve_line(self.grid.row_mut(row), clues) {
                Ok(0) => {}
                Ok(n) => {
                    trace!("row {} -> {}", row, Glyphs(self.grid.row(row)));
                    resolved += n;
                }
                Err(Unsolvable) => self.mark_unsatisfiable(Line::Row(row)),
            }
        }
        resolved
    }

    fn col_pass(&mut self) -> usize {
        let mut resolved = 0;
        for col in 0..self.grid.cols() {
            self.column.clear();
            self.column.extend(self.grid.col(col));

            match resolve_line(&mut self.column, self.col_clues[col].as_ref()) {
                Ok(0) => {}
                Ok(n) => {
                    trace!("column {} -> {}", col, Glyphs(&self.column));
                    self.grid.set_col(col, &self.column);
                    resolved += n;
                }
                Err(Unsolvable) => self.mark_unsatisfiable(Line::Col(col)),
            }
        }
        resolved
    }

    fn mark_unsatisfiable(&mut self, line: Line) {
        debug!("{} has no arrangement consistent with its clues", line);
        self.unsatisfiable.push(line);
    }
}

struct Glyphs<'a>(&'a [CellState]);

impl std::fmt::Display for Glyphs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|cell| write!(f, "{}", cell))
    }
}
