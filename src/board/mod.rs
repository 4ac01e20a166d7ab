//! Types for cells, clues and the grid of a nonogram
mod cell_state;
mod clue;
mod grid;
mod line;

pub(crate) use self::clue::min_len;

#[rustfmt::skip]
pub use self::{
    cell_state::CellState,
    clue::Clue,
    grid::Grid,
    line::Line,
};
