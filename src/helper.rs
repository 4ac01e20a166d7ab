// Internal helper types shared by the line solver

use crate::board::CellState;

/// No arrangement of the clues fits the line as currently known
#[derive(Debug)]
pub(crate) struct Unsolvable;

/// Records, for every position of a line, which values have been seen across arrangements.
#[derive(Clone, Debug)]
pub(crate) struct Agreement {
    seen_filled: Vec<bool>,
    seen_blank: Vec<bool>,
    n_arrangements: usize,
}

impl Agreement {
    pub fn new(len: usize) -> Agreement {
        Agreement {
            seen_filled: vec![false; len],
            seen_blank: vec![false; len],
            n_arrangements: 0,
        }
    }

    pub fn record(&mut self, arrangement: &[CellState]) {
        debug_assert_eq!(arrangement.len(), self.seen_filled.len());
        self.n_arrangements += 1;
        for (pos, &cell) in arrangement.iter().enumerate() {
            match cell {
                CellState::Filled => self.seen_filled[pos] = true,
                _ => self.seen_blank[pos] = true,
            }
        }
    }

    pub fn n_arrangements(&self) -> usize {
        self.n_arrangements
    }

    /// The value every recorded arrangement has at `pos`, if they agree.
    pub fn unanimous(&self, pos: usize) -> Option<CellState> {
        match (self.seen_filled[pos], self.seen_blank[pos]) {
            (true, false) => Some(CellState::Filled),
            (false, true) => Some(CellState::Blank),
            _ => None,
        }
    }
}
