use std::fmt;

/// A row or column of the grid, identified by its index
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Line {
    Row(usize),
    Col(usize),
}

impl Line {
    /// Index of the row or column
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Line::Row(idx) | Line::Col(idx) => idx,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Col(col) => write!(f, "column {}", col),
        }
    }
}
