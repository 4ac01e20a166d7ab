use super::{CellState, Line};
use crate::errors::ClueError;
use std::fmt;

/// The run lengths of one row or column, in reading order
///
/// Every run is at least 1 long. An empty clue means the whole line is blank.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clue(Vec<usize>);

impl Clue {
    /// Constructs a new clue. Fails if any run has length 0.
    pub fn new(runs: Vec<usize>) -> Result<Clue, ClueError> {
        Self::for_line(runs, None)
    }

    pub(crate) fn for_line(runs: Vec<usize>, line: Option<Line>) -> Result<Clue, ClueError> {
        match runs.iter().position(|&run| run == 0) {
            Some(index) => Err(ClueError::ZeroRun { line, index }),
            None => Ok(Clue(runs)),
        }
    }

    /// Computes the clue of a line. Unknown cells count as blank.
    pub fn of_line(line: &[CellState]) -> Clue {
        let mut runs = vec![];
        let mut current = 0;
        for &cell in line {
            if cell.is_filled() {
                current += 1;
            } else if current != 0 {
                runs.push(current);
                current = 0;
            }
        }
        if current != 0 {
            runs.push(current);
        }
        Clue(runs)
    }

    /// The run lengths
    #[inline]
    pub fn runs(&self) -> &[usize] {
        &self.0
    }

    /// Total number of filled cells, saturating at `usize::MAX`
    pub fn n_filled(&self) -> usize {
        self.0.iter().fold(0, |total: usize, &run| total.saturating_add(run))
    }

    /// Shortest line that can hold all runs: their lengths plus one blank between each pair.
    /// Saturates at `usize::MAX`.
    pub fn min_len(&self) -> usize {
        min_len(&self.0).unwrap_or(usize::MAX)
    }

    /// Returns `true` if the runs can be packed into a line of length `len`
    pub fn fits(&self, len: usize) -> bool {
        min_len(&self.0).map_or(false, |min_len| min_len <= len)
    }
}

/// `None` if the length doesn't fit in a `usize`, no line is that long.
pub(crate) fn min_len(runs: &[usize]) -> Option<usize> {
    let separators = runs.len().saturating_sub(1);
    runs.iter().try_fold(separators, |total, &run| total.checked_add(run))
}

impl AsRef<[usize]> for Clue {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "0");
        }
        for (i, run) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", run)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::*;

    #[test]
    fn min_len_counts_separators() {
        assert_eq!(Clue::new(vec![]).unwrap().min_len(), 0);
        assert_eq!(Clue::new(vec![5]).unwrap().min_len(), 5);
        assert_eq!(Clue::new(vec![1, 1, 1]).unwrap().min_len(), 5);
        assert!(Clue::new(vec![2, 3]).unwrap().fits(6));
        assert!(!Clue::new(vec![2, 3]).unwrap().fits(5));
    }

    #[test]
    fn zero_run_rejected() {
        assert_eq!(
            Clue::new(vec![1, 0, 2]),
            Err(ClueError::ZeroRun { line: None, index: 1 })
        );
        assert_eq!(
            Clue::new(vec![1, 0]).unwrap_err().to_string(),
            "clue has a run of length 0 at position 1"
        );
    }

    #[test]
    fn oversized_runs_do_not_fit() {
        let clue = Clue::new(vec![usize::MAX, 1]).unwrap();
        assert_eq!(clue.min_len(), usize::MAX);
        assert_eq!(clue.n_filled(), usize::MAX);
        assert!(!clue.fits(3));
        assert!(!clue.fits(usize::MAX));
        assert!(Clue::new(vec![usize::MAX]).unwrap().fits(usize::MAX));
    }

    #[test]
    fn clue_of_line() {
        let line = [Filled, Filled, Blank, Unknown, Filled, Blank, Filled];
        assert_eq!(Clue::of_line(&line).runs(), &[2, 1, 1]);
        assert_eq!(Clue::of_line(&[Blank, Unknown]).runs(), &[] as &[usize]);
    }

    #[test]
    fn display() {
        assert_eq!(Clue::new(vec![4, 1, 2]).unwrap().to_string(), "4 1 2");
        assert_eq!(Clue::default().to_string(), "0");
    }
}
