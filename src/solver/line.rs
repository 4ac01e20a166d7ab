use super::arrangements::for_each_arrangement;
use crate::board::CellState;
use crate::helper::{Agreement, Unsolvable};

/// Deduces every cell of `line` on which all arrangements of `clues` agree.
///
/// Only unknown cells are written. Returns `true` if at least one cell changed.
/// A line that admits no arrangement at all is left untouched and reported as unchanged.
///
/// ```
/// use nonogram::{solve_line, CellState::*};
///
/// let mut line = [Unknown; 5];
/// assert!(solve_line(&mut line, &[4]));
/// assert_eq!(line, [Unknown, Filled, Filled, Filled, Unknown]);
/// ```
pub fn solve_line(line: &mut [CellState], clues: &[usize]) -> bool {
    resolve_line(line, clues).map_or(false, |resolved| resolved > 0)
}

// Returns the number of cells that were resolved
pub(crate) fn resolve_line(line: &mut [CellState], clues: &[usize]) -> Result<usize, Unsolvable> {
    let mut agreement = Agreement::new(line.len());
    for_each_arrangement(line, clues, |arrangement| agreement.record(arrangement));

    if agreement.n_arrangements() == 0 {
        return Err(Unsolvable);
    }

    let mut resolved = 0;
    for (pos, cell) in line.iter_mut().enumerate() {
        if cell.is_known() {
            continue;
        }
        if let Some(value) = agreement.unanimous(pos) {
            *cell = value;
            resolved += 1;
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::*;

    #[test]
    fn overlap_of_long_run() {
        let mut line = [Unknown; 10];
        assert!(solve_line(&mut line, &[7]));
        assert_eq!(&line[..3], &[Unknown; 3]);
        assert_eq!(&line[3..7], &[Filled; 4]);
        assert_eq!(&line[7..], &[Unknown; 3]);
    }

    #[test]
    fn empty_clue_blanks_line() {
        let mut line = [Unknown; 4];
        assert!(solve_line(&mut line, &[]));
        assert_eq!(line, [Blank; 4]);
    }

    #[test]
    fn full_run_fills_line() {
        let mut line = [Unknown; 6];
        assert!(solve_line(&mut line, &[6]));
        assert_eq!(line, [Filled; 6]);
    }

    #[test]
    fn exact_packing() {
        let mut line = [Unknown; 7];
        assert!(solve_line(&mut line, &[2, 1, 2]));
        assert_eq!(line, [Filled, Filled, Blank, Filled, Blank, Filled, Filled]);
    }

    #[test]
    fn known_cells_are_not_touched() {
        let mut line = [Blank, Unknown, Unknown, Unknown, Filled];
        assert_eq!(resolve_line(&mut line, &[1, 1]).ok(), Some(1));
        assert_eq!(line[0], Blank);
        assert_eq!(line[3], Blank);
        assert_eq!(line[4], Filled);
        // first run can sit at 1 or 2
        assert_eq!(line[1], Unknown);
        assert_eq!(line[2], Unknown);
    }

    #[test]
    fn fully_known_line_reports_no_change() {
        let mut line = [Filled, Blank, Filled];
        assert!(!solve_line(&mut line, &[1, 1]));
        assert_eq!(line, [Filled, Blank, Filled]);
    }

    #[test]
    fn contradiction_leaves_line_alone() {
        let mut line = [Unknown, Filled, Unknown];
        assert!(resolve_line(&mut line, &[]).is_err());
        assert!(!solve_line(&mut line, &[]));
        assert_eq!(line, [Unknown, Filled, Unknown]);

        let mut line = [Unknown; 3];
        assert!(!solve_line(&mut line, &[2, 2]));
        assert_eq!(line, [Unknown; 3]);
    }

    #[test]
    fn ambiguous_line_stays_unknown() {
        let mut line = [Unknown; 4];
        assert!(!solve_line(&mut line, &[1, 1]));
        assert_eq!(line, [Unknown; 4]);
    }
}
