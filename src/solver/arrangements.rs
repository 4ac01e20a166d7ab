use crate::board::{min_len, CellState};

/// Calls `on_arrangement` with every complete filled/blank assignment of `line`
/// whose runs match `clues` and which agrees with all known cells of `line`.
///
/// Arrangements are produced in order of their leftmost differing run start.
/// If no arrangement fits, `on_arrangement` is never called.
pub fn for_each_arrangement(
    line: &[CellState],
    clues: &[usize],
    mut on_arrangement: impl FnMut(&[CellState]),
) {
    let mut arrangement = Vec::with_capacity(line.len());
    place_runs(line, clues, 0, &mut arrangement, &mut on_arrangement);
}

/// Collects all arrangements of `clues` consistent with `line`.
/// See [`for_each_arrangement`].
pub fn arrangements(line: &[CellState], clues: &[usize]) -> Vec<Vec<CellState>> {
    let mut found = vec![];
    for_each_arrangement(line, clues, |arrangement| found.push(arrangement.to_vec()));
    found
}

// `arrangement` holds the decided prefix of the line, i.e. `arrangement.len() == cursor`.
// It is restored to that length before returning.
fn place_runs<F: FnMut(&[CellState])>(
    line: &[CellState],
    clues: &[usize],
    cursor: usize,
    arrangement: &mut Vec<CellState>,
    on_arrangement: &mut F,
) {
    debug_assert_eq!(arrangement.len(), cursor);
    let len = line.len();

    let (&run, rest) = match clues.split_first() {
        Some(split) => split,
        None => {
            arrangement.resize(len, CellState::Blank);
            // also rejects filled cells in the padding
            if is_consistent(line, arrangement) {
                on_arrangement(arrangement);
            }
            arrangement.truncate(cursor);
            return;
        }
    };

    // leave room for this run, all following runs and the blanks between them
    let last_start = match min_len(clues).and_then(|min_len| len.checked_sub(min_len)) {
        Some(last_start) => last_start,
        None => return,
    };

    for start in cursor..=last_start {
        // the gap before the run would swallow a filled cell, as would any later start
        if start > cursor && line[start - 1].is_filled() {
            break;
        }
        let end = start + run;
        if line[start..end].contains(&CellState::Blank) {
            continue;
        }
        if end < len && line[end].is_filled() {
            continue;
        }

        arrangement.resize(start, CellState::Blank);
        arrangement.resize(end, CellState::Filled);
        let next = if end < len {
            arrangement.push(CellState::Blank);
            end + 1
        } else {
            end
        };
        place_runs(line, rest, next, arrangement, on_arrangement);
        arrangement.truncate(cursor);
    }
}

fn is_consistent(line: &[CellState], arrangement: &[CellState]) -> bool {
    line.iter()
        .zip(arrangement)
        .all(|(&known, &value)| known.admits(value))
}
