use nonogram::{CellState, Grid, Nonogram, SolveStatus, Solver};

fn main() {
    // A smiley
    let puzzle = Nonogram::new(
        vec![vec![1, 1], vec![1, 1], vec![], vec![1, 1], vec![3]],
        vec![vec![1], vec![2, 1], vec![1], vec![2, 1], vec![1]],
    )
    .unwrap();

    let solution = puzzle.solve();
    println!("{}", solution.grid);

    match solution.status {
        SolveStatus::Solved => println!("solved in {} sweeps", solution.sweeps),
        _ => {
            // the mouth can sit in two places, give away its left corner
            let mut givens: Grid = solution.grid.clone();
            givens[(3, 0)] = CellState::Filled;
            let solution = Solver::default()
                .solve_from(givens, puzzle.row_clues(), puzzle.col_clues())
                .unwrap();
            println!("with a hint:\n{}", solution.grid);
        }
    }
}
