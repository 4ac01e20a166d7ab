use log::{error, info};
use nonogram::Nonogram;

#[rustfmt::skip]
const ROW_CLUES: &[&[usize]] = &[
    &[6], &[1, 1], &[1, 1, 1], &[6, 1, 1], &[1, 1],
    &[1, 7], &[4, 2], &[1, 3, 3], &[1, 1, 1, 1, 1], &[4, 1, 2, 3],
    &[1, 1], &[1, 3, 2], &[3, 2, 1, 1], &[1, 1, 1, 1], &[5, 4],
];

#[rustfmt::skip]
const COL_CLUES: &[&[usize]] = &[
    &[4, 1], &[1, 1, 1], &[1, 1, 1], &[1, 4, 3], &[1, 1, 1],
    &[4, 6, 1], &[1, 1, 1], &[1, 3, 3], &[1, 4, 4], &[1, 1, 1],
    &[4, 5, 4], &[3, 1, 1], &[1, 3, 1], &[1, 4], &[1, 1],
];

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();

    let to_vecs = |clues: &[&[usize]]| -> Vec<Vec<usize>> { clues.iter().map(|clue| clue.to_vec()).collect() };
    let puzzle = match Nonogram::new(to_vecs(ROW_CLUES), to_vecs(COL_CLUES)) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            error!("invalid puzzle: {}", err);
            std::process::exit(1);
        }
    };

    let solution = puzzle.solve();
    println!("{}", solution.grid);
    if !solution.is_solved() {
        info!("{} cells could not be deduced", solution.grid.n_unknown());
    }
}
