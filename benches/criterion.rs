#[macro_use]
extern crate criterion;
use criterion::Criterion;
use nonogram::generator::random_picture;
use nonogram::{solve_line, CellState, Nonogram};

#[rustfmt::skip]
fn bundled_puzzle() -> Nonogram {
    Nonogram::new(
        vec![
            vec![6], vec![1, 1], vec![1, 1, 1], vec![6, 1, 1], vec![1, 1],
            vec![1, 7], vec![4, 2], vec![1, 3, 3], vec![1, 1, 1, 1, 1], vec![4, 1, 2, 3],
            vec![1, 1], vec![1, 3, 2], vec![3, 2, 1, 1], vec![1, 1, 1, 1], vec![5, 4],
        ],
        vec![
            vec![4, 1], vec![1, 1, 1], vec![1, 1, 1], vec![1, 4, 3], vec![1, 1, 1],
            vec![4, 6, 1], vec![1, 1, 1], vec![1, 3, 3], vec![1, 4, 4], vec![1, 1, 1],
            vec![4, 5, 4], vec![3, 1, 1], vec![1, 3, 1], vec![1, 4], vec![1, 1],
        ],
    )
    .unwrap()
}

fn random_puzzles(rows: usize, cols: usize, n: usize) -> Vec<Nonogram> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| Nonogram::from_solution(&random_picture(rows, cols, 0.6, &mut rng)))
        .collect()
}

fn _1_bundled_15x15(c: &mut Criterion) {
    let puzzle = bundled_puzzle();
    c.bench_function("_1_bundled_15x15", |b| b.iter(|| puzzle.solve()));
}

fn _2_random_10x10(c: &mut Criterion) {
    let puzzles = random_puzzles(10, 10, 50);
    let mut iter = puzzles.iter().cycle();
    c.bench_function("_2_random_10x10", |b| b.iter(|| iter.next().unwrap().solve()));
}

fn _3_random_20x20(c: &mut Criterion) {
    let puzzles = random_puzzles(20, 20, 20);
    let mut iter = puzzles.iter().cycle();
    c.bench_function("_3_random_20x20", |b| b.iter(|| iter.next().unwrap().solve()));
}

// many short runs on an empty line is the expensive case for enumeration
fn _4_empty_line_short_runs(c: &mut Criterion) {
    c.bench_function("_4_empty_line_short_runs", |b| {
        b.iter(|| {
            let mut line = [CellState::Unknown; 30];
            solve_line(&mut line, &[1, 1, 1, 1, 1, 1, 1, 1])
        })
    });
}

criterion_group!(
    benches,
    _1_bundled_15x15,
    _2_random_10x10,
    _3_random_20x20,
    _4_empty_line_short_runs
);
criterion_main!(benches);
