//! Random puzzle generation
use crate::board::{CellState, Grid};
use rand::Rng;

/// Generates a random fully known picture.
///
/// Every cell is filled independently with probability `density`, which is clamped to `0.0..=1.0`.
pub fn random_picture<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Grid {
    let density = if density.is_nan() { 0.0 } else { density.max(0.0).min(1.0) };
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for cell in grid.row_mut(row) {
            *cell = match rng.gen_bool(density) {
                true => CellState::Filled,
                false => CellState::Blank,
            };
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_is_fully_known() {
        let grid = random_picture(7, 11, 0.5, &mut rand::thread_rng());
        assert_eq!(grid.dimensions(), (7, 11));
        assert!(grid.is_solved());
    }

    #[test]
    fn density_extremes() {
        let mut rng = rand::thread_rng();
        let full = random_picture(3, 3, 1.5, &mut rng);
        assert!(full.cells().iter().all(|cell| cell.is_filled()));
        let empty = random_picture(3, 3, -1.0, &mut rng);
        assert!(empty.cells().iter().all(|&cell| cell == CellState::Blank));
    }
}
