//! Toroidal neighbor counting.
//!
//! Conceptually the count field is the elementwise sum of 8 shifted copies
//! of the alive mask, one per neighbor offset, with both axes wrapping
//! independently.

use super::Grid;

/// The 8 Moore-neighborhood offsets (row, col). The cell itself is excluded.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Per-cell count of alive toroidal neighbors, each value in [0, 8].
///
/// Derived from a [`Grid`]; recomputed fresh every step, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCountField {
    n: usize,
    counts: Vec<u8>,
}

impl NeighborCountField {
    /// Count at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.counts[row * self.n + col]
    }

    /// Raw count buffer, row-major.
    #[inline]
    pub fn counts(&self) -> &[u8] {
        &self.counts
    }
}

/// Count alive neighbors of every cell under toroidal wraparound.
///
/// A cell holding 2 from summed pattern placement contributes 1, since
/// "alive" means non-zero.
pub fn count_neighbors(grid: &Grid) -> NeighborCountField {
    let n = grid.size();
    let mut counts = vec![0u8; n * n];

    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        for row in 0..n {
            let src_row = wrap(row as isize + dr, n);
            for col in 0..n {
                let src_col = wrap(col as isize + dc, n);
                counts[row * n + col] += u8::from(grid.is_alive(src_row, src_col));
            }
        }
    }

    NeighborCountField { n, counts }
}

#[inline]
fn wrap(coord: isize, n: usize) -> usize {
    coord.rem_euclid(n as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Pattern, Seed};
    use proptest::prelude::*;

    #[test]
    fn test_single_cell_wraparound_corners() {
        let mut grid = Grid::new(5);
        grid.set(0, 0, 1);
        let field = count_neighbors(&grid);

        // The alive cell contributes to exactly its 8 wrapped neighbors.
        for (r, c) in [
            (4, 4),
            (4, 0),
            (4, 1),
            (0, 4),
            (0, 1),
            (1, 4),
            (1, 0),
            (1, 1),
        ] {
            assert_eq!(field.get(r, c), 1, "expected neighbor at ({r}, {c})");
        }
        // Own value is excluded.
        assert_eq!(field.get(0, 0), 0);
        // Everything else is untouched.
        let total: u32 = field.counts().iter().map(|&c| c as u32).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn test_full_grid_counts_are_eight() {
        let mut grid = Grid::new(4);
        for r in 0..4 {
            for c in 0..4 {
                grid.set(r, c, 1);
            }
        }
        let field = count_neighbors(&grid);
        assert!(field.counts().iter().all(|&c| c == 8));
    }

    #[test]
    fn test_doubled_cell_counts_as_one_neighbor() {
        let mut grid = Grid::new(5);
        grid.set(2, 2, 2);
        let field = count_neighbors(&grid);
        assert_eq!(field.get(2, 3), 1);
        assert_eq!(field.get(1, 1), 1);
    }

    proptest! {
        #[test]
        fn prop_counts_in_range_and_sum_is_eight_times_alive(
            seed in any::<u64>(),
            n in 1usize..24,
        ) {
            let grid = Seed { pattern: Pattern::Random { seed } }
                .generate(n)
                .unwrap();
            let field = count_neighbors(&grid);

            prop_assert!(field.counts().iter().all(|&c| c <= 8));

            // Each alive cell lands in exactly 8 neighbor counts.
            let alive = grid.alive_total() as u64;
            let total: u64 = field.counts().iter().map(|&c| c as u64).sum();
            prop_assert_eq!(total, 8 * alive);
        }
    }
}
