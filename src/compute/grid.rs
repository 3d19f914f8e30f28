//! Toroidal cell grid for Game of Life simulations.

use rand::Rng;

/// N×N binary cell grid with toroidal topology.
///
/// Cells are stored as a flat array with row-major indexing:
/// `cells[row * n + col]`. A cell is alive iff its value is non-zero;
/// pattern combination can legally leave a cell at 2 (two summed partial
/// patterns overlapping), so consumers must not assume strict {0, 1}
/// until the first transition step normalizes the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    n: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-dead grid of side length `n`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![0u8; n * n],
        }
    }

    /// Grid side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Convert (row, col) coordinates to flat index.
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    /// Get raw value at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.idx(row, col)]
    }

    /// Set raw value at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        let idx = self.idx(row, col);
        self.cells[idx] = value;
    }

    /// Add to the value at (row, col), mirroring summed pattern placement.
    #[inline]
    pub fn add(&mut self, row: usize, col: usize, value: u8) {
        let idx = self.idx(row, col);
        self.cells[idx] += value;
    }

    /// Whether the cell at (row, col) is alive (non-zero).
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != 0
    }

    /// Raw cell buffer, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Total number of alive cells.
    pub fn alive_total(&self) -> u32 {
        self.cells.iter().filter(|&&v| v != 0).count() as u32
    }

    /// Coordinates of all alive cells in row-major scan order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, _)| (i / self.n, i % self.n))
    }

    /// Read-only copy of the cell matrix for renderers.
    pub fn snapshot(&self) -> Vec<u8> {
        self.cells.clone()
    }

    /// Fill every cell independently with 0 or 1, p = 0.5 each.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = u8::from(rng.gen_bool(0.5));
        }
    }

    /// Swap the cell buffer with a pre-sized back buffer (no allocation).
    pub(crate) fn swap_cells(&mut self, other: &mut Vec<u8>) {
        debug_assert_eq!(other.len(), self.cells.len());
        std::mem::swap(&mut self.cells, other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_grid_all_dead() {
        let grid = Grid::new(8);
        assert_eq!(grid.alive_total(), 0);
        assert_eq!(grid.cells().len(), 64);
    }

    #[test]
    fn test_alive_total_counts_nonzero() {
        let mut grid = Grid::new(4);
        grid.set(0, 0, 1);
        grid.set(1, 2, 2);
        assert_eq!(grid.alive_total(), 2);
        assert!(grid.is_alive(1, 2));
    }

    #[test]
    fn test_alive_cells_row_major_order() {
        let mut grid = Grid::new(4);
        grid.set(2, 3, 1);
        grid.set(0, 1, 1);
        grid.set(2, 0, 1);
        let cells: Vec<_> = grid.alive_cells().collect();
        assert_eq!(cells, vec![(0, 1), (2, 0), (2, 3)]);
    }

    #[test]
    fn test_randomize_deterministic_per_seed() {
        let mut a = Grid::new(16);
        let mut b = Grid::new(16);
        a.randomize(&mut StdRng::seed_from_u64(99));
        b.randomize(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);

        let mut c = Grid::new(16);
        c.randomize(&mut StdRng::seed_from_u64(100));
        assert_ne!(a, c);
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let mut grid = Grid::new(3);
        grid.set(1, 1, 1);
        let snap = grid.snapshot();
        grid.set(1, 1, 0);
        assert_eq!(snap[grid.idx(1, 1)], 1);
        assert_eq!(grid.get(1, 1), 0);
    }
}
