//! Game of Life transition engine.
//!
//! Applies Conway's B3/S23 rule simultaneously to every cell from the
//! current grid, never the in-progress next grid.

use super::{Grid, count_neighbors};

/// Outcome of one transition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StepResult {
    /// 1-based step count since the engine was created.
    pub step: u64,
    /// Alive cells in the grid after this step.
    pub alive_total: u32,
}

/// B3/S23 stepper with a reusable back buffer.
///
/// The next state is written into the back buffer and swapped in, so no
/// cell is mutated while neighbor counts for other cells are still being
/// read. A renderer collaborator pulls one [`StepResult`] per call and
/// reads [`Grid::snapshot`] at its own cadence.
pub struct LifeEngine {
    next: Vec<u8>,
    step: u64,
}

impl LifeEngine {
    /// Create an engine for grids of side length `n`.
    pub fn new(n: usize) -> Self {
        Self {
            next: vec![0u8; n * n],
            step: 0,
        }
    }

    /// Advance the grid by one generation.
    ///
    /// A cell survives with 2 or 3 alive neighbors, is born with exactly 3,
    /// and is dead otherwise. The returned `alive_total` counts cells in
    /// the *next* grid.
    pub fn step(&mut self, grid: &mut Grid) -> StepResult {
        debug_assert_eq!(self.next.len(), grid.cells().len());

        let field = count_neighbors(grid);
        let mut alive_total = 0u32;

        for ((out, &cell), &nn) in self
            .next
            .iter_mut()
            .zip(grid.cells().iter())
            .zip(field.counts().iter())
        {
            let alive = cell != 0;
            let survives = alive && (nn == 2 || nn == 3);
            let born = !alive && nn == 3;
            let v = u8::from(survives || born);
            alive_total += u32::from(v);
            *out = v;
        }

        grid.swap_cells(&mut self.next);
        self.step += 1;

        StepResult {
            step: self.step,
            alive_total,
        }
    }

    /// Run `sweeps` steps, collecting the alive-count series.
    pub fn run(&mut self, grid: &mut Grid, sweeps: usize) -> Vec<u32> {
        (0..sweeps).map(|_| self.step(grid).alive_total).collect()
    }
}
