//! Seed patterns for initializing Life grids.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::compute::Grid;

/// Relative 5-cell glider footprint around an anchor (row, col).
const GLIDER_OFFSETS: [(i64, i64); 5] = [(-1, 0), (0, 1), (1, 1), (1, 0), (1, -1)];

/// Rows below grid center where the side glider's anchor sits.
const SIDE_GLIDER_ROW_OFFSET: i64 = 20;

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random { seed: 0 },
        }
    }
}

/// Predefined initialization patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Each cell independently 0 or 1 with equal probability.
    Random {
        /// Random seed.
        seed: u64,
    },
    /// Two mirrored vertical blinkers near opposite quarter corners plus a
    /// glider at the grid center.
    BlinkerCornersGliderCenter,
    /// A single glider offset toward one edge instead of centered.
    GliderSide,
}

/// Seeding errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("grid size must be non-zero")]
    InvalidSize,
    #[error("unrecognized pattern selector {0} (expected 0, 1 or 2)")]
    InvalidMode(i64),
    #[error("pattern cell at row {row}, col {col} falls outside a {n}x{n} grid")]
    PatternTooLargeForGrid { row: i64, col: i64, n: usize },
}

impl Pattern {
    /// Map a CLI pattern selector (0, 1 or 2) to a pattern, using `seed`
    /// for the random mode.
    pub fn from_index(index: i64, seed: u64) -> Result<Self, SeedError> {
        match index {
            0 => Ok(Pattern::Random { seed }),
            1 => Ok(Pattern::BlinkerCornersGliderCenter),
            2 => Ok(Pattern::GliderSide),
            other => Err(SeedError::InvalidMode(other)),
        }
    }
}

impl Seed {
    /// Generate an initial grid of side length `n` from this seed.
    ///
    /// Placement anchors use half-to-even rounding of N/2 and N/4. A
    /// negative placement coordinate wraps around the torus; a coordinate
    /// at or beyond N fails with [`SeedError::PatternTooLargeForGrid`]
    /// before any cell is written.
    pub fn generate(&self, n: usize) -> Result<Grid, SeedError> {
        if n == 0 {
            return Err(SeedError::InvalidSize);
        }

        match self.pattern {
            Pattern::Random { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut grid = Grid::new(n);
                grid.randomize(&mut rng);
                Ok(grid)
            }
            Pattern::BlinkerCornersGliderCenter => {
                let quarter = round_half_even(n as f64 / 4.0);
                let three_quarter = 3 * quarter;
                let center = round_half_even(n as f64 / 2.0);

                let mut cells = vec![
                    (quarter - 1, three_quarter),
                    (quarter, three_quarter),
                    (quarter + 1, three_quarter),
                    (three_quarter - 1, quarter),
                    (three_quarter, quarter),
                    (three_quarter + 1, quarter),
                ];
                cells.extend(glider_cells(center, center));

                // The two partial patterns are summed, so a coinciding
                // blinker and glider cell legally holds 2.
                place_summed(n, &cells)
            }
            Pattern::GliderSide => {
                let center = round_half_even(n as f64 / 2.0);
                let cells = glider_cells(center - SIDE_GLIDER_ROW_OFFSET, center);
                place_summed(n, &cells)
            }
        }
    }
}

fn glider_cells(anchor_row: i64, anchor_col: i64) -> Vec<(i64, i64)> {
    GLIDER_OFFSETS
        .iter()
        .map(|&(dr, dc)| (anchor_row + dr, anchor_col + dc))
        .collect()
}

/// Resolve all coordinates, then sum the cells into a fresh grid. Fails
/// before any write, so a failed initialization leaves no partial state.
fn place_summed(n: usize, cells: &[(i64, i64)]) -> Result<Grid, SeedError> {
    let resolved = cells
        .iter()
        .map(|&(row, col)| resolve_cell(row, col, n))
        .collect::<Result<Vec<_>, _>>()?;

    let mut grid = Grid::new(n);
    for (row, col) in resolved {
        grid.add(row, col, 1);
    }
    Ok(grid)
}

/// Negative coordinates wrap around the torus; coordinates at or beyond N
/// are a placement failure rather than a silent clip.
fn resolve_cell(row: i64, col: i64, n: usize) -> Result<(usize, usize), SeedError> {
    let size = n as i64;
    if row >= size || col >= size {
        return Err(SeedError::PatternTooLargeForGrid { row, col, n });
    }
    Ok((row.rem_euclid(size) as usize, col.rem_euclid(size) as usize))
}

/// Round to nearest with ties to even, matching the anchor arithmetic the
/// placement constants were derived with.
fn round_half_even(x: f64) -> i64 {
    x.round_ties_even() as i64
}
