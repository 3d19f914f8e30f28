//! Compute module - simulation and analysis for the toroidal Game of Life.

mod engine;
mod equilibrium;
mod grid;
mod neighbors;
mod velocity;

pub use engine::*;
pub use equilibrium::*;
pub use grid::*;
pub use neighbors::*;
pub use velocity::*;
