//! Conway's Game of Life on a fixed toroidal grid, with equilibrium and
//! center-of-mass velocity analysis.
//!
//! This crate simulates the standard B3/S23 rule on an N×N wraparound
//! grid seeded from random noise or hand-placed patterns, and derives
//! statistical and kinematic properties from the evolving state: the
//! alive-cell count per step, the time it takes repeated random states to
//! reach equilibrium, and the velocity of a traveling glider.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration and seed pattern types
//! - `compute`: Grid, neighbor counting, the transition engine, and the
//!   equilibrium/velocity analyses
//!
//! Rendering, plotting and argument parsing are left to collaborators:
//! they pull [`StepResult`]s and [`Grid::snapshot`]s at their own cadence.
//!
//! # Example
//!
//! ```rust,no_run
//! use life_torus::{
//!     compute::{EquilibriumDetector, LifeEngine},
//!     schema::{Pattern, Seed},
//! };
//!
//! // Seed a 50x50 grid with random noise.
//! let seed = Seed {
//!     pattern: Pattern::Random { seed: 42 },
//! };
//! let mut grid = seed.generate(50).unwrap();
//!
//! // Step the rule and collect the alive-count series.
//! let mut engine = LifeEngine::new(grid.size());
//! let series = engine.run(&mut grid, 1000);
//! println!("alive after {} steps: {}", series.len(), series.last().unwrap());
//!
//! // How long do random states take to settle?
//! let detector = EquilibriumDetector::default();
//! let equilibria = detector.run_experiment(50, 1000, 500, 42);
//! println!("first trial settled at step {}", equilibria[0]);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{
    CenterOfMassTracker, EquilibriumDetector, Grid, LifeEngine, NeighborCountField, StepResult,
    VelocityEstimate, count_neighbors,
};
pub use schema::{Pattern, Seed, SimulationConfig};
