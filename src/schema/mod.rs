//! Schema module - configuration and seeding types for Life simulations.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
