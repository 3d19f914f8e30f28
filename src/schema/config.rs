//! Configuration types for simulation parameters.

use serde::{Deserialize, Serialize};

fn default_equilibrium_window() -> usize {
    10
}

fn default_trials() -> usize {
    500
}

fn default_sample_interval() -> usize {
    10
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid side length N (the grid is N×N).
    pub size: usize,
    /// Sweep budget per simulation run.
    pub sweeps: usize,
    /// Consecutive steps of unchanged alive count that define equilibrium.
    #[serde(default = "default_equilibrium_window")]
    pub equilibrium_window: usize,
    /// Independent random trials per equilibrium experiment.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Steps between centroid samples during velocity estimation.
    #[serde(default = "default_sample_interval")]
    pub sample_interval: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: 50,
            sweeps: 1000,
            equilibrium_window: default_equilibrium_window(),
            trials: default_trials(),
            sample_interval: default_sample_interval(),
        }
    }
}

impl SimulationConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize);
        }
        if self.sweeps == 0 {
            return Err(ConfigError::InvalidSweeps);
        }
        if self.equilibrium_window == 0 {
            return Err(ConfigError::InvalidEquilibriumWindow);
        }
        if self.trials == 0 {
            return Err(ConfigError::InvalidTrials);
        }
        if self.sample_interval == 0 {
            return Err(ConfigError::InvalidSampleInterval);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid size must be non-zero")]
    InvalidSize,
    #[error("Sweep budget must be non-zero")]
    InvalidSweeps,
    #[error("Equilibrium window must be non-zero")]
    InvalidEquilibriumWindow,
    #[error("Trial count must be non-zero")]
    InvalidTrials,
    #[error("Centroid sample interval must be non-zero")]
    InvalidSampleInterval,
}
