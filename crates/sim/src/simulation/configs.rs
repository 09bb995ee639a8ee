//! Serializable run configuration.
//!
//! A [`Configuration`] bundles a parameter snapshot with the settings a driver
//! needs to run it (how many generations, when to stop early, how much of the
//! trajectory to keep). It can be written to and read from JSON so that an
//! experiment is reproducible from a single file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::simulation::SimulationParameters;

/// Default number of generations for a fixed-length run.
pub const DEFAULT_GENERATIONS: usize = 100;
/// Default step limit when running to equilibrium.
pub const DEFAULT_MAX_GENERATIONS: usize = 10_000;
/// Default per-generation change below which a run counts as converged.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-10;
/// Default number of individuals drawn per deme for genotype samples.
pub const DEFAULT_SAMPLE_SIZE: u64 = 20;

/// The master configuration struct.
/// Can be deserialized from a file to fully reproduce a run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub parameters: SimulationParameters,
    #[serde(default)]
    pub execution: ExecutionConfig,
}

/// Driver-side settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Generations for a fixed-length run
    pub generations: usize,
    /// Step limit when running to equilibrium
    pub max_generations: usize,
    /// Convergence threshold on the per-generation change of q1 and q2
    pub convergence_threshold: f64,
    /// Keep only the last `window` generations of the trajectory
    pub window: Option<usize>,
    /// Individuals drawn per deme for genotype samples
    pub sample_size: u64,
    /// Optional RNG seed for genotype samples
    pub seed: Option<u64>,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            max_generations: DEFAULT_MAX_GENERATIONS,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            window: None,
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

impl Configuration {
    /// Create a configuration with default execution settings.
    pub fn new(parameters: SimulationParameters) -> Self {
        Self {
            parameters,
            execution: ExecutionConfig::default(),
        }
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.parameters.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Write the configuration as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
