use thiserror::Error;

/// Error returned when a simulation parameter lies outside its domain.
///
/// The recurrence itself never fails; this is raised only when parameters are
/// constructed through the validating paths (`SimulationParameters::new`,
/// `EngineBuilder::build`, deserialized configurations).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A value that must lie in [0, 1] did not.
    #[error("Invalid value for {name}: {value} (must be between 0.0 and 1.0)")]
    OutOfUnitInterval { name: &'static str, value: f64 },

    /// The migration asymmetry ratio was negative or not finite.
    #[error("Invalid migration asymmetry alpha: {0} (must be finite and >= 0.0)")]
    InvalidAlpha(f64),

    /// The deme 1 -> deme 2 rate `alpha * m` exceeded one.
    #[error("Migration rate alpha * m = {0} exceeds 1.0")]
    MigrationOverflow(f64),
}

impl ParameterError {
    /// Check that `value` lies in the closed unit interval.
    pub fn check_unit(name: &'static str, value: f64) -> Result<f64, Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(Self::OutOfUnitInterval { name, value })
        }
    }
}

/// Errors that can occur while loading or saving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The file parsed but carries out-of-domain parameters
    #[error("Invalid parameters: {0}")]
    Parameters(#[from] ParameterError),
}
