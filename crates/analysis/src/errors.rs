use demedrive_sim::errors::ParameterError;
use thiserror::Error;

/// Error type for analysis operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid parameters: {0}")]
    Parameters(#[from] ParameterError),
    #[error("Invalid search bounds [{lower}, {upper}] (need 0 <= lower < upper <= 1)")]
    InvalidBounds { lower: f64, upper: f64 },
    #[error("Invalid precision: {0} (must be > 0)")]
    InvalidPrecision(f64),
    #[error("Invalid tolerance: {0} (must be between 0.0 and 0.5)")]
    InvalidTolerance(f64),
}
