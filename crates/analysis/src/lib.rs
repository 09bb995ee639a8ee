//! # Analysis Crate
//!
//! Batch experiments on top of the two-deme recurrence engine: running to
//! equilibrium, classifying the outcome, searching the containment threshold
//! and sweeping initial conditions or migration asymmetry.

pub mod analysis;
pub mod errors;

pub use analysis::{
    AsymmetryRun, ConvergenceCriteria, EquilibriumReport, Outcome, ThresholdSearch,
    asymmetry_sweep, critical_migration, equilibrium, initial_condition_sweep,
};
pub use errors::AnalysisError;
