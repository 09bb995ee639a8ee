//! Analysis tools for the two-deme gene drive model
//!
//! This module provides:
//! - Outcome classification (loss, fixation, differential targeting)
//! - Running to equilibrium
//! - Critical migration threshold search
//! - Parallel sweeps over initial conditions and migration asymmetry
//! - Differentiation between demes (FST)
//! - Timing read off recorded trajectories

pub mod equilibrium;
pub mod outcome;
pub mod structure;
pub mod sweep;
pub mod temporal;
pub mod threshold;

// Re-export commonly used functions
pub use equilibrium::{ConvergenceCriteria, EquilibriumReport, equilibrium};
pub use outcome::{DEFAULT_TOLERANCE, Outcome};
pub use structure::{fst, heterozygosity, snapshot_fst};
pub use sweep::{AsymmetryRun, DEFAULT_ALPHAS, asymmetry_sweep, initial_condition_sweep};
pub use temporal::{DemeId, change_per_generation, generations_to_reach};
pub use threshold::{ThresholdSearch, critical_migration};
