//! Parameter sweeps
//!
//! Independent runs of the recurrence over a list of initial conditions or
//! migration asymmetries. Each run owns its engine, so the runs are spread
//! over the rayon pool; results come back in input order.

use demedrive_sim::simulation::{RecurrenceEngine, SimulationParameters, Trajectory};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::equilibrium::{ConvergenceCriteria, EquilibriumReport, equilibrium};
use crate::errors::AnalysisError;

/// Migration asymmetries compared by default in [`asymmetry_sweep`].
pub const DEFAULT_ALPHAS: [f64; 5] = [0.1, 0.5, 1.0, 2.0, 10.0];

/// Equilibrium from each `(q1_0, q2_0)` under otherwise shared parameters.
pub fn initial_condition_sweep(
    params: SimulationParameters,
    initial: &[(f64, f64)],
    criteria: &ConvergenceCriteria,
) -> Result<Vec<EquilibriumReport>, AnalysisError> {
    info!("Sweeping {} initial conditions", initial.len());
    initial
        .par_iter()
        .map(|&(q1_0, q2_0)| equilibrium(params.with_initial(q1_0, q2_0)?, criteria))
        .collect()
}

/// Trajectory of one asymmetry in [`asymmetry_sweep`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsymmetryRun {
    pub alpha: f64,
    pub trajectory: Trajectory,
}

/// Trajectory over `generations` for each migration asymmetry `alpha`.
pub fn asymmetry_sweep(
    params: SimulationParameters,
    alphas: &[f64],
    generations: usize,
) -> Result<Vec<AsymmetryRun>, AnalysisError> {
    info!(
        "Sweeping {} migration asymmetries over {generations} generations",
        alphas.len()
    );
    alphas
        .par_iter()
        .map(|&alpha| {
            let mut engine = RecurrenceEngine::new(params.with_alpha(alpha)?);
            Ok(AsymmetryRun {
                alpha,
                trajectory: engine.trajectory(generations),
            })
        })
        .collect()
}
