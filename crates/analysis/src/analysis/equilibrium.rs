//! Equilibrium search
//!
//! Runs the recurrence from the initial frequencies until both demes stop
//! moving and classifies where they settled.

use demedrive_sim::simulation::{
    RecurrenceEngine, SimulationParameters, Snapshot,
    configs::{DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_MAX_GENERATIONS},
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::outcome::{DEFAULT_TOLERANCE, Outcome};
use crate::errors::AnalysisError;

/// When to stop iterating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceCriteria {
    /// Upper bound on the number of generations
    pub max_generations: usize,
    /// Largest per-generation change in either deme that counts as converged
    pub threshold: f64,
    /// Boundary tolerance used to classify the result
    pub tolerance: f64,
}

impl ConvergenceCriteria {
    pub fn new(max_generations: usize, threshold: f64) -> Self {
        Self {
            max_generations,
            threshold,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Return a copy with a different classification tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for ConvergenceCriteria {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GENERATIONS, DEFAULT_CONVERGENCE_THRESHOLD)
    }
}

/// Result of [`equilibrium`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumReport {
    /// Starting point of the run
    pub initial: Snapshot,
    /// State when the run stopped
    pub equilibrium: Snapshot,
    /// Generations taken
    pub generations: usize,
    /// Whether the change fell below the threshold
    pub converged: bool,
    /// Classification of `equilibrium`
    pub outcome: Outcome,
}

impl EquilibriumReport {
    /// Final frequencies as plain numbers.
    pub fn frequencies(&self) -> (f64, f64) {
        (self.equilibrium.q1.get(), self.equilibrium.q2.get())
    }
}

/// Iterate `params` from its initial frequencies to equilibrium.
pub fn equilibrium(
    params: SimulationParameters,
    criteria: &ConvergenceCriteria,
) -> Result<EquilibriumReport, AnalysisError> {
    params.validate()?;
    let mut engine = RecurrenceEngine::new(params);
    let initial = engine.current();
    let result = engine.run_until_converged(criteria.max_generations, criteria.threshold);
    let (q1, q2, _) = result.snapshot.as_tuple();
    let outcome = Outcome::classify(q1, q2, criteria.tolerance)?;

    debug!(
        "Equilibrium from ({:.3}, {:.3}): q1={q1:.6}, q2={q2:.6} after {} generations ({outcome})",
        initial.q1, initial.q2, result.steps
    );

    Ok(EquilibriumReport {
        initial,
        equilibrium: result.snapshot,
        generations: result.steps,
        converged: result.converged,
        outcome,
    })
}
