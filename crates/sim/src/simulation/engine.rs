//! Recurrence engine for the two-deme gene drive model.
//!
//! The engine owns the parameter snapshot and the per-deme drive-allele
//! frequencies and advances them by exactly one generation per call to
//! [`RecurrenceEngine::step`]. It knows nothing about timing or pausing: a
//! driver decides when (and whether) to step.
//!
//! One generation consists of
//!
//! 1. conversion and selection inside each deme ([`DemeSelection`]),
//! 2. migration between the demes ([`MigrationModel`]),
//! 3. clamping both frequencies into [0, 1],
//!
//! with the order of 1 and 2 set by [`LifeCycle`].

use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::{Frequency, GenotypeCounts, GenotypeFrequencies};
use crate::evolution::{DemeSelection, DriveFitness, MigrationModel};
use crate::simulation::{
    Deme, LifeCycle, SimulationParameters, SimulationState, Snapshot, Trajectory,
};

/// Outcome of [`RecurrenceEngine::run_until_converged`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Convergence {
    /// State after the last applied step
    pub snapshot: Snapshot,
    /// Number of steps taken by this call
    pub steps: usize,
    /// Whether the change fell below the threshold before the step limit
    pub converged: bool,
}

/// Main recurrence engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceEngine {
    /// Current parameter snapshot
    params: SimulationParameters,
    /// Within-deme fitness model derived from `params`
    drive: DriveFitness,
    /// Between-deme migration model derived from `params`
    migration: MigrationModel,
    /// Frequencies and generation counter
    state: SimulationState,
}

impl RecurrenceEngine {
    /// Create an engine at generation zero with `q1 = q1_0`, `q2 = q2_0`.
    ///
    /// Parameters are expected to be inside their domains; see
    /// [`SimulationParameters::new`] and [`SimulationParameters::clamped`].
    pub fn new(params: SimulationParameters) -> Self {
        let (q1, q2) = params.initial();
        debug!(
            "Initializing engine: s={}, c={}, h={}, m={}, alpha={}, q1_0={}, q2_0={}, {}",
            params.s, params.c, params.h, params.m, params.alpha, params.q1_0, params.q2_0,
            params.life_cycle
        );
        Self {
            drive: params.drive(),
            migration: params.migration(),
            params,
            state: SimulationState::initial(q1, q2),
        }
    }

    /// Discard the current state and start again from `params`.
    pub fn reset(&mut self, params: SimulationParameters) {
        *self = Self::new(params);
    }

    /// Replace the parameter snapshot without touching frequencies or the
    /// generation counter.
    ///
    /// Initial frequencies in `params` only take effect on the next
    /// [`reset`](Self::reset).
    pub fn set_parameters(&mut self, params: SimulationParameters) {
        debug!(
            "Updating parameters at generation {}: s={}, c={}, h={}, m={}, alpha={}",
            self.state.generation, params.s, params.c, params.h, params.m, params.alpha
        );
        self.drive = params.drive();
        self.migration = params.migration();
        self.params = params;
    }

    /// Current `(q1, q2, generation)`.
    pub fn current(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Get reference to the parameter snapshot.
    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Get reference to the full state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.state.generation
    }

    /// Advance by one generation and return the new `(q1, q2)`.
    pub fn step(&mut self) -> (Frequency, Frequency) {
        let q1 = self.state.deme1.q();
        let q2 = self.state.deme2.q();

        let (next1, next2) = match self.params.life_cycle {
            LifeCycle::SelectionThenMigration => {
                let s1 = self.drive.select(q1);
                let s2 = self.drive.select(q2);
                self.migration.migrate(s1, s2)
            }
            LifeCycle::MigrationThenSelection => {
                let (m1, m2) = self.migration.migrate(q1, q2);
                (self.drive.select(m1), self.drive.select(m2))
            }
        };

        self.state.deme1 = Deme::new(next1);
        self.state.deme2 = Deme::new(next2);
        self.state.generation += 1;

        trace!(
            "Generation {}: q1={:.6}, q2={:.6}",
            self.state.generation,
            next1,
            next2
        );
        (next1, next2)
    }

    /// Run for a specific number of generations.
    pub fn run_for(&mut self, generations: usize) -> Snapshot {
        for _ in 0..generations {
            self.step();
        }
        self.current()
    }

    /// Record the current snapshot followed by `generations` more steps.
    pub fn trajectory(&mut self, generations: usize) -> Trajectory {
        let mut trajectory = Trajectory::new();
        trajectory.push(self.current());
        for _ in 0..generations {
            self.step();
            trajectory.push(self.current());
        }
        trajectory
    }

    /// Step until both frequencies change by less than `threshold` in one
    /// generation, or until `max_generations` steps have been taken.
    ///
    /// The step that falls below the threshold is kept.
    pub fn run_until_converged(&mut self, max_generations: usize, threshold: f64) -> Convergence {
        let mut previous = self.current();
        for steps in 1..=max_generations {
            self.step();
            let current = self.current();
            if current.max_change(&previous) < threshold {
                debug!(
                    "Converged after {steps} generations: q1={:.6}, q2={:.6}",
                    current.q1, current.q2
                );
                return Convergence {
                    snapshot: current,
                    steps,
                    converged: true,
                };
            }
            previous = current;
        }
        debug!("No convergence within {max_generations} generations");
        Convergence {
            snapshot: self.current(),
            steps: max_generations,
            converged: false,
        }
    }

    /// Hardy–Weinberg genotype frequencies of both demes.
    pub fn genotype_frequencies(&self) -> [GenotypeFrequencies; 2] {
        [self.state.deme1.genotypes(), self.state.deme2.genotypes()]
    }

    /// Draw `n` individuals per deme from the current genotype frequencies.
    pub fn sample_genotypes<R: Rng + ?Sized>(&self, n: u64, rng: &mut R) -> [GenotypeCounts; 2] {
        let [g1, g2] = self.genotype_frequencies();
        [
            GenotypeCounts::sample(&g1, n, rng),
            GenotypeCounts::sample(&g2, n, rng),
        ]
    }
}

impl Default for RecurrenceEngine {
    fn default() -> Self {
        Self::new(SimulationParameters::default())
    }
}
