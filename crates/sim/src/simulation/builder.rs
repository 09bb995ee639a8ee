//! Builder pattern for creating recurrence engines.
//!
//! Provides a fluent API for configuring an engine, starting from the
//! interactive defaults or a named preset, with domain validation at
//! [`EngineBuilder::build`].

use crate::errors::ParameterError;
use crate::simulation::{LifeCycle, Preset, RecurrenceEngine, SimulationParameters};

/// Builder for constructing [`RecurrenceEngine`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use demedrive_sim::simulation::EngineBuilder;
///
/// // Defaults of the interactive simulator
/// let engine = EngineBuilder::new().build().unwrap();
/// assert_eq!(engine.generation(), 0);
///
/// // Fully specified, asymmetric migration
/// let mut engine = EngineBuilder::new()
///     .fitness_cost(0.1)
///     .conversion(0.9)
///     .dominance(0.0)
///     .migration(0.05)
///     .alpha(0.5)
///     .initial_frequencies(0.01, 0.0)
///     .build()
///     .unwrap();
/// engine.step();
/// assert!(engine.current().q1.get() > 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    params: SimulationParameters,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Create a new builder with the interactive defaults.
    pub fn new() -> Self {
        Self {
            params: SimulationParameters::default(),
        }
    }

    /// Start from a named preset.
    pub fn preset(preset: Preset) -> Self {
        Self {
            params: preset.parameters(),
        }
    }

    /// Start from an existing parameter snapshot.
    pub fn from_parameters(params: SimulationParameters) -> Self {
        Self { params }
    }

    /// Set the fitness cost `s`.
    pub fn fitness_cost(mut self, s: f64) -> Self {
        self.params.s = s;
        self
    }

    /// Set the conversion efficiency `c`.
    pub fn conversion(mut self, c: f64) -> Self {
        self.params.c = c;
        self
    }

    /// Set the dominance coefficient `h`.
    pub fn dominance(mut self, h: f64) -> Self {
        self.params.h = h;
        self
    }

    /// Set the migration rate `m` (deme 2 into deme 1).
    pub fn migration(mut self, m: f64) -> Self {
        self.params.m = m;
        self
    }

    /// Set the migration asymmetry `alpha` (default: 1.0).
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.params.alpha = alpha;
        self
    }

    /// Set the initial drive frequencies of both demes.
    pub fn initial_frequencies(mut self, q1_0: f64, q2_0: f64) -> Self {
        self.params.q1_0 = q1_0;
        self.params.q2_0 = q2_0;
        self
    }

    /// Set the order of selection and migration.
    pub fn life_cycle(mut self, life_cycle: LifeCycle) -> Self {
        self.params.life_cycle = life_cycle;
        self
    }

    /// Validate and return the parameter snapshot without building an engine.
    pub fn parameters(&self) -> Result<SimulationParameters, ParameterError> {
        self.params.validate()?;
        Ok(self.params)
    }

    /// Build the engine, validating all parameters.
    pub fn build(self) -> Result<RecurrenceEngine, ParameterError> {
        Ok(RecurrenceEngine::new(self.parameters()?))
    }
}
