//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types and traits in the demedrive library.
//!
//! # Example
//!
//! ```
//! use demedrive_sim::prelude::*;
//!
//! let mut engine = RecurrenceEngine::new(Preset::B2.parameters());
//! let (q1, q2) = engine.step();
//! assert!(q1.get() <= 1.0 && q2.get() <= 1.0);
//! ```

pub use crate::base::{Frequency, Genotype, GenotypeCounts, GenotypeFrequencies};
pub use crate::errors::{self, ParameterError};
pub use crate::evolution::{DemeSelection, DriveFitness, MigrationModel};
pub use crate::simulation::{
    Configuration, EngineBuilder, LifeCycle, Preset, RecurrenceEngine, SimulationParameters,
    Snapshot, Trajectory,
};
