//! Recurrence engine and run configuration.
//!
//! This module provides the per-generation engine for the two-deme gene
//! drive model together with the types it reads and produces.

//! Re-exports
//!
//! The most commonly used simulation types are re-exported here for
//! convenience so consumers can import them from `demedrive_sim::simulation`.
//!
//! - `RecurrenceEngine`: owns the state and advances it one generation per step.
//! - `SimulationParameters`: the parameter snapshot, with `Preset`s.
//! - `EngineBuilder`: fluent builder with validation.
//! - `Configuration`: JSON-serializable parameters plus execution settings.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod parameters;
pub mod state;
pub mod trajectory;

pub use builder::EngineBuilder;
pub use configs::{Configuration, ExecutionConfig};
pub use engine::{Convergence, RecurrenceEngine};
pub use parameters::{LifeCycle, Preset, SimulationParameters};
pub use state::{Deme, SimulationState, Snapshot};
pub use trajectory::Trajectory;
