//! Shared default values for the command-line driver.
//! Parameter defaults live in `SimulationParameters::default()`; these cover
//! the driver-side settings.

pub const CONFIG_FILE: &str = "params.json";

pub const GENERATIONS: usize = 100;

/// Largest change in either deme at which `run --stop-on-converge` halts.
pub const STOP_THRESHOLD: f64 = 1e-6;

pub const THRESHOLD_PRECISION: f64 = 1e-3;

/// Initial conditions compared by `sweep` when none are given.
pub const SWEEP_INITIAL: [(f64, f64); 3] = [(0.001, 0.01), (0.5, 0.3), (0.9, 0.1)];
