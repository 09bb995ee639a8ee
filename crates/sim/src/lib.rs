//! # Simulation Crate
//!
//! The `sim` crate provides the core logic of the two-deme gene drive
//! simulator: the discrete-generation recurrence that updates drive-allele
//! frequencies under conversion, selection, dominance and migration.
//! It includes modules for frequencies and genotypes, the evolutionary
//! phases of a generation, and the engine that applies them.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod prelude;
pub mod simulation;

pub use base::{Frequency, Genotype};
