//! Evolution module providing the two phases of a generation.
//!
//! - **Selection**: conversion and fitness-weighted allele transmission within a deme
//! - **Migration**: exchange of alleles between the two demes

pub mod migration;
pub mod selection;

pub use migration::MigrationModel;
pub use selection::{DemeSelection, DriveFitness};
