//! Base types for frequency and genotype representation.
//!
//! This module provides the foundational types shared by the recurrence:
//! clamped frequencies and the three genotypes of the drive locus.

mod frequency;
mod genotype;

pub use frequency::Frequency;
pub use genotype::{Genotype, GenotypeCounts, GenotypeFrequencies};
