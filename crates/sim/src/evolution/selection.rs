//! Within-deme selection with drive conversion.
//!
//! A homing gene drive copies itself onto the homologous chromosome in the
//! germline of heterozygotes. The drive allele carries a fitness cost `s`,
//! expressed fully in drive homozygotes and partially (dominance `h`) in
//! heterozygotes.
//!
//! ## Genotype fitness
//!
//! | genotype | fitness   |
//! |----------|-----------|
//! | `aa`     | 1         |
//! | `Aa`     | 1 - h·s   |
//! | `AA`     | 1 - s     |
//!
//! ## Conversion before selection
//!
//! A fraction `c` of heterozygotes convert to drive homozygotes before
//! selection acts, so they pay the homozygote cost `1 - s` and transmit only
//! drive alleles. The unconverted fraction keeps the heterozygote fitness and
//! transmits each allele with probability ½. Writing
//!
//! - `s_n = ½ (1 - c)(1 - h·s)`  (per-allele weight of unconverted heterozygotes)
//! - `s_c = c (1 - s)`            (weight of converted heterozygotes)
//!
//! the mean fitness and the post-selection drive frequency are
//!
//! ```text
//! w̄     = q²(1 - s) + 2pq(2 s_n + s_c) + p²
//! q'    = [q²(1 - s) + 2pq(s_n + s_c)] / w̄
//! ```
//!
//! With `c = 0` this is the classic selection recurrence with dominance; with
//! `s = 0` it is pure conversion.

use serde::{Deserialize, Serialize};

use crate::base::{Frequency, Genotype};
use crate::errors::ParameterError;

/// Trait for the within-deme part of one generation.
///
/// Implementors map the drive-allele frequency of a deme before selection to
/// its frequency among the gametes that found the next generation.
pub trait DemeSelection {
    /// Mean fitness of a deme with drive-allele frequency `q`.
    fn mean_fitness(&self, q: Frequency) -> f64;

    /// Drive-allele frequency after one round of selection.
    fn select(&self, q: Frequency) -> Frequency;
}

/// Fitness model of a homing gene drive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveFitness {
    /// Fitness cost of the drive allele
    pub s: f64,
    /// Conversion efficiency in heterozygotes
    pub c: f64,
    /// Dominance of the fitness cost
    pub h: f64,
}

impl DriveFitness {
    /// Create a new drive fitness model.
    ///
    /// # Arguments
    /// * `s` - Fitness cost (0.0 to 1.0)
    /// * `c` - Conversion efficiency (0.0 to 1.0)
    /// * `h` - Dominance coefficient (0.0 to 1.0)
    pub fn new(s: f64, c: f64, h: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            s: ParameterError::check_unit("s", s)?,
            c: ParameterError::check_unit("c", c)?,
            h: ParameterError::check_unit("h", h)?,
        })
    }

    /// A neutral allele: no cost, no conversion.
    pub fn neutral() -> Self {
        Self {
            s: 0.0,
            c: 0.0,
            h: 0.0,
        }
    }

    /// Relative fitness of a genotype, ignoring conversion.
    pub fn genotype_fitness(&self, genotype: Genotype) -> f64 {
        match genotype {
            Genotype::WildType => 1.0,
            Genotype::Heterozygote => 1.0 - self.h * self.s,
            Genotype::DriveHomozygote => 1.0 - self.s,
        }
    }

    /// Per-allele weight of heterozygotes that escaped conversion.
    pub fn unconverted_weight(&self) -> f64 {
        0.5 * (1.0 - self.c) * (1.0 - self.h * self.s)
    }

    /// Weight of heterozygotes converted to drive homozygotes.
    pub fn converted_weight(&self) -> f64 {
        self.c * (1.0 - self.s)
    }

    /// Drive-allele share transmitted by a heterozygote (`s_n + s_c`),
    /// before normalising by mean fitness.
    pub fn heterozygote_drive_weight(&self) -> f64 {
        self.unconverted_weight() + self.converted_weight()
    }

    /// Effective heterozygote fitness after conversion (`2 s_n + s_c`).
    pub fn heterozygote_effective_fitness(&self) -> f64 {
        2.0 * self.unconverted_weight() + self.converted_weight()
    }

    /// True when neither cost nor conversion acts on the allele.
    pub fn is_neutral(&self) -> bool {
        self.s == 0.0 && self.c == 0.0
    }
}

impl Default for DriveFitness {
    fn default() -> Self {
        Self::neutral()
    }
}

impl DemeSelection for DriveFitness {
    fn mean_fitness(&self, q: Frequency) -> f64 {
        let q = q.get();
        let p = 1.0 - q;
        q * q * (1.0 - self.s) + 2.0 * p * q * self.heterozygote_effective_fitness() + p * p
    }

    /// Drive-allele frequency after conversion and selection.
    ///
    /// When mean fitness vanishes (only `q = 1` with `s = 1`) there is no
    /// surviving gamete pool to renormalise and the deme keeps its frequency.
    fn select(&self, q: Frequency) -> Frequency {
        let w = self.mean_fitness(q);
        if w <= 0.0 {
            return q;
        }
        let q = q.get();
        let p = 1.0 - q;
        let drive = q * q * (1.0 - self.s) + 2.0 * p * q * self.heterozygote_drive_weight();
        Frequency::new(drive / w)
    }
}
