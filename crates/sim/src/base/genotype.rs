//! Genotypes at the drive locus and their frequencies.
//!
//! With a single biallelic locus there are three diploid genotypes: wild-type
//! homozygotes (`aa`), heterozygotes (`Aa`) and drive homozygotes (`AA`).
//! Under random mating the genotype frequencies follow Hardy–Weinberg
//! proportions of the drive-allele frequency `q`:
//!
//! - `AA = q²`
//! - `Aa = 2pq`
//! - `aa = p²`  (with `p = 1 - q`)
//!
//! Renderers consume these either as proportions or as an integer sample of a
//! finite number of individuals ([`GenotypeCounts`]).

use std::fmt;

use rand::Rng;
use rand_distr::{Binomial, Distribution};
use serde::{Deserialize, Serialize};

use super::Frequency;

/// Diploid genotype at the drive locus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genotype {
    /// `aa`: two wild-type alleles.
    WildType,
    /// `Aa`: one drive and one wild-type allele.
    Heterozygote,
    /// `AA`: two drive alleles.
    DriveHomozygote,
}

impl Genotype {
    /// All genotypes, ordered by drive-allele dosage.
    pub const ALL: [Genotype; 3] = [
        Genotype::WildType,
        Genotype::Heterozygote,
        Genotype::DriveHomozygote,
    ];

    /// Number of drive alleles carried (0, 1 or 2).
    pub fn drive_dosage(self) -> u8 {
        match self {
            Genotype::WildType => 0,
            Genotype::Heterozygote => 1,
            Genotype::DriveHomozygote => 2,
        }
    }

    /// Conventional two-letter label (`aa`, `Aa`, `AA`).
    pub fn label(self) -> &'static str {
        match self {
            Genotype::WildType => "aa",
            Genotype::Heterozygote => "Aa",
            Genotype::DriveHomozygote => "AA",
        }
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hardy–Weinberg genotype frequencies of one deme.
///
/// The three components always sum to one (up to rounding).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenotypeFrequencies {
    pub wild_type: Frequency,
    pub heterozygote: Frequency,
    pub drive_homozygote: Frequency,
}

impl GenotypeFrequencies {
    /// Genotype frequencies under random mating for drive-allele frequency `q`.
    pub fn hardy_weinberg(q: Frequency) -> Self {
        let q = q.get();
        let p = 1.0 - q;
        Self {
            wild_type: Frequency::new(p * p),
            heterozygote: Frequency::new(2.0 * p * q),
            drive_homozygote: Frequency::new(q * q),
        }
    }

    /// Frequency of a single genotype.
    pub fn get(&self, genotype: Genotype) -> Frequency {
        match genotype {
            Genotype::WildType => self.wild_type,
            Genotype::Heterozygote => self.heterozygote,
            Genotype::DriveHomozygote => self.drive_homozygote,
        }
    }

    /// Sum of the three components (1.0 for a valid triple).
    pub fn total(&self) -> f64 {
        self.wild_type.get() + self.heterozygote.get() + self.drive_homozygote.get()
    }

    /// Drive-allele frequency implied by these genotype frequencies.
    pub fn drive_allele(&self) -> Frequency {
        Frequency::new(self.drive_homozygote.get() + 0.5 * self.heterozygote.get())
    }
}

/// Integer genotype counts for a finite sample of individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenotypeCounts {
    pub wild_type: u64,
    pub heterozygote: u64,
    pub drive_homozygote: u64,
}

impl GenotypeCounts {
    /// Draw `n` individuals multinomially from `frequencies`.
    ///
    /// The multinomial is sampled as a chain of conditional binomials:
    /// drive homozygotes first, then heterozygotes among the remainder, the
    /// rest being wild type.
    pub fn sample<R: Rng + ?Sized>(
        frequencies: &GenotypeFrequencies,
        n: u64,
        rng: &mut R,
    ) -> Self {
        let p_hom = frequencies.drive_homozygote.get();
        let drive_homozygote = binomial(n, p_hom, rng);

        let remaining = n - drive_homozygote;
        let rest = 1.0 - p_hom;
        let p_het = if rest > 0.0 {
            frequencies.heterozygote.get() / rest
        } else {
            0.0
        };
        let heterozygote = binomial(remaining, p_het, rng);

        Self {
            wild_type: remaining - heterozygote,
            heterozygote,
            drive_homozygote,
        }
    }

    /// Count of a single genotype.
    pub fn get(&self, genotype: Genotype) -> u64 {
        match genotype {
            Genotype::WildType => self.wild_type,
            Genotype::Heterozygote => self.heterozygote,
            Genotype::DriveHomozygote => self.drive_homozygote,
        }
    }

    /// Total number of individuals sampled.
    pub fn total(&self) -> u64 {
        self.wild_type + self.heterozygote + self.drive_homozygote
    }
}

fn binomial<R: Rng + ?Sized>(n: u64, p: f64, rng: &mut R) -> u64 {
    if n == 0 || p <= 0.0 {
        return 0;
    }
    match Binomial::new(n, p.min(1.0)) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0,
    }
}
