//! Engine state: the two demes and the generation counter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::{Frequency, GenotypeFrequencies};

/// A single island population, described by its drive-allele frequency.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Deme {
    q: Frequency,
}

impl Deme {
    /// Create a deme with drive-allele frequency `q`.
    pub fn new(q: Frequency) -> Self {
        Self { q }
    }

    /// Drive-allele frequency.
    pub fn q(&self) -> Frequency {
        self.q
    }

    /// Wild-type allele frequency `p = 1 - q`.
    pub fn p(&self) -> Frequency {
        self.q.complement()
    }

    /// Hardy–Weinberg genotype frequencies of this deme.
    pub fn genotypes(&self) -> GenotypeFrequencies {
        GenotypeFrequencies::hardy_weinberg(self.q)
    }
}

/// Frequencies in both demes plus the number of generations elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationState {
    pub deme1: Deme,
    pub deme2: Deme,
    pub generation: usize,
}

impl SimulationState {
    /// State at generation zero.
    pub fn initial(q1: Frequency, q2: Frequency) -> Self {
        Self {
            deme1: Deme::new(q1),
            deme2: Deme::new(q2),
            generation: 0,
        }
    }

    /// Read-only view of the state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            q1: self.deme1.q(),
            q2: self.deme2.q(),
            generation: self.generation,
        }
    }
}

/// `(q1, q2, generation)` as handed to renderers and plotters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub q1: Frequency,
    pub q2: Frequency,
    pub generation: usize,
}

impl Snapshot {
    /// Largest per-deme change from `previous` to `self`.
    pub fn max_change(&self, previous: &Snapshot) -> f64 {
        self.q1.distance(previous.q1).max(self.q2.distance(previous.q2))
    }

    /// Plain tuple form.
    pub fn as_tuple(&self) -> (f64, f64, usize) {
        (self.q1.get(), self.q2.get(), self.generation)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gen: {}   q1={:.3}   q2={:.3}",
            self.generation, self.q1, self.q2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SimulationState::initial(Frequency::new(0.7), Frequency::new(0.1));
        assert_eq!(state.generation, 0);
        assert_eq!(state.deme1.q(), Frequency::new(0.7));
        assert!((state.deme2.p().get() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_deme_genotypes() {
        let deme = Deme::new(Frequency::new(0.5));
        let g = deme.genotypes();
        assert!((g.heterozygote.get() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_max_change() {
        let a = Snapshot {
            q1: Frequency::new(0.5),
            q2: Frequency::new(0.1),
            generation: 0,
        };
        let b = Snapshot {
            q1: Frequency::new(0.52),
            q2: Frequency::new(0.05),
            generation: 1,
        };
        assert!((b.max_change(&a) - 0.05).abs() < 1e-12);
        assert_eq!(b.as_tuple(), (0.52, 0.05, 1));
    }

    #[test]
    fn test_snapshot_display() {
        let s = Snapshot {
            q1: Frequency::new(0.7),
            q2: Frequency::new(0.1),
            generation: 3,
        };
        assert_eq!(s.to_string(), "Gen: 3   q1=0.700   q2=0.100");
    }
}
