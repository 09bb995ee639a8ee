use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A frequency constrained to the range [0.0, 1.0].
///
/// Allele and genotype frequencies in the recurrence are always proportions of
/// a deme. Constructing through [`Frequency::new`] clamps the value so that
/// floating-point overshoot at the boundaries cannot leak out of the unit
/// interval.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frequency(f64);

impl Frequency {
    /// Frequency of an absent allele.
    pub const ZERO: Self = Self(0.0);
    /// Frequency of a fixed allele.
    pub const ONE: Self = Self(1.0);

    /// Creates a new Frequency, clamping the input to [0.0, 1.0].
    ///
    /// NaN is not a valid proportion and is mapped to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the inner f64 value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// The frequency of the complementary allele, `1 - q`.
    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }

    /// True when the allele is absent (`q == 0`).
    pub fn is_lost(self) -> bool {
        self.0 == 0.0
    }

    /// True when the allele is fixed (`q == 1`).
    pub fn is_fixed(self) -> bool {
        self.0 == 1.0
    }

    /// Absolute difference between two frequencies.
    pub fn distance(self, other: Self) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl From<Frequency> for f64 {
    fn from(frequency: Frequency) -> Self {
        frequency.0
    }
}

impl From<f64> for Frequency {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Add for Frequency {
    type Output = Self;

    /// Adds two frequencies, clamping the result to [0.0, 1.0].
    fn add(self, rhs: Self) -> Self::Output {
        Frequency::new(self.0 + rhs.0)
    }
}

impl Mul for Frequency {
    type Output = Self;

    /// Product of two proportions (always stays inside the unit interval).
    fn mul(self, rhs: Self) -> Self::Output {
        Frequency::new(self.0 * rhs.0)
    }
}
