//! Migration between the two demes.
//!
//! Deme 1 receives migrants from deme 2 at rate `m`; deme 2 receives migrants
//! from deme 1 at rate `α·m`. Following Greenbaum et al. (2021) the resulting
//! frequencies are renormalised by the net change in deme size:
//!
//! ```text
//! q̃₁ = [(1 - α·m) q₁ + m q₂] / (1 - α·m + m)
//! q̃₂ = [(1 - m) q₂ + α·m q₁] / (1 - m + α·m)
//! ```
//!
//! With `α = 1` both denominators are one and this is the symmetric exchange
//! `q̃₁ = (1 - m) q₁ + m q₂`, `q̃₂ = (1 - m) q₂ + m q₁`.

use serde::{Deserialize, Serialize};

use crate::base::Frequency;
use crate::errors::ParameterError;

/// Two-deme migration model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MigrationModel {
    /// Migration rate from deme 2 into deme 1
    pub m: f64,
    /// Ratio of the deme 1 -> deme 2 rate to `m`
    pub alpha: f64,
}

impl MigrationModel {
    /// Create an asymmetric migration model.
    pub fn new(m: f64, alpha: f64) -> Result<Self, ParameterError> {
        let m = ParameterError::check_unit("m", m)?;
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(ParameterError::InvalidAlpha(alpha));
        }
        if alpha * m > 1.0 {
            return Err(ParameterError::MigrationOverflow(alpha * m));
        }
        Ok(Self { m, alpha })
    }

    /// Symmetric two-way exchange at rate `m`.
    pub fn symmetric(m: f64) -> Result<Self, ParameterError> {
        Self::new(m, 1.0)
    }

    /// Isolated demes.
    pub fn none() -> Self {
        Self { m: 0.0, alpha: 1.0 }
    }

    /// Rate at which deme 1 receives migrants from deme 2.
    pub fn rate_to_deme1(&self) -> f64 {
        self.m
    }

    /// Rate at which deme 2 receives migrants from deme 1.
    pub fn rate_to_deme2(&self) -> f64 {
        self.alpha * self.m
    }

    /// True when no migrants move in either direction.
    pub fn is_isolated(&self) -> bool {
        self.rate_to_deme1() == 0.0 && self.rate_to_deme2() == 0.0
    }

    /// Apply one round of migration to the pair of drive frequencies.
    ///
    /// A deme whose normalising denominator is zero (every resident left and
    /// no migrant arrived) keeps its frequency.
    pub fn migrate(&self, q1: Frequency, q2: Frequency) -> (Frequency, Frequency) {
        let to1 = self.rate_to_deme1();
        let to2 = self.rate_to_deme2();
        let (x1, x2) = (q1.get(), q2.get());

        let d1 = 1.0 - to2 + to1;
        let d2 = 1.0 - to1 + to2;

        let next1 = if d1 > 0.0 {
            Frequency::new(((1.0 - to2) * x1 + to1 * x2) / d1)
        } else {
            q1
        };
        let next2 = if d2 > 0.0 {
            Frequency::new(((1.0 - to1) * x2 + to2 * x1) / d2)
        } else {
            q2
        };
        (next1, next2)
    }
}

impl Default for MigrationModel {
    fn default() -> Self {
        Self::none()
    }
}
