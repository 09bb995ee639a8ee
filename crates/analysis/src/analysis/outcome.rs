//! Outcome classification
//!
//! Labels the long-run state of the two demes. The outcome of interest for
//! containment is *differential targeting*: the drive persists at high
//! frequency in the target deme (deme 1) while staying low, but present, in
//! the non-target deme (deme 2).

use std::fmt;

use demedrive_sim::simulation::Snapshot;
use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Default distance from the boundaries below which a frequency counts as
/// lost or fixed.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Long-run state of the two demes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Drive lost from both demes.
    Loss,
    /// Drive fixed in both demes.
    Fixation,
    /// `0 < q2 < q1 < 1`: contained in the target deme.
    DifferentialTargeting,
    /// Any other combination (for example fixed in one deme only, or
    /// higher in the non-target deme).
    Polymorphic,
}

impl Outcome {
    /// Classify `(q1, q2)` with the given boundary tolerance.
    pub fn classify(q1: f64, q2: f64, tolerance: f64) -> Result<Self, AnalysisError> {
        if !(0.0..0.5).contains(&tolerance) {
            return Err(AnalysisError::InvalidTolerance(tolerance));
        }
        let lost = |q: f64| q <= tolerance;
        let fixed = |q: f64| q >= 1.0 - tolerance;

        let outcome = if lost(q1) && lost(q2) {
            Outcome::Loss
        } else if fixed(q1) && fixed(q2) {
            Outcome::Fixation
        } else if !lost(q2) && !fixed(q1) && q1 - q2 > tolerance {
            Outcome::DifferentialTargeting
        } else {
            Outcome::Polymorphic
        };
        Ok(outcome)
    }

    /// Classify a snapshot with [`DEFAULT_TOLERANCE`].
    pub fn of(snapshot: &Snapshot) -> Self {
        let (q1, q2, _) = snapshot.as_tuple();
        Self::classify(q1, q2, DEFAULT_TOLERANCE).unwrap_or(Outcome::Polymorphic)
    }

    /// True for the containment outcome.
    pub fn is_differential_targeting(self) -> bool {
        self == Outcome::DifferentialTargeting
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Loss => "loss",
            Outcome::Fixation => "fixation",
            Outcome::DifferentialTargeting => "differential targeting",
            Outcome::Polymorphic => "polymorphic",
        };
        f.write_str(label)
    }
}
