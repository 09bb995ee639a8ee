//! Critical migration threshold
//!
//! For a given drive there is a migration rate `m*` above which the drive can
//! no longer be held in the target deme: either it swamps the non-target deme
//! or it is washed out of the target deme. [`critical_migration`] locates
//! `m*` by bisection, assuming differential targeting holds for all `m`
//! below it and fails above it.

use demedrive_sim::evolution::DriveFitness;
use demedrive_sim::simulation::{LifeCycle, SimulationParameters};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::equilibrium::{ConvergenceCriteria, equilibrium};
use crate::errors::AnalysisError;

/// Settings for the bisection in [`critical_migration`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSearch {
    /// Lower end of the migration interval
    pub lower: f64,
    /// Upper end of the migration interval
    pub upper: f64,
    /// Stop once the interval is no wider than this
    pub precision: f64,
    /// Convergence settings for each equilibrium run
    pub criteria: ConvergenceCriteria,
    /// Phase order used by each equilibrium run
    pub life_cycle: LifeCycle,
}

impl ThresholdSearch {
    /// Return a copy with a different precision.
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Return a copy searching `[lower, upper]`.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        let in_unit = |x: f64| (0.0..=1.0).contains(&x);
        if !in_unit(self.lower) || !in_unit(self.upper) || self.lower >= self.upper {
            return Err(AnalysisError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(AnalysisError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

impl Default for ThresholdSearch {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 0.5,
            precision: 1e-3,
            criteria: ConvergenceCriteria::default(),
            life_cycle: LifeCycle::default(),
        }
    }
}

/// Estimate the largest migration rate that still gives differential
/// targeting when starting from `(q1_0, q2_0)`.
///
/// Returns the lower end of the final bracket, so the result itself gives
/// differential targeting unless the search never found such a rate, in
/// which case it is `search.lower`.
pub fn critical_migration(
    drive: DriveFitness,
    alpha: f64,
    q1_0: f64,
    q2_0: f64,
    search: &ThresholdSearch,
) -> Result<f64, AnalysisError> {
    search.validate()?;

    let base = SimulationParameters {
        s: drive.s,
        c: drive.c,
        h: drive.h,
        m: search.lower,
        alpha,
        q1_0,
        q2_0,
        life_cycle: search.life_cycle,
    };
    base.validate()?;

    // alpha * m must stay <= 1
    let mut high = if alpha > 1.0 {
        search.upper.min(1.0 / alpha)
    } else {
        search.upper
    };
    let mut low = search.lower;
    if high <= low {
        return Err(AnalysisError::InvalidBounds {
            lower: low,
            upper: high,
        });
    }

    info!(
        "Searching critical migration for s={}, c={}, h={}, alpha={alpha} on [{low}, {high}]",
        drive.s, drive.c, drive.h
    );

    let mut iterations = 0;
    while high - low > search.precision {
        let mid = 0.5 * (low + high);
        let report = equilibrium(base.with_migration(mid)?, &search.criteria)?;
        let contained = report.outcome.is_differential_targeting();
        debug!(
            "m={mid:.6}: q1={:.6}, q2={:.6} ({})",
            report.equilibrium.q1, report.equilibrium.q2, report.outcome
        );
        if contained {
            low = mid;
        } else {
            high = mid;
        }
        iterations += 1;
    }

    info!("Critical migration m* = {low:.4} after {iterations} bisection steps");
    Ok(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search() {
        let search = ThresholdSearch::default();
        assert_eq!((search.lower, search.upper, search.precision), (0.0, 0.5, 1e-3));
    }

    #[test]
    fn test_rejects_bad_bounds_and_precision() {
        let drive = DriveFitness::new(0.5, 0.6, 0.3).unwrap();
        let bad_bounds = ThresholdSearch::default().with_bounds(0.4, 0.1);
        assert!(matches!(
            critical_migration(drive, 1.0, 0.7, 0.1, &bad_bounds),
            Err(AnalysisError::InvalidBounds { .. })
        ));
        let bad_precision = ThresholdSearch::default().with_precision(0.0);
        assert!(matches!(
            critical_migration(drive, 1.0, 0.7, 0.1, &bad_precision),
            Err(AnalysisError::InvalidPrecision(_))
        ));
    }

    #[test]
    fn test_rejects_bad_initial_frequency() {
        let drive = DriveFitness::new(0.5, 0.6, 0.3).unwrap();
        assert!(matches!(
            critical_migration(drive, 1.0, 1.7, 0.1, &ThresholdSearch::default()),
            Err(AnalysisError::Parameters(_))
        ));
    }

    #[test]
    fn test_finer_precision_narrows_bracket() {
        // bisection replays the same midpoints, so the fine bracket nests
        // inside the coarse one
        let drive = DriveFitness::new(0.5, 0.6, 0.3).unwrap();
        let coarse = ThresholdSearch::default().with_precision(0.01);
        let fine = ThresholdSearch::default().with_precision(0.001);
        let m_coarse = critical_migration(drive, 1.0, 0.7, 0.1, &coarse).unwrap();
        let m_fine = critical_migration(drive, 1.0, 0.7, 0.1, &fine).unwrap();
        assert!(m_coarse <= m_fine);
        assert!(m_fine - m_coarse <= 0.01);
    }

    #[test]
    fn test_result_is_contained() {
        let drive = DriveFitness::new(0.5, 0.6, 0.3).unwrap();
        let search = ThresholdSearch::default().with_precision(0.005);
        let m_star = critical_migration(drive, 1.0, 0.7, 0.1, &search).unwrap();
        assert!(m_star > 0.0, "expected a containing rate, got {m_star}");
        let params = SimulationParameters::new(0.5, 0.6, 0.3, m_star, 0.7, 0.1).unwrap();
        let report = equilibrium(params, &search.criteria).unwrap();
        assert!(report.outcome.is_differential_targeting());
    }

    #[test]
    fn test_never_contained_returns_lower_bound() {
        // no cost and full conversion: the drive fixes everywhere
        let drive = DriveFitness::new(0.0, 1.0, 0.0).unwrap();
        let search = ThresholdSearch::default().with_precision(0.01);
        let m_star = critical_migration(drive, 1.0, 0.7, 0.1, &search).unwrap();
        assert_eq!(m_star, 0.0);
    }

    #[test]
    fn test_large_alpha_caps_upper_bound() {
        let drive = DriveFitness::new(0.5, 0.6, 0.3).unwrap();
        let search = ThresholdSearch::default().with_precision(0.01);
        let m_star = critical_migration(drive, 4.0, 0.7, 0.1, &search).unwrap();
        assert!(m_star <= 0.25);
    }
}
