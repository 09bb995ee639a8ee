//! Simulation parameters and presets.
//!
//! This module provides the parameter snapshot shared by both demes: the
//! drive's fitness cost, conversion efficiency and dominance, the migration
//! rates, the initial drive frequencies, and the order of the two phases
//! inside a generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base::Frequency;
use crate::errors::ParameterError;
use crate::evolution::{DriveFitness, MigrationModel};

/// Order of selection and migration within one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifeCycle {
    /// Conversion and selection within each deme, then migration.
    #[default]
    SelectionThenMigration,
    /// Migration first, then conversion and selection (the census order of
    /// Greenbaum et al. 2021).
    MigrationThenSelection,
}

impl fmt::Display for LifeCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectionThenMigration => f.write_str("selection-then-migration"),
            Self::MigrationThenSelection => f.write_str("migration-then-selection"),
        }
    }
}

impl FromStr for LifeCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selection-then-migration" | "selection-first" => Ok(Self::SelectionThenMigration),
            "migration-then-selection" | "migration-first" => Ok(Self::MigrationThenSelection),
            other => Err(format!("Unknown life cycle: {other}")),
        }
    }
}

/// Parameter snapshot for a two-deme gene drive simulation.
///
/// The values are plain numbers so that a driver can copy them straight from
/// its controls. Use [`SimulationParameters::new`] to validate them or
/// [`SimulationParameters::clamped`] to force them into their domains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Fitness cost of the drive allele (0.0 to 1.0)
    pub s: f64,
    /// Conversion efficiency in heterozygotes (0.0 to 1.0)
    pub c: f64,
    /// Dominance of the fitness cost (0.0 to 1.0)
    pub h: f64,
    /// Migration rate from deme 2 into deme 1 (0.0 to 1.0)
    pub m: f64,
    /// Asymmetry ratio; deme 1 -> deme 2 migration is `alpha * m`
    pub alpha: f64,
    /// Initial drive frequency in deme 1
    pub q1_0: f64,
    /// Initial drive frequency in deme 2
    pub q2_0: f64,
    /// Phase order within a generation
    pub life_cycle: LifeCycle,
}

impl SimulationParameters {
    /// Create a validated parameter set with symmetric migration.
    pub fn new(
        s: f64,
        c: f64,
        h: f64,
        m: f64,
        q1_0: f64,
        q2_0: f64,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            s,
            c,
            h,
            m,
            alpha: 1.0,
            q1_0,
            q2_0,
            life_cycle: LifeCycle::default(),
        };
        params.validate()?;
        Ok(params)
    }

    /// Create a parameter set by clamping every value into its domain.
    ///
    /// This mirrors what a slider does: the value can never leave its range.
    pub fn clamped(s: f64, c: f64, h: f64, m: f64, q1_0: f64, q2_0: f64) -> Self {
        Self {
            s: clamp_unit(s),
            c: clamp_unit(c),
            h: clamp_unit(h),
            m: clamp_unit(m),
            alpha: 1.0,
            q1_0: clamp_unit(q1_0),
            q2_0: clamp_unit(q2_0),
            life_cycle: LifeCycle::default(),
        }
    }

    /// Return a copy with a different migration asymmetry.
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self, ParameterError> {
        self.alpha = alpha;
        self.validate()?;
        Ok(self)
    }

    /// Return a copy with a different migration rate.
    pub fn with_migration(mut self, m: f64) -> Result<Self, ParameterError> {
        self.m = m;
        self.validate()?;
        Ok(self)
    }

    /// Return a copy with different initial frequencies.
    pub fn with_initial(mut self, q1_0: f64, q2_0: f64) -> Result<Self, ParameterError> {
        self.q1_0 = q1_0;
        self.q2_0 = q2_0;
        self.validate()?;
        Ok(self)
    }

    /// Return a copy with a different phase order.
    pub fn with_life_cycle(mut self, life_cycle: LifeCycle) -> Self {
        self.life_cycle = life_cycle;
        self
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> Result<(), ParameterError> {
        DriveFitness::new(self.s, self.c, self.h)?;
        MigrationModel::new(self.m, self.alpha)?;
        ParameterError::check_unit("q1_0", self.q1_0)?;
        ParameterError::check_unit("q2_0", self.q2_0)?;
        Ok(())
    }

    /// The within-deme fitness model.
    pub fn drive(&self) -> DriveFitness {
        DriveFitness {
            s: self.s,
            c: self.c,
            h: self.h,
        }
    }

    /// The between-deme migration model.
    pub fn migration(&self) -> MigrationModel {
        MigrationModel {
            m: self.m,
            alpha: self.alpha,
        }
    }

    /// Initial drive frequencies `(q1_0, q2_0)`.
    pub fn initial(&self) -> (Frequency, Frequency) {
        (Frequency::new(self.q1_0), Frequency::new(self.q2_0))
    }
}

impl Default for SimulationParameters {
    /// The starting point of the interactive simulator.
    fn default() -> Self {
        Preset::InteractiveDefault.parameters()
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Named parameter sets from the gene drive containment literature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Starting values of the interactive simulator.
    InteractiveDefault,
    /// Configuration B2 of Greenbaum et al. (2021), Fig. 2.
    B2,
    /// Full-conversion drive in a malaria vector, just below its threshold.
    MalariaVector,
    /// Dominant drive with partial conversion in a rodent.
    RodentDominant,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 4] = [
        Preset::InteractiveDefault,
        Preset::B2,
        Preset::MalariaVector,
        Preset::RodentDominant,
    ];

    /// Short identifier used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Preset::InteractiveDefault => "interactive-default",
            Preset::B2 => "b2",
            Preset::MalariaVector => "malaria-vector",
            Preset::RodentDominant => "rodent-dominant",
        }
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Preset::InteractiveDefault => "Interactive simulator start (s=0.5, c=0.8, h=0.3, m=0.05)",
            Preset::B2 => "Configuration B2 (s=0.5, c=0.6, h=0.3, m=0.02)",
            Preset::MalariaVector => "Malaria vector, full conversion (s=0.73, c=1.0, m=0.09)",
            Preset::RodentDominant => "Rodent, dominant drive (s=0.6, c=0.72, h=1.0, m=0.07)",
        }
    }

    /// The parameter set.
    pub fn parameters(self) -> SimulationParameters {
        let (s, c, h, m, q1_0, q2_0) = match self {
            Preset::InteractiveDefault => (0.5, 0.8, 0.3, 0.05, 0.7, 0.1),
            Preset::B2 => (0.5, 0.6, 0.3, 0.02, 0.5, 0.3),
            Preset::MalariaVector => (0.73, 1.0, 0.5, 0.09, 0.65, 0.1),
            Preset::RodentDominant => (0.6, 0.72, 1.0, 0.07, 0.7, 0.1),
        };
        SimulationParameters {
            s,
            c,
            h,
            m,
            alpha: 1.0,
            q1_0,
            q2_0,
            life_cycle: LifeCycle::default(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("Unknown preset: {s}"))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
