use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use demedrive_sim::simulation::{
    Configuration, EngineBuilder, LifeCycle, Preset, SimulationParameters,
};
use std::path::PathBuf;

/// Model parameters shared by every command that builds an engine.
///
/// Values are resolved in order: configuration file, then `--preset`, then
/// the individual flags.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Named parameter set (see `demedrive presets`)
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Fitness cost of the drive allele (0.0 to 1.0)
    #[arg(short = 's', long = "fitness-cost")]
    pub s: Option<f64>,

    /// Conversion efficiency in heterozygotes (0.0 to 1.0)
    #[arg(short = 'c', long = "conversion")]
    pub c: Option<f64>,

    /// Dominance of the fitness cost (0.0 to 1.0)
    #[arg(short = 'H', long = "dominance")]
    pub h: Option<f64>,

    /// Migration rate from deme 2 into deme 1 (0.0 to 1.0)
    #[arg(short = 'm', long = "migration")]
    pub m: Option<f64>,

    /// Migration asymmetry; deme 1 -> deme 2 migration is alpha * m
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Initial drive frequency in deme 1 (target)
    #[arg(long)]
    pub q1: Option<f64>,

    /// Initial drive frequency in deme 2 (non-target)
    #[arg(long)]
    pub q2: Option<f64>,

    /// Order of selection and migration within a generation
    #[arg(long)]
    pub life_cycle: Option<LifeCycle>,
}

impl ParamArgs {
    /// Apply the preset and flag overrides to `base` and validate the result.
    pub fn resolve(&self, base: SimulationParameters) -> Result<SimulationParameters> {
        let base = self.preset.map(Preset::parameters).unwrap_or(base);
        let mut builder = EngineBuilder::from_parameters(base);
        if let Some(s) = self.s {
            builder = builder.fitness_cost(s);
        }
        if let Some(c) = self.c {
            builder = builder.conversion(c);
        }
        if let Some(h) = self.h {
            builder = builder.dominance(h);
        }
        if let Some(m) = self.m {
            builder = builder.migration(m);
        }
        if let Some(alpha) = self.alpha {
            builder = builder.alpha(alpha);
        }
        if self.q1.is_some() || self.q2.is_some() {
            builder = builder.initial_frequencies(
                self.q1.unwrap_or(base.q1_0),
                self.q2.unwrap_or(base.q2_0),
            );
        }
        if let Some(life_cycle) = self.life_cycle {
            builder = builder.life_cycle(life_cycle);
        }
        builder.parameters().context("Invalid simulation parameters")
    }
}

/// Parameters plus an optional configuration file to start from.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON configuration written by `demedrive init`
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub params: ParamArgs,
}

impl ConfigArgs {
    /// Load the configuration file (or defaults) and apply the overrides.
    pub fn load(&self) -> Result<Configuration> {
        let mut config = match &self.config {
            Some(path) => Configuration::load(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => Configuration::default(),
        };
        config.parameters = self.params.resolve(config.parameters)?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration file
    #[arg(short, long, default_value = crate::defaults::CONFIG_FILE)]
    pub output: PathBuf,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Number of generations for `run`
    #[arg(short = 'g', long, default_value_t = crate::defaults::GENERATIONS)]
    pub generations: usize,

    /// Keep only the last W generations of the trajectory
    #[arg(long)]
    pub window: Option<usize>,

    /// Random seed for genotype samples
    #[arg(long)]
    pub seed: Option<u64>,
}

/// How `run` prints its trajectory.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// `generation,q1,q2`
    Csv,
    /// JSON array of snapshots
    Json,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: ConfigArgs,

    /// Number of generations (default: from configuration)
    #[arg(short = 'g', long)]
    pub generations: Option<usize>,

    /// Stop once neither deme changes by more than 1e-6 in a generation
    #[arg(long)]
    pub stop_on_converge: bool,

    /// Keep only the last W generations (default: from configuration)
    #[arg(long)]
    pub window: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Draw N individuals per deme from the final genotype frequencies
    /// (default N: from configuration)
    #[arg(long, value_name = "N", num_args = 0..=1)]
    pub sample: Option<Option<u64>>,

    /// Random seed for the genotype sample (default: from configuration)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Args, Debug)]
pub struct EquilibriumArgs {
    #[command(flatten)]
    pub source: ConfigArgs,

    /// Step limit (default: from configuration)
    #[arg(long)]
    pub max_generations: Option<usize>,

    /// Convergence threshold (default: from configuration)
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Args, Debug)]
pub struct ThresholdArgs {
    #[command(flatten)]
    pub source: ConfigArgs,

    /// Width of the final migration bracket
    #[arg(long, default_value_t = crate::defaults::THRESHOLD_PRECISION)]
    pub precision: f64,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub source: ConfigArgs,

    /// Initial conditions as q1:q2 (repeatable)
    #[arg(long = "initial", value_parser = parse_pair, num_args = 1..)]
    pub initial: Vec<(f64, f64)>,

    /// Compare migration asymmetries instead of initial conditions
    /// (without values: 0.1 0.5 1 2 10)
    #[arg(long, num_args = 0.., conflicts_with = "initial")]
    pub alphas: Option<Vec<f64>>,

    /// Generations per trajectory when comparing asymmetries
    #[arg(short = 'g', long, default_value_t = crate::defaults::GENERATIONS)]
    pub generations: usize,
}

/// Parse a `q1:q2` pair.
pub fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(':')
        .ok_or_else(|| format!("Expected q1:q2, got '{s}'"))?;
    let q1 = a
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("Invalid q1 '{a}': {e}"))?;
    let q2 = b
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("Invalid q2 '{b}': {e}"))?;
    Ok((q1, q2))
}
