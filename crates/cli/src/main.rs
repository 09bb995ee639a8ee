mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use args::{EquilibriumArgs, InitArgs, RunArgs, SweepArgs, ThresholdArgs};
use commands::{equilibrium, init, presets, run, sweep, threshold};

/// demedrive: A Two-Deme Gene Drive Simulator
///
/// This tool follows the frequency of a homing gene drive allele in a target
/// population and a connected non-target population, generation by
/// generation, to explore when a drive stays contained.
#[derive(Parser, Debug)]
#[command(name = "demedrive")]
#[command(author, version, about = "Simulates gene drive spread between two connected populations", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel sweeps
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a parameter configuration file.
    ///
    /// Collects drive, migration and initial-frequency parameters into a JSON
    /// file that the other commands accept through --config.
    Init(Box<InitArgs>),

    /// Run the simulation and print the trajectory.
    ///
    /// Steps both demes for a fixed number of generations, optionally
    /// stopping early once the frequencies settle.
    Run(Box<RunArgs>),

    /// Iterate to equilibrium and classify the outcome.
    Equilibrium(Box<EquilibriumArgs>),

    /// Estimate the critical migration rate m* above which the drive escapes.
    Threshold(Box<ThresholdArgs>),

    /// Compare equilibria across initial conditions or migration asymmetries.
    Sweep(Box<SweepArgs>),

    /// List the built-in parameter presets.
    Presets,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Init(args) => {
            init::init_configuration(&args)?;
        }
        Commands::Run(args) => {
            run::run_simulation(&args)?;
        }
        Commands::Equilibrium(args) => {
            equilibrium::find_equilibrium(&args)?;
        }
        Commands::Threshold(args) => {
            threshold::find_threshold(&args)?;
        }
        Commands::Sweep(args) => {
            sweep::run_sweep(&args)?;
        }
        Commands::Presets => {
            presets::list_presets()?;
        }
    }

    Ok(())
}
