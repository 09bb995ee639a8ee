use anyhow::{Context, Result};
use demedrive_analysis::Outcome;
use demedrive_analysis::analysis::fst;
use demedrive_sim::simulation::{RecurrenceEngine, Trajectory};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::args::{OutputFormat, RunArgs};
use crate::defaults::STOP_THRESHOLD;
use crate::printing::{print_configuration, print_genotype_sample, print_header};

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    let mut config = args.source.load()?;
    if let Some(generations) = args.generations {
        config.execution.generations = generations;
    }
    if args.window.is_some() {
        config.execution.window = args.window;
    }
    if args.seed.is_some() {
        config.execution.seed = args.seed;
    }
    if let Some(Some(n)) = args.sample {
        config.execution.sample_size = n;
    }

    let table = args.format == OutputFormat::Table;
    if table {
        print_header("Running Simulation");
        print_configuration(&config);
    }

    let generations = config.execution.generations;
    let mut engine = RecurrenceEngine::new(config.parameters);
    let mut trajectory = match config.execution.window {
        Some(window) => Trajectory::bounded(window),
        None => Trajectory::new(),
    };
    trajectory.push(engine.current());

    let pb = if args.no_progress {
        None
    } else {
        let pb = ProgressBar::new(generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    };

    let mut converged = false;
    for _ in 0..generations {
        let previous = engine.current();
        engine.step();
        let current = engine.current();
        trajectory.push(current);

        if let Some(pb) = &pb {
            pb.inc(1);
        }

        if args.stop_on_converge && current.max_change(&previous) < STOP_THRESHOLD {
            debug!("Stopping at generation {}: change below {STOP_THRESHOLD}", current.generation);
            converged = true;
            break;
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match args.format {
        OutputFormat::Table => print_table(&trajectory),
        OutputFormat::Csv => print!("{}", to_csv(&trajectory)),
        OutputFormat::Json => println!("{}", to_json(&trajectory)?),
    }

    let last = engine.current();
    if table {
        println!("\n✓ Simulation complete!");
        println!("  Final: {last}");
        if converged {
            println!("  Stopped early: both demes changed by less than {STOP_THRESHOLD}");
        }
        println!("  Outcome: {}", Outcome::of(&last));
        println!("  FST: {:.4}", fst(last.q1.get(), last.q2.get()));
    }

    if args.sample.is_some() {
        let mut rng = match config.execution.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_os_rng(),
        };
        let counts = engine.sample_genotypes(config.execution.sample_size, &mut rng);
        if table {
            print_genotype_sample(&counts);
        } else {
            // stdout carries only the trajectory in machine-readable formats
            for (i, deme) in counts.iter().enumerate() {
                eprintln!(
                    "deme{}: aa={} Aa={} AA={}",
                    i + 1,
                    deme.wild_type,
                    deme.heterozygote,
                    deme.drive_homozygote
                );
            }
        }
    }

    Ok(())
}

fn print_table(trajectory: &Trajectory) {
    println!("\n📈 Trajectory");
    println!("{:>10}  {:>10}  {:>10}", "Generation", "q1", "q2");
    for snap in trajectory {
        println!(
            "{:>10}  {:>10.6}  {:>10.6}",
            snap.generation,
            snap.q1.get(),
            snap.q2.get()
        );
    }
}

pub fn to_csv(trajectory: &Trajectory) -> String {
    let mut out = String::from("generation,q1,q2\n");
    for snap in trajectory {
        out.push_str(&format!("{},{},{}\n", snap.generation, snap.q1, snap.q2));
    }
    out
}

pub fn to_json(trajectory: &Trajectory) -> Result<String> {
    let points: Vec<_> = trajectory.iter().collect();
    serde_json::to_string_pretty(&points).context("Failed to serialize trajectory")
}
