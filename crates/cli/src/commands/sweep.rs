use anyhow::{Context, Result};
use demedrive_analysis::analysis::{DEFAULT_ALPHAS, snapshot_fst};
use demedrive_analysis::{ConvergenceCriteria, asymmetry_sweep, initial_condition_sweep};
use demedrive_sim::simulation::SimulationParameters;

use crate::args::SweepArgs;
use crate::defaults::SWEEP_INITIAL;
use crate::printing::{print_header, print_parameters};

pub fn run_sweep(args: &SweepArgs) -> Result<()> {
    let config = args.source.load()?;
    let params = config.parameters;

    print_header("Parameter Sweep");
    print_parameters(&params);

    if let Some(alphas) = &args.alphas {
        let alphas = if alphas.is_empty() {
            DEFAULT_ALPHAS.to_vec()
        } else {
            alphas.clone()
        };
        return sweep_asymmetry(params, &alphas, args.generations);
    }

    let initial: Vec<(f64, f64)> = if args.initial.is_empty() {
        SWEEP_INITIAL.to_vec()
    } else {
        args.initial.clone()
    };
    let criteria = ConvergenceCriteria::new(
        config.execution.max_generations,
        config.execution.convergence_threshold,
    );

    let reports = initial_condition_sweep(params, &initial, &criteria)
        .context("Initial condition sweep failed")?;

    println!("\n📈 Equilibria by initial condition");
    println!(
        "{:>8} {:>8}  {:>10} {:>10}  {:>6}  {}",
        "q1_0", "q2_0", "q1", "q2", "gens", "outcome"
    );
    for report in &reports {
        let (q1, q2) = report.frequencies();
        println!(
            "{:>8.3} {:>8.3}  {:>10.6} {:>10.6}  {:>6}  {}",
            report.initial.q1.get(),
            report.initial.q2.get(),
            q1,
            q2,
            report.generations,
            report.outcome
        );
    }

    Ok(())
}

fn sweep_asymmetry(params: SimulationParameters, alphas: &[f64], generations: usize) -> Result<()> {
    let runs =
        asymmetry_sweep(params, alphas, generations).context("Asymmetry sweep failed")?;

    println!("\n📈 Frequencies after {generations} generations by migration asymmetry");
    println!("{:>8}  {:>10} {:>10}  {:>6}", "alpha", "q1", "q2", "FST");
    for run in &runs {
        if let Some(last) = run.trajectory.last() {
            println!(
                "{:>8}  {:>10.6} {:>10.6}  {:>6.3}",
                run.alpha,
                last.q1.get(),
                last.q2.get(),
                snapshot_fst(last)
            );
        }
    }
    Ok(())
}
