use anyhow::{Context, Result};
use demedrive_analysis::{ConvergenceCriteria, ThresholdSearch, critical_migration};

use crate::args::ThresholdArgs;
use crate::printing::{print_header, print_parameters};

pub fn find_threshold(args: &ThresholdArgs) -> Result<()> {
    let config = args.source.load()?;
    let params = config.parameters;
    let search = ThresholdSearch {
        precision: args.precision,
        criteria: ConvergenceCriteria::new(
            config.execution.max_generations,
            config.execution.convergence_threshold,
        ),
        life_cycle: params.life_cycle,
        ..ThresholdSearch::default()
    };

    print_header("Critical Migration Threshold");
    print_parameters(&params);
    println!(
        "\nBisecting m on [{}, {}] to precision {}...",
        search.lower, search.upper, search.precision
    );

    let m_star = critical_migration(params.drive(), params.alpha, params.q1_0, params.q2_0, &search)
        .context("Threshold search failed")?;

    println!("\n✓ Estimated critical migration threshold");
    println!(
        "  m* = {m_star:.4} (s={}, c={}, h={}, alpha={})",
        params.s, params.c, params.h, params.alpha
    );
    if m_star <= search.lower {
        println!("  No migration rate in the interval gives differential targeting");
    }

    Ok(())
}
