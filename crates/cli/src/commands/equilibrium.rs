use anyhow::{Context, Result};
use demedrive_analysis::{ConvergenceCriteria, equilibrium};

use crate::args::EquilibriumArgs;
use crate::printing::{print_equilibrium, print_header, print_parameters};

pub fn find_equilibrium(args: &EquilibriumArgs) -> Result<()> {
    let config = args.source.load()?;
    let criteria = ConvergenceCriteria::new(
        args.max_generations
            .unwrap_or(config.execution.max_generations),
        args.threshold
            .unwrap_or(config.execution.convergence_threshold),
    );

    print_header("Equilibrium");
    print_parameters(&config.parameters);
    println!(
        "\nIterating up to {} generations (threshold {:e})...",
        criteria.max_generations, criteria.threshold
    );

    let report =
        equilibrium(config.parameters, &criteria).context("Failed to compute equilibrium")?;
    print_equilibrium(&report);

    Ok(())
}
