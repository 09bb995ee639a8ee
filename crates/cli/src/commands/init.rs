use anyhow::{Context, Result};
use demedrive_sim::simulation::{Configuration, SimulationParameters};

use crate::args::InitArgs;
use crate::printing::{print_configuration, print_header};

pub fn init_configuration(args: &InitArgs) -> Result<()> {
    print_header("Two-Deme Gene Drive Simulator");

    let config = build_configuration(args)?;

    println!("Configuration:");
    print_configuration(&config);

    config
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("✓ Configuration written: {}", args.output.display());
    println!(
        "\n💡 Use 'demedrive run --config {}' to start the simulation",
        args.output.display()
    );

    Ok(())
}

pub fn build_configuration(args: &InitArgs) -> Result<Configuration> {
    let parameters = args.params.resolve(SimulationParameters::default())?;
    let mut config = Configuration::new(parameters);
    config.execution.generations = args.generations;
    config.execution.window = args.window;
    config.execution.seed = args.seed;
    Ok(config)
}
