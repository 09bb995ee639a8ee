use demedrive_analysis::EquilibriumReport;
use demedrive_sim::base::{Genotype, GenotypeCounts};
use demedrive_sim::evolution::DemeSelection;
use demedrive_sim::simulation::{Configuration, SimulationParameters};

pub fn print_header(title: &str) {
    println!("🧬 demedrive - {title}");
    println!("============================================\n");
}

pub fn print_configuration(config: &Configuration) {
    print_parameters(&config.parameters);
    let exec = &config.execution;
    println!("\n⚙️  Execution");
    println!("  • Generations: {} [-g, --generations]", exec.generations);
    match exec.window {
        Some(w) => println!("  • History Window: last {w} generations [--window]"),
        None => println!("  • History Window: Full [--window]"),
    }
    match exec.seed {
        Some(seed) => println!("  • Random Seed: {seed} [--seed]"),
        None => println!("  • Random Seed: Random [--seed]"),
    }
    println!();
}

pub fn print_parameters(params: &SimulationParameters) {
    let drive = params.drive();
    let migration = params.migration();

    println!("\n🎯 Drive & Selection");
    println!("  • Fitness Cost: {:.3} [-s, --fitness-cost]", params.s);
    println!("  • Conversion Efficiency: {:.3} [-c, --conversion]", params.c);
    println!("  • Dominance: {:.3} [-H, --dominance]", params.h);
    if drive.is_neutral() {
        println!("  • Regime: Neutral (no cost, no conversion)");
    } else {
        println!(
            "  • Effective Heterozygote Fitness: {:.4}",
            drive.heterozygote_effective_fitness()
        );
    }

    println!("\n🔀 Migration");
    println!("  • Rate into Deme 1: {:.4} [-m, --migration]", migration.rate_to_deme1());
    println!(
        "  • Rate into Deme 2: {:.4} (alpha = {} [--alpha])",
        migration.rate_to_deme2(),
        params.alpha
    );
    println!("  • Life Cycle: {} [--life-cycle]", params.life_cycle);

    let (q1, q2) = params.initial();
    println!("\n🌍 Initial Frequencies");
    println!(
        "  • Deme 1 (target): {q1:.4} [--q1]  mean fitness {:.4}",
        drive.mean_fitness(q1)
    );
    println!(
        "  • Deme 2 (non-target): {q2:.4} [--q2]  mean fitness {:.4}",
        drive.mean_fitness(q2)
    );
}

pub fn print_equilibrium(report: &EquilibriumReport) {
    let (q1, q2) = report.frequencies();
    println!("\n📈 Equilibrium");
    println!(
        "  • Initial: ({:.4}, {:.4})",
        report.initial.q1, report.initial.q2
    );
    println!("  • Final: q1={q1:.6} q2={q2:.6}");
    if report.converged {
        println!("  • Generations: {} (converged)", report.generations);
    } else {
        println!(
            "  • Generations: {} (step limit reached, not converged)",
            report.generations
        );
    }
    println!("  • Outcome: {}", report.outcome);
}

pub fn print_genotype_sample(counts: &[GenotypeCounts; 2]) {
    println!("\n🧪 Genotype Sample");
    for (i, deme) in counts.iter().enumerate() {
        let cells: Vec<String> = Genotype::ALL
            .iter()
            .map(|&g| format!("{}={}", g.label(), deme.get(g)))
            .collect();
        println!("  • Deme {}: {} (n={})", i + 1, cells.join(" "), deme.total());
    }
}
