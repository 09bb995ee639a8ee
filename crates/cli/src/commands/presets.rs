use anyhow::Result;
use demedrive_sim::simulation::Preset;

pub fn list_presets() -> Result<()> {
    println!("\n📊 Parameter presets:");
    println!("{}", "=".repeat(50));

    for preset in Preset::ALL {
        let p = preset.parameters();
        println!("  • {:<20} {}", preset.name(), preset.description());
        println!(
            "    s={} c={} h={} m={} q1={} q2={}",
            p.s, p.c, p.h, p.m, p.q1_0, p.q2_0
        );
    }

    println!("\n💡 Use '--preset <name>' with any command, then override single values with flags");

    Ok(())
}
