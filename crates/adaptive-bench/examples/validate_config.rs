use adaptive_bench::config::BenchConfig;
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("crates/adaptive-bench/configs/quick.toml")
    };

    println!("Validating config file: {}", config_path.display());

    let config = BenchConfig::from_file(&config_path)?;

    println!("\n✓ Successfully parsed configuration!");
    println!("\nSamples per summary: {}", config.sample_count);
    println!("Winsorizing: {}%", config.winsorize_pct);
    println!("Target batch: {:?}", config.target_batch);
    println!("Batch multiplier: {}x", config.batch_multiplier);

    println!("\nConvergence:");
    println!("  Minimum round: {:?}", config.min_round);
    println!("  MAD threshold: {}%", config.max_mad_pct);
    println!("  Deviation: {:?}", config.deviation);
    println!("  Time budget: {:?}", config.max_total);

    println!("\n✓ All validations passed!");

    Ok(())
}
