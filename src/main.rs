//! keyforge CLI entry point

use anyhow::{Context, Result};
use keyforge::config::{cli::Cli, file, validator};
use keyforge::mixer;
use keyforge::output::{json, lines, text};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    println!("keyforge v{}", env!("CARGO_PKG_VERSION"));
    println!("Synthetic key dataset generator");
    println!();

    cli.validate()?;
    run(cli)
}

/// Initialize env_logger; RUST_LOG overrides the default level
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = file::parse_config_file(&cli.config)?;
    let config = file::merge_cli_with_config(&cli, config);
    validator::validate_config(&config).context("Configuration validation failed")?;

    let components = file::load_model_components(&config)
        .with_context(|| format!("Failed to load components from {}", cli.config.display()))?;
    validator::validate_components(&components).context("Configuration validation failed")?;

    let quotas = mixer::compute_component_counts(&components, config.num_keys);
    text::print_plan(&components, &quotas, config.num_keys);

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let mut rng = match cli.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };

    println!();
    let start = Instant::now();
    let keys = mixer::generate_with_quotas(&components, &quotas, config.num_keys, &mut rng)
        .context("Key generation failed")?;
    log::debug!("Generated {} keys in {:.3}s", keys.len(), start.elapsed().as_secs_f64());

    text::print_run_report(keys.len(), config.num_keys, &config.output);
    let written = lines::write_lines(&config.output, &keys)?;
    log::debug!("Keys written to {}", written.display());

    if let Some(ref path) = cli.summary_json {
        let summary = json::RunSummary {
            requested_keys: config.num_keys,
            generated_keys: keys.len(),
            weight_sum: mixer::weight_sum(&components),
            output: written,
            seed: cli.seed,
            components: quotas,
        };
        json::write_summary(path, &summary)?;
        println!("Summary written to '{}'", path.display());
    }

    if cli.sample > 0 {
        text::sample_print(&keys, cli.sample, &mut rng);
    }

    Ok(())
}
