//! CLI argument parsing using clap

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// keyforge - Synthetic key dataset generator
#[derive(Parser, Debug)]
#[command(name = "keyforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON, or TOML with a .toml extension)
    #[arg(value_name = "CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    /// Total number of keys to generate (overrides the config file)
    #[arg(short = 'n', long)]
    pub num_keys: Option<usize>,

    /// Output file for generated keys (overrides the config file)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Seed for the random number generator (random if omitted)
    #[arg(long, env = "KEYFORGE_SEED")]
    pub seed: Option<u64>,

    /// Number of keys to print as a sample after generation
    #[arg(long, default_value = "10")]
    pub sample: usize,

    /// Write a JSON summary of the run to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Validate configuration and print the plan without generating keys
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let (Some(summary), Some(output)) = (&self.summary_json, &self.output) {
            if summary == output {
                anyhow::bail!(
                    "--summary-json and --output both point to {}",
                    output.display()
                );
            }
        }
        Ok(())
    }
}
