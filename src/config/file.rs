//! Configuration file parsing
//!
//! Files ending in `.toml` are parsed as TOML; anything else is parsed as JSON.

use super::cli::Cli;
use super::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a configuration file, choosing the format by extension
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    let parsed = if is_toml {
        parse_toml_string(&contents)
    } else {
        parse_json_string(&contents)
    };
    parsed.with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Parse JSON configuration from string
pub fn parse_json_string(contents: &str) -> Result<Config> {
    let config: Config = serde_json::from_str(contents)
        .context("Failed to parse JSON configuration")?;

    Ok(config)
}

/// Merge CLI arguments with file configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(num_keys) = cli.num_keys {
        config.num_keys = num_keys;
    }
    if let Some(ref output) = cli.output {
        config.output = output.clone();
    }
    config
}

/// Build the components of a parsed configuration
///
/// Unrecognized component types are dropped. Fails when no usable component remains.
pub fn load_model_components(config: &Config) -> Result<Vec<Component>> {
    let components = build_components(&config.components);

    if components.is_empty() {
        anyhow::bail!(
            "No usable components in configuration ({} declared)",
            config.components.len()
        );
    }

    Ok(components)
}
