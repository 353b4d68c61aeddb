//! Configuration validation
//!
//! Hard errors stop the run before any key is generated. Weight totals that drift from
//! 1.0 are not errors here; the mixer reports them and proceeds.

use super::*;
use anyhow::{Context, Result};

/// Validate the run-level settings
pub fn validate_config(config: &Config) -> Result<()> {
    if config.output.as_os_str().is_empty() {
        anyhow::bail!("output path must not be empty");
    }
    Ok(())
}

/// Validate built components
pub fn validate_components(components: &[Component]) -> Result<()> {
    for (i, component) in components.iter().enumerate() {
        validate_component(component)
            .with_context(|| format!("Component {} ('{}') is invalid", i, component.name))?;
    }
    Ok(())
}

/// Validate a single component
pub fn validate_component(component: &Component) -> Result<()> {
    if !component.weight.is_finite() || !(0.0..=1.0).contains(&component.weight) {
        anyhow::bail!("weight must be in [0, 1], got {}", component.weight);
    }

    match &component.strategy {
        Strategy::NormalizedInverseCdf { keyspace, .. } | Strategy::NormalizedZipfRank { keyspace, .. } => {
            if keyspace.charset.is_empty() {
                anyhow::bail!("charset must not be empty");
            }
        }
        Strategy::Stochastic | Strategy::DeterministicSequence => {}
    }

    component.strategy.validate()?;
    Ok(())
}
