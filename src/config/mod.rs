//! Configuration module
//!
//! Handles CLI argument parsing, JSON/TOML configuration files, component construction,
//! and validation.

pub mod cli;
pub mod file;
pub mod validator;

use crate::component::{Component, Strategy};
use crate::distribution::InverseCdfTarget;
use crate::keyspace::charset::Charset;
use crate::keyspace::length::LengthRange;
use crate::keyspace::KeySpace;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Requested total number of keys
    #[serde(default = "default_num_keys")]
    pub num_keys: usize,
    /// Destination file for generated keys
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Component definitions, in declaration order
    #[serde(default)]
    pub components: Vec<ComponentConfig>,
}

pub fn default_num_keys() -> usize {
    10000
}

fn default_output() -> PathBuf {
    PathBuf::from("generated_full_dataset.txt")
}

/// Component entry as written in the configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Display name (defaults depend on the type)
    pub name: Option<String>,
    /// Component type: stochastic, sequential_ids, uniform, pareto, zipf
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Fraction of the total key count
    #[serde(default)]
    pub weight: f64,
    /// Prefix prepended to every key (empty = no prefix)
    #[serde(default)]
    pub namespace: String,
    /// Separator between namespace and key
    #[serde(default = "default_separator")]
    pub namespace_sep: String,
    /// Key space and distribution parameters
    #[serde(default)]
    pub config: KeySpaceConfig,
}

fn default_separator() -> String {
    ":".to_string()
}

/// Key space and distribution parameters of a component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeySpaceConfig {
    #[serde(default)]
    pub length: LengthRange,
    /// Symbolic alphabet name
    #[serde(default = "default_charset")]
    pub charset: String,
    /// Literal alphabet, takes precedence over `charset`
    pub charset_custom: Option<String>,
    /// Pareto shape
    #[serde(default = "default_pareto_b")]
    pub b: f64,
    /// Zipf exponent
    #[serde(default = "default_zipf_a")]
    pub a: f64,
}

fn default_charset() -> String {
    "alnum".to_string()
}

fn default_pareto_b() -> f64 {
    1.5
}

fn default_zipf_a() -> f64 {
    1.3
}

impl Default for KeySpaceConfig {
    fn default() -> Self {
        Self {
            length: LengthRange::default(),
            charset: default_charset(),
            charset_custom: None,
            b: default_pareto_b(),
            a: default_zipf_a(),
        }
    }
}

impl KeySpaceConfig {
    fn keyspace(&self) -> KeySpace {
        let charset = Charset::resolve(self.charset_custom.as_deref(), Some(self.charset.as_str()));
        KeySpace::new(charset, self.length)
    }
}

/// Build a component from its configuration entry
///
/// Returns `None` for a missing or unrecognized type.
pub fn build_component(raw: &ComponentConfig) -> Option<Component> {
    let kind = raw.kind.as_deref()?;
    let (default_name, strategy) = match kind {
        "stochastic" => ("Usernames", Strategy::Stochastic),
        "sequential_ids" => ("Sequential IDs", Strategy::DeterministicSequence),
        "uniform" => (
            "Uniform",
            Strategy::NormalizedInverseCdf {
                target: InverseCdfTarget::Uniform,
                keyspace: raw.config.keyspace(),
            },
        ),
        "pareto" => (
            "Pareto",
            Strategy::NormalizedInverseCdf {
                target: InverseCdfTarget::Pareto { b: raw.config.b },
                keyspace: raw.config.keyspace(),
            },
        ),
        "zipf" => (
            "Zipf",
            Strategy::NormalizedZipfRank {
                a: raw.config.a,
                keyspace: raw.config.keyspace(),
            },
        ),
        _ => return None,
    };

    let name = raw.name.clone().unwrap_or_else(|| default_name.to_string());
    Some(
        Component::new(name, raw.weight, strategy)
            .with_namespace(raw.namespace.clone(), raw.namespace_sep.clone()),
    )
}

/// Build every recognized component, dropping the rest
pub fn build_components(raws: &[ComponentConfig]) -> Vec<Component> {
    raws.iter()
        .filter_map(|raw| {
            let built = build_component(raw);
            if built.is_none() {
                log::debug!(
                    "Skipping component {:?} with unrecognized type {:?}",
                    raw.name,
                    raw.kind
                );
            }
            built
        })
        .collect()
}
