//! JSON run summary
//!
//! Records what was requested and what was produced, so benchmark scripts can check
//! the realized dataset size and per-component split without re-reading the key file.

use crate::mixer::Quota;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of one generation run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub requested_keys: usize,
    pub generated_keys: usize,
    pub weight_sum: f64,
    pub output: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub components: Vec<Quota>,
}

impl RunSummary {
    /// Keys lost to truncated quotas
    pub fn shortfall(&self) -> usize {
        self.requested_keys.saturating_sub(self.generated_keys)
    }
}

/// Serialize the summary to a pretty-printed JSON string
pub fn to_json(summary: &RunSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize run summary")
}

/// Write the summary to a JSON file
pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let json = to_json(summary)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write JSON summary: {}", path.display()))
}
