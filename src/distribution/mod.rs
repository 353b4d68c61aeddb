//! Raw sample generation
//!
//! This module provides the sources of raw values behind each key strategy. The
//! normalized strategies never encode raw values directly: they collect a whole batch,
//! rescale it with [`crate::normalize`], and only then map each value into the key space.
//!
//! # Distributions
//!
//! - **Uniform**: identity quantile, every position equally likely
//! - **Pareto**: heavy-tailed quantile with shape `b`
//! - **Zipf**: integer ranks with exponent `a`
//! - **Sequential**: decimal ids `0, 1, 2, ...`
//! - **Stochastic**: short random lowercase strings
//!
//! # Parameters vs. samplers
//!
//! Configuration carries plain parameter values ([`InverseCdfTarget`], a Zipf exponent).
//! [`quantile_for`] and [`zipf::ZipfRanks::new`] resolve those into concrete samplers, so
//! the parameters stay serializable and comparable in tests.
//!
//! # Example
//!
//! ```
//! use keyforge::distribution::{quantile_for, InverseCdfTarget, Quantile};
//!
//! let pareto = quantile_for(InverseCdfTarget::Pareto { b: 1.5 }).unwrap();
//! assert_eq!(pareto.quantile(0.0), 1.0);
//! ```

use crate::error::KeyGenError;
use rand::RngCore;
use serde::{Deserialize, Serialize};

pub mod pareto;
pub mod sequential;
pub mod stochastic;
pub mod uniform;
pub mod zipf;

/// Inverse CDF of a target distribution
///
/// Maps a uniform draw in `[0, 1)` onto a raw value of the target distribution.
pub trait Quantile: Send {
    fn quantile(&self, u: f64) -> f64;
}

/// Source of integer ranks
pub trait RankSampler: Send {
    /// Draw the next rank (1 is the most frequent)
    fn next_rank(&self, rng: &mut dyn RngCore) -> u64;
}

/// Target distributions reachable through inverse-CDF sampling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InverseCdfTarget {
    Uniform,
    Pareto { b: f64 },
}

/// Build the quantile function for a target distribution
pub fn quantile_for(target: InverseCdfTarget) -> Result<Box<dyn Quantile>, KeyGenError> {
    match target {
        InverseCdfTarget::Uniform => Ok(Box::new(uniform::UniformQuantile)),
        InverseCdfTarget::Pareto { b } => Ok(Box::new(pareto::ParetoQuantile::new(b)?)),
    }
}
