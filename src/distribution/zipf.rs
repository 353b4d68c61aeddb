//! Zipf rank distribution
//!
//! This module draws integer ranks from the (unbounded) Zipf distribution, also known
//! as the zeta distribution, where rank `k` occurs with probability proportional to
//! `1 / k^a`.
//!
//! # Characteristics
//!
//! - Rank 1 is the most frequent, frequencies fall off as a power law
//! - `a` must be greater than 1 for the distribution to be defined
//! - Larger `a`: fewer distinct ranks, more keys sharing the low end
//! - Default `a` (1.3): long tail of rare, very large ranks
//!
//! # Approximation
//!
//! The Zipf-rank strategy rescales ranks linearly with min-max normalization before
//! encoding. That keeps the "most keys near the start" shape but does not reproduce
//! true rank-frequency behaviour in key space: the position of a key depends on the
//! largest rank drawn in its batch. This is a known approximation that generated
//! datasets rely on.

use super::RankSampler;
use crate::error::KeyGenError;
use rand::RngCore;
use rand_distr::{Distribution as RandDistribution, Zeta};

/// Zipf rank sampler with exponent `a`
#[derive(Debug, Clone)]
pub struct ZipfRanks {
    dist: Zeta<f64>,
}

impl ZipfRanks {
    pub fn new(a: f64) -> Result<Self, KeyGenError> {
        let dist = Zeta::new(a).map_err(|_| KeyGenError::InvalidParameter {
            distribution: "zipf",
            name: "a",
            value: a,
            reason: "exponent must be greater than 1",
        })?;
        Ok(Self { dist })
    }
}

impl RankSampler for ZipfRanks {
    fn next_rank(&self, rng: &mut dyn RngCore) -> u64 {
        // Very large ranks saturate at u64::MAX
        self.dist.sample(rng) as u64
    }
}
