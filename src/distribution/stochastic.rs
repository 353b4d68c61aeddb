//! Short random strings
//!
//! Each key is drawn independently: a length in `5..=10`, then that many lowercase
//! letters. No batching, no normalization.

use crate::keyspace::charset::Charset;
use crate::keyspace::length::LengthRange;
use rand::seq::SliceRandom;
use rand::RngCore;

const MIN_LEN: usize = 5;
const MAX_LEN: usize = 10;

/// Generator of independent short lowercase strings
#[derive(Debug, Clone)]
pub struct ShortRandom {
    charset: Charset,
    lengths: LengthRange,
}

impl ShortRandom {
    pub fn new() -> Self {
        Self {
            charset: Charset::lowercase(),
            lengths: LengthRange::new(MIN_LEN, MAX_LEN),
        }
    }

    pub fn generate(&self, rng: &mut dyn RngCore) -> String {
        let len = self.lengths.sample(rng);
        (0..len)
            .filter_map(|_| self.charset.chars().choose(rng).copied())
            .collect()
    }
}

impl Default for ShortRandom {
    fn default() -> Self {
        Self::new()
    }
}
