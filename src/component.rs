//! Generation components
//!
//! A [`Component`] is one named slice of the output dataset: a weight, an optional
//! namespace prefix, and a [`Strategy`] saying how its keys are produced. Components are
//! built once from configuration and are immutable while keys are generated.
//!
//! # Strategies
//!
//! - **Stochastic**: independent short random strings
//! - **DeterministicSequence**: decimal ids in index order
//! - **NormalizedInverseCdf**: inverse-CDF samples, batch-normalized, then encoded
//! - **NormalizedZipfRank**: Zipf ranks, batch-normalized, then encoded
//!
//! The two normalized strategies need the whole batch before any key can be emitted,
//! since the batch minimum and maximum define the scale.

use crate::distribution::{
    quantile_for, sequential::SequentialIds, stochastic::ShortRandom, zipf::ZipfRanks,
    InverseCdfTarget, RankSampler,
};
use crate::error::KeyGenError;
use crate::keyspace::encoder::generate_distributed_string;
use crate::keyspace::KeySpace;
use crate::normalize::{normalize, normalize_ranks};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a component turns a key count into keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    Stochastic,
    DeterministicSequence,
    NormalizedInverseCdf {
        target: InverseCdfTarget,
        keyspace: KeySpace,
    },
    NormalizedZipfRank {
        a: f64,
        keyspace: KeySpace,
    },
}

impl Strategy {
    /// Stable label used in progress output and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Stochastic => "stochastic",
            Strategy::DeterministicSequence => "deterministic_sequence",
            Strategy::NormalizedInverseCdf { .. } => "normalized_inverse_cdf",
            Strategy::NormalizedZipfRank { .. } => "normalized_zipf",
        }
    }

    /// Check that the distribution parameters resolve to a sampler
    pub fn validate(&self) -> Result<(), KeyGenError> {
        match self {
            Strategy::Stochastic | Strategy::DeterministicSequence => Ok(()),
            Strategy::NormalizedInverseCdf { target, .. } => quantile_for(*target).map(|_| ()),
            Strategy::NormalizedZipfRank { a, .. } => ZipfRanks::new(*a).map(|_| ()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Named, weighted unit of key generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// Fraction of the total key count owed to this component
    pub weight: f64,
    pub namespace: String,
    pub separator: String,
    pub strategy: Strategy,
}

impl Component {
    pub fn new(name: impl Into<String>, weight: f64, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            weight,
            namespace: String::new(),
            separator: ":".to_string(),
            strategy,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>, separator: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self.separator = separator.into();
        self
    }

    /// Apply the namespace prefix, if any
    pub fn prefix(&self, key: String) -> String {
        if self.namespace.is_empty() {
            key
        } else {
            format!("{}{}{}", self.namespace, self.separator, key)
        }
    }

    /// Generate `n` keys for this component
    pub fn generate(&self, n: usize, rng: &mut dyn RngCore) -> Result<Vec<String>, KeyGenError> {
        if n == 0 {
            return Ok(Vec::new());
        }

        match &self.strategy {
            Strategy::Stochastic => Ok(self.generate_stochastic(n, rng)),
            Strategy::DeterministicSequence => Ok(self.generate_sequence(n)),
            Strategy::NormalizedInverseCdf { target, keyspace } => {
                self.generate_inverse_cdf(*target, keyspace, n, rng)
            }
            Strategy::NormalizedZipfRank { a, keyspace } => {
                self.generate_zipf(*a, keyspace, n, rng)
            }
        }
    }

    fn generate_stochastic(&self, n: usize, rng: &mut dyn RngCore) -> Vec<String> {
        let gen = ShortRandom::new();
        (0..n).map(|_| self.prefix(gen.generate(rng))).collect()
    }

    fn generate_sequence(&self, n: usize) -> Vec<String> {
        SequentialIds::new().take(n).map(|id| self.prefix(id)).collect()
    }

    fn generate_inverse_cdf(
        &self,
        target: InverseCdfTarget,
        keyspace: &KeySpace,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, KeyGenError> {
        let quantile = quantile_for(target)?;
        let raw: Vec<f64> = (0..n).map(|_| quantile.quantile(rng.gen::<f64>())).collect();
        if let Some(bad) = raw.iter().find(|v| !v.is_finite()) {
            return Err(KeyGenError::InvalidInput(format!(
                "component '{}' drew a non-finite raw sample ({}); distribution parameters overflow f64",
                self.name, bad
            )));
        }
        self.encode_batch(&normalize(&raw), keyspace, rng)
    }

    fn generate_zipf(
        &self,
        a: f64,
        keyspace: &KeySpace,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, KeyGenError> {
        let ranks_sampler = ZipfRanks::new(a)?;
        let ranks: Vec<u64> = (0..n).map(|_| ranks_sampler.next_rank(rng)).collect();
        self.encode_batch(&normalize_ranks(&ranks), keyspace, rng)
    }

    fn encode_batch(
        &self,
        probs: &[f64],
        keyspace: &KeySpace,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, KeyGenError> {
        probs
            .iter()
            .map(|&p| {
                generate_distributed_string(p, &keyspace.lengths, &keyspace.charset, rng)
                    .map(|key| self.prefix(key))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyspace::charset::Charset;
    use crate::keyspace::length::LengthRange;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn lower3() -> KeySpace {
        KeySpace::new(Charset::lowercase(), LengthRange::new(3, 3))
    }

    #[test]
    fn test_sequence_in_order() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let comp = Component::new("ids", 1.0, Strategy::DeterministicSequence);
        let keys = comp.generate(5, &mut rng).unwrap();
        assert_eq!(keys, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_namespace_prefix() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let comp = Component::new("ids", 1.0, Strategy::DeterministicSequence)
            .with_namespace("user", "/");
        let keys = comp.generate(2, &mut rng).unwrap();
        assert_eq!(keys, vec!["user/0", "user/1"]);
    }

    #[test]
    fn test_empty_namespace_no_prefix() {
        let comp = Component::new("x", 1.0, Strategy::Stochastic).with_namespace("", ":");
        assert_eq!(comp.prefix("abc".to_string()), "abc");
    }

    #[test]
    fn test_zero_count() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let comp = Component::new("z", 1.0, Strategy::NormalizedZipfRank { a: 1.3, keyspace: lower3() });
        assert!(comp.generate(0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_stochastic_keys() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let comp = Component::new("users", 1.0, Strategy::Stochastic).with_namespace("u", ":");
        let keys = comp.generate(50, &mut rng).unwrap();
        assert_eq!(keys.len(), 50);
        for key in keys {
            let body = key.strip_prefix("u:").unwrap();
            assert!((5..=10).contains(&body.len()));
        }
    }

    #[test]
    fn test_uniform_batch_spans_keyspace() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let comp = Component::new(
            "uniform",
            1.0,
            Strategy::NormalizedInverseCdf {
                target: InverseCdfTarget::Uniform,
                keyspace: lower3(),
            },
        );
        let keys = comp.generate(100, &mut rng).unwrap();
        assert_eq!(keys.len(), 100);
        // Batch minimum maps to p = 0 and maximum to p = 1
        assert!(keys.iter().any(|k| k == "aaa"));
        assert!(keys.iter().any(|k| k == "zzz"));
    }

    #[test]
    fn test_single_key_batch_is_degenerate() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let comp = Component::new(
            "pareto",
            1.0,
            Strategy::NormalizedInverseCdf {
                target: InverseCdfTarget::Pareto { b: 1.5 },
                keyspace: lower3(),
            },
        );
        assert_eq!(comp.generate(1, &mut rng).unwrap(), vec!["aaa"]);
    }

    #[test]
    fn test_zipf_batch_skews_low() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let comp = Component::new(
            "zipf",
            1.0,
            Strategy::NormalizedZipfRank {
                a: 2.0,
                keyspace: lower3(),
            },
        );
        let keys = comp.generate(1000, &mut rng).unwrap();
        // Rank 1 is the batch minimum, so it always encodes as the first key
        let first = keys.iter().filter(|k| *k == "aaa").count();
        assert!(first > 500, "expected most keys at the start, got {}", first);
    }

    #[test]
    fn test_pareto_overflow_is_an_error() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let comp = Component::new(
            "pareto",
            1.0,
            Strategy::NormalizedInverseCdf {
                target: InverseCdfTarget::Pareto { b: 0.01 },
                keyspace: lower3(),
            },
        );
        // Shape passes validation but (1 - u)^-100 overflows for draws near 1
        assert!(comp.strategy.validate().is_ok());
        assert!(matches!(
            comp.generate(10000, &mut rng),
            Err(KeyGenError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zipf_huge_ranks_map_finitely() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let comp = Component::new(
            "zipf",
            1.0,
            Strategy::NormalizedZipfRank {
                a: 1.01,
                keyspace: lower3(),
            },
        );
        // Exponent close to 1 yields ranks up to u64::MAX; extremes still reach both ends
        let keys = comp.generate(2000, &mut rng).unwrap();
        assert_eq!(keys.len(), 2000);
        assert!(keys.iter().all(|k| k.len() == 3));
        assert!(keys.iter().any(|k| k == "aaa"));
        assert!(keys.iter().any(|k| k == "zzz"));
    }

    #[test]
    fn test_seeded_generation_reproducible() {
        let comp = Component::new(
            "zipf",
            1.0,
            Strategy::NormalizedZipfRank {
                a: 1.3,
                keyspace: KeySpace::default(),
            },
        );
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(77);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(77);
        assert_eq!(
            comp.generate(20, &mut rng1).unwrap(),
            comp.generate(20, &mut rng2).unwrap()
        );
    }

    #[test]
    fn test_strategy_validate() {
        assert!(Strategy::NormalizedZipfRank { a: 0.9, keyspace: lower3() }.validate().is_err());
        assert!(Strategy::NormalizedInverseCdf {
            target: InverseCdfTarget::Pareto { b: -2.0 },
            keyspace: lower3(),
        }
        .validate()
        .is_err());
        assert!(Strategy::Stochastic.validate().is_ok());
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(Strategy::DeterministicSequence.to_string(), "deterministic_sequence");
        assert_eq!(
            Strategy::NormalizedZipfRank { a: 1.3, keyspace: lower3() }.label(),
            "normalized_zipf"
        );
    }
}
