//! Uniform target distribution
//!
//! The quantile of the uniform distribution on `[0, 1)` is the identity, so every
//! position in the key space is equally likely. After batch normalization the smallest
//! draw maps to the first key and the largest to the last.

use super::Quantile;

/// Identity quantile
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformQuantile;

impl Quantile for UniformQuantile {
    #[inline(always)]
    fn quantile(&self, u: f64) -> f64 {
        u
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_uniform_identity() {
        let q = UniformQuantile;
        for u in [0.0, 0.25, 0.5, 0.999] {
            assert_eq!(q.quantile(u), u);
        }
    }

    #[test]
    fn test_uniform_coverage() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let q = UniformQuantile;
        let mut buckets = vec![0u32; 10];

        for _ in 0..10000 {
            let v = q.quantile(rng.gen::<f64>());
            buckets[(v * 10.0) as usize] += 1;
        }

        // Each bucket should have roughly 1000 samples, allow 20% deviation
        for count in buckets {
            assert!(count > 800 && count < 1200, "Bucket count {} outside expected range", count);
        }
    }
}
