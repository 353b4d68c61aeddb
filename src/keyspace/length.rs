//! Key length sampling

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

fn default_min() -> usize {
    8
}

fn default_max() -> usize {
    12
}

/// Inclusive range of key lengths, sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    #[serde(default = "default_min")]
    pub min: usize,
    #[serde(default = "default_max")]
    pub max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Draw a key length
    ///
    /// Reversed bounds are read as the same range with the ends swapped.
    pub fn sample(&self, rng: &mut dyn RngCore) -> usize {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        rng.gen_range(lo..=hi)
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self::new(default_min(), default_max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_length_within_bounds() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let range = LengthRange::new(3, 6);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let len = range.sample(&mut rng);
            assert!((3..=6).contains(&len));
            seen[len] = true;
        }
        assert!(seen[3] && seen[4] && seen[5] && seen[6]);
    }

    #[test]
    fn test_length_fixed() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let range = LengthRange::new(4, 4);
        for _ in 0..10 {
            assert_eq!(range.sample(&mut rng), 4);
        }
    }

    #[test]
    fn test_length_reversed_bounds() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let range = LengthRange::new(9, 5);
        for _ in 0..100 {
            assert!((5..=9).contains(&range.sample(&mut rng)));
        }
    }

    #[test]
    fn test_length_defaults_from_json() {
        let range: LengthRange = serde_json::from_str(r#"{"min": 2}"#).unwrap();
        assert_eq!(range, LengthRange::new(2, 12));
    }
}
