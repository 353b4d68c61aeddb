//! Base-N lexicographic encoder
//!
//! Maps a bounded integer onto a fixed-length string over a [`Charset`] using standard
//! positional notation, most significant digit first. For a fixed length, larger values
//! always produce lexicographically later strings.
//!
//! # Limitations
//!
//! Keys of different lengths are not mutually ordered: `"b"` sorts after `"aaaz"` even
//! though it may encode a smaller probability. Only same-length keys preserve the
//! numeric order of their targets.
//!
//! # Example
//!
//! ```
//! use keyforge::keyspace::{charset::Charset, encoder::encode};
//!
//! let lower = Charset::lowercase();
//! assert_eq!(encode(0, 3, &lower).unwrap(), "aaa");
//! assert_eq!(encode(17_575, 3, &lower).unwrap(), "zzz");
//! ```

use super::charset::Charset;
use super::length::LengthRange;
use crate::error::KeyGenError;
use rand::RngCore;

/// Largest encodable value for `length` digits in `base`
///
/// Returns `None` when `base^length` does not fit in an `i128`; every `i128` input is
/// then already in range.
fn max_value(base: usize, length: usize) -> Option<i128> {
    let exp = u32::try_from(length).ok()?;
    (base as i128).checked_pow(exp).map(|space| space - 1)
}

/// Encode `value` as exactly `length` characters of `charset`
///
/// Values above `base^length - 1` saturate to the last key of that length.
pub fn encode(value: i128, length: usize, charset: &Charset) -> Result<String, KeyGenError> {
    if value < 0 {
        return Err(KeyGenError::InvalidInput(format!(
            "value cannot be negative: {}",
            value
        )));
    }
    if charset.is_empty() {
        return Err(KeyGenError::InvalidInput("charset is empty".to_string()));
    }

    let base = charset.base();
    let value = match max_value(base, length) {
        Some(max) if value > max => max,
        _ => value,
    };

    if value == 0 {
        return Ok(std::iter::repeat(charset.digit(0)).take(length).collect());
    }

    let mut digits = Vec::with_capacity(length);
    let mut remaining = value;
    while digits.len() < length {
        let rem = (remaining % base as i128) as usize;
        remaining /= base as i128;
        digits.push(charset.digit(rem));
    }

    Ok(digits.into_iter().rev().collect())
}

/// Encode a mapping probability at a freshly sampled length
///
/// `target = floor(p * (base^length - 1))`, so `p = 0` maps to the first key and `p = 1`
/// to the last key of the drawn length.
pub fn generate_distributed_string(
    p: f64,
    lengths: &LengthRange,
    charset: &Charset,
    rng: &mut dyn RngCore,
) -> Result<String, KeyGenError> {
    let length = lengths.sample(rng);
    let top = match max_value(charset.base(), length) {
        Some(max) => max as f64,
        None => (charset.base() as f64).powf(length as f64) - 1.0,
    };

    let scaled = (p * top).floor();
    if scaled < 0.0 {
        return Err(KeyGenError::InvalidInput(format!(
            "probability {} maps below the key space",
            p
        )));
    }

    // Float to int casts saturate, so out-of-range targets clamp in encode()
    encode(scaled as i128, length, charset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_encode_lowercase_scenario() {
        let lower = Charset::lowercase();
        assert_eq!(encode(0, 3, &lower).unwrap(), "aaa");
        assert_eq!(encode(17_575, 3, &lower).unwrap(), "zzz");
        // 8788 = 13 * 26^2
        assert_eq!(encode(8_788, 3, &lower).unwrap(), "naa");
        assert_eq!(encode(27, 3, &lower).unwrap(), "abb");
    }

    #[test]
    fn test_encode_zero_case() {
        let digits = Charset::from_name(Some("digits"));
        assert_eq!(encode(0, 5, &digits).unwrap(), "00000");
        assert_eq!(encode(0, 0, &digits).unwrap(), "");
    }

    #[test]
    fn test_encode_saturates() {
        let lower = Charset::lowercase();
        let top = encode(17_575, 3, &lower).unwrap();
        assert_eq!(encode(17_576, 3, &lower).unwrap(), top);
        assert_eq!(encode(i128::MAX, 3, &lower).unwrap(), top);
    }

    #[test]
    fn test_encode_negative_rejected() {
        let lower = Charset::lowercase();
        assert!(matches!(
            encode(-1, 3, &lower),
            Err(KeyGenError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_encode_monotonic() {
        let digits = Charset::from_name(Some("alnum_lower"));
        let mut prev = encode(0, 2, &digits).unwrap();
        for v in 1..(36 * 36) {
            let next = encode(v, 2, &digits).unwrap();
            assert_eq!(next.chars().count(), 2);
            assert!(next > prev, "{} should sort after {}", next, prev);
            prev = next;
        }
    }

    #[test]
    fn test_encode_single_char_charset() {
        let unary = Charset::resolve(Some("x"), None);
        assert_eq!(encode(0, 4, &unary).unwrap(), "xxxx");
        assert_eq!(encode(99, 4, &unary).unwrap(), "xxxx");
    }

    #[test]
    fn test_encode_beyond_i128_space() {
        // 62^30 overflows i128; no saturation applies
        let alnum = Charset::default();
        let key = encode(i128::MAX, 30, &alnum).unwrap();
        assert_eq!(key.chars().count(), 30);
        assert!(key.starts_with('a'));
    }

    #[test]
    fn test_distributed_string_extremes() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let lower = Charset::lowercase();
        let lengths = LengthRange::new(3, 3);
        assert_eq!(
            generate_distributed_string(0.0, &lengths, &lower, &mut rng).unwrap(),
            "aaa"
        );
        assert_eq!(
            generate_distributed_string(1.0, &lengths, &lower, &mut rng).unwrap(),
            "zzz"
        );
        assert_eq!(
            generate_distributed_string(0.5, &lengths, &lower, &mut rng).unwrap(),
            encode(8_787, 3, &lower).unwrap()
        );
    }

    #[test]
    fn test_distributed_string_negative_probability() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let lower = Charset::lowercase();
        let result = generate_distributed_string(-0.5, &LengthRange::new(3, 3), &lower, &mut rng);
        assert!(matches!(result, Err(KeyGenError::InvalidInput(_))));
    }

    #[test]
    fn test_distributed_string_long_keys() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let alnum = Charset::default();
        let lengths = LengthRange::new(25, 25);
        let key = generate_distributed_string(1.0, &lengths, &alnum, &mut rng).unwrap();
        assert_eq!(key.chars().count(), 25);
    }
}
