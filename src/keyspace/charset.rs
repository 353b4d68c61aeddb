//! Alphabet resolution
//!
//! A [`Charset`] is the ordered digit set used by the encoder: position 0 is digit value
//! 0, so the order of characters defines the lexicographic order of generated keys.

use serde::{Deserialize, Serialize};
use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Ordered alphabet used as base-N digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Resolve a symbolic alphabet name
    ///
    /// Names are matched case-insensitively. Unknown or missing names fall back to
    /// letters followed by digits, so this never fails.
    pub fn from_name(name: Option<&str>) -> Self {
        let name = name.unwrap_or("").to_lowercase();
        let chars: String = match name.as_str() {
            "lower" | "ascii_lowercase" => LOWERCASE.to_string(),
            "upper" | "ascii_uppercase" => UPPERCASE.to_string(),
            "letters" | "ascii_letters" => [LOWERCASE, UPPERCASE].concat(),
            "digits" | "numeric" => DIGITS.to_string(),
            "alnum_upper" | "upper_digits" => [UPPERCASE, DIGITS].concat(),
            "alnum_lower" | "lower_digits" => [LOWERCASE, DIGITS].concat(),
            _ => [LOWERCASE, UPPERCASE, DIGITS].concat(),
        };
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// Resolve an alphabet from an optional literal and an optional name
    ///
    /// A non-empty literal wins over the name.
    pub fn resolve(custom: Option<&str>, name: Option<&str>) -> Self {
        match custom {
            Some(literal) if !literal.is_empty() => Self {
                chars: literal.chars().collect(),
            },
            _ => Self::from_name(name),
        }
    }

    /// Lowercase ASCII letters
    pub fn lowercase() -> Self {
        Self::from_name(Some("lower"))
    }

    /// Number of digits in this alphabet (the encoding base)
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character for a digit value
    pub fn digit(&self, value: usize) -> char {
        self.chars[value]
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::from_name(None)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
