//! Key space definition and encoding
//!
//! A key space is an alphabet plus a range of key lengths. Every string of a given length
//! over the alphabet is a point in that space, ordered lexicographically. Distribution
//! strategies pick a position in `[0, 1]` and the encoder turns it into the key at that
//! position.

pub mod charset;
pub mod encoder;
pub mod length;

use charset::Charset;
use length::LengthRange;
use serde::{Deserialize, Serialize};

/// Alphabet and length range shared by the normalized strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySpace {
    pub charset: Charset,
    pub lengths: LengthRange,
}

impl KeySpace {
    pub fn new(charset: Charset, lengths: LengthRange) -> Self {
        Self { charset, lengths }
    }
}

impl Default for KeySpace {
    fn default() -> Self {
        Self::new(Charset::default(), LengthRange::default())
    }
}
