//! Typed errors raised by the key generation core
//!
//! The core returns [`KeyGenError`] so callers can tell a bad numeric input apart from a
//! bad distribution parameter. The CLI and config layers wrap these in `anyhow` with
//! context, the same way they wrap IO errors.

use thiserror::Error;

/// Errors produced by the encoder and the samplers
#[derive(Debug, Error, PartialEq)]
pub enum KeyGenError {
    /// A value the encoder cannot place in the key space (e.g. a negative target)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A distribution parameter outside the range its sampler accepts
    #[error("invalid {distribution} parameter {name} = {value}: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}
