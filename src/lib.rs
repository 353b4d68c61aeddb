//! keyforge - Synthetic key dataset generator
//!
//! keyforge builds benchmark key sets whose distribution over the key space follows a
//! chosen shape, for stress-testing data structures whose performance depends on key
//! distribution (learned indexes in particular).
//!
//! # Architecture
//!
//! - **Key space**: alphabets, length ranges, and an order-preserving base-N encoder
//! - **Distributions**: uniform and Pareto quantiles, Zipf ranks, sequential and random ids
//! - **Normalization**: batch-local min-max scaling of raw samples into `[0, 1]`
//! - **Components**: weighted, namespaced generation units with one of four strategies
//! - **Mixer**: quota allocation, concatenation and a final shuffle
//!
//! # Example
//!
//! ```
//! use keyforge::component::{Component, Strategy};
//! use keyforge::mixer::generate_all_keys;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let components = vec![
//!     Component::new("ids", 0.5, Strategy::DeterministicSequence).with_namespace("id", ":"),
//!     Component::new("users", 0.5, Strategy::Stochastic).with_namespace("user", ":"),
//! ];
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
//! let keys = generate_all_keys(&components, 100, &mut rng).unwrap();
//! assert_eq!(keys.len(), 100);
//! ```

pub mod component;
pub mod config;
pub mod distribution;
pub mod error;
pub mod keyspace;
pub mod mixer;
pub mod normalize;
pub mod output;

// Re-export commonly used types
pub use component::{Component, Strategy};
pub use config::Config;
pub use error::KeyGenError;

/// Result type used throughout keyforge
pub type Result<T> = anyhow::Result<T>;
