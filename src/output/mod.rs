//! Output formatting and writing
//!
//! - `lines`: the generated key file, one key per line
//! - `text`: human-readable plan, run report and key sample on stdout
//! - `json`: machine-readable run summary

pub mod json;
pub mod lines;
pub mod text;
