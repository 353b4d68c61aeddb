//! Human-readable text output

use crate::component::{Component, Strategy};
use crate::distribution::InverseCdfTarget;
use crate::mixer::Quota;
use rand::seq::SliceRandom;
use rand::RngCore;
use std::path::Path;

/// Print the component plan before generation
pub fn print_plan(components: &[Component], quotas: &[Quota], total: usize) {
    println!("Components:");
    for (component, quota) in components.iter().zip(quotas) {
        println!(
            "  {:<20} weight {:>5.3}  {:>8} keys  {}",
            component.name,
            component.weight,
            format_number(quota.count as u64),
            describe_strategy(&component.strategy)
        );
        if !component.namespace.is_empty() {
            println!(
                "  {:<20} prefix '{}{}'",
                "",
                component.namespace,
                component.separator
            );
        }
    }
    let planned: usize = quotas.iter().map(|q| q.count).sum();
    println!(
        "Total: {} of {} requested keys",
        format_number(planned as u64),
        format_number(total as u64)
    );
}

/// One-line description of a strategy and its parameters
pub fn describe_strategy(strategy: &Strategy) -> String {
    match strategy {
        Strategy::Stochastic => "stochastic (random a-z, length 5-10)".to_string(),
        Strategy::DeterministicSequence => "deterministic sequence (0, 1, 2, ...)".to_string(),
        Strategy::NormalizedInverseCdf { target, keyspace } => {
            let target = match target {
                InverseCdfTarget::Uniform => "uniform".to_string(),
                InverseCdfTarget::Pareto { b } => format!("pareto b={}", b),
            };
            format!(
                "inverse-cdf {} (base {}, length {}-{})",
                target,
                keyspace.charset.base(),
                keyspace.lengths.min,
                keyspace.lengths.max
            )
        }
        Strategy::NormalizedZipfRank { a, keyspace } => format!(
            "zipf-rank a={} (base {}, length {}-{})",
            a,
            keyspace.charset.base(),
            keyspace.lengths.min,
            keyspace.lengths.max
        ),
    }
}

/// Print where keys were written and whether the count fell short
pub fn print_run_report(generated: usize, requested: usize, output: &Path) {
    println!("Writing {} keys to '{}'...", generated, output.display());
    if generated != requested {
        println!(
            "Note: generated {} instead of {} due to improper fractions",
            generated, requested
        );
    }
}

/// Pick up to `k` distinct keys at random
pub fn select_sample<'a>(keys: &'a [String], k: usize, rng: &mut dyn RngCore) -> Vec<&'a String> {
    keys.choose_multiple(rng, k.min(keys.len())).collect()
}

/// Print a random sample of the generated keys
pub fn sample_print(keys: &[String], k: usize, rng: &mut dyn RngCore) {
    let sample = select_sample(keys, k, rng);
    if sample.is_empty() {
        println!("(no keys)");
        return;
    }

    println!();
    println!("--- Sample of Generated Keys ---");
    for key in sample {
        println!("{}", key);
    }
    println!("...");
}

/// Format number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
