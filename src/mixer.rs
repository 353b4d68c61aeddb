//! Component mixing
//!
//! Splits the requested key count across components by weight, generates each
//! component's share in declaration order, and shuffles the combined output once.
//!
//! Quotas are truncated (`floor(total * weight)`), so the realized count can fall short
//! of the request. The shortfall is reported, never rebalanced.

use crate::component::Component;
use crate::error::KeyGenError;
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::Serialize;

/// Tolerance used when checking that weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Number of keys a component owes to the dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quota {
    pub name: String,
    pub strategy: &'static str,
    pub weight: f64,
    pub count: usize,
}

/// Sum of all component weights
pub fn weight_sum(components: &[Component]) -> f64 {
    components.iter().map(|c| c.weight).sum()
}

/// Whether weights sum to 1.0 within a relative tolerance
pub fn weights_balanced(components: &[Component]) -> bool {
    let sum = weight_sum(components);
    (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE * sum.abs().max(1.0)
}

/// Compute each component's key count for a total of `total` keys
///
/// Warns when the weights do not sum to 1.0 but uses them as given.
pub fn compute_component_counts(components: &[Component], total: usize) -> Vec<Quota> {
    if !weights_balanced(components) {
        log::warn!(
            "Component weights sum to {:.6}, not 1.0",
            weight_sum(components)
        );
    }

    components
        .iter()
        .map(|c| Quota {
            name: c.name.clone(),
            strategy: c.strategy.label(),
            weight: c.weight,
            count: (total as f64 * c.weight).floor() as usize,
        })
        .collect()
}

/// Generate, concatenate and shuffle keys for every component
pub fn generate_all_keys(
    components: &[Component],
    total: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<String>, KeyGenError> {
    let quotas = compute_component_counts(components, total);
    generate_with_quotas(components, &quotas, total, rng)
}

/// Generate keys for precomputed quotas
///
/// `quotas[i]` must belong to `components[i]`, as returned by
/// [`compute_component_counts`].
pub fn generate_with_quotas(
    components: &[Component],
    quotas: &[Quota],
    total: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<String>, KeyGenError> {
    if components.len() != quotas.len() {
        return Err(KeyGenError::InvalidInput(format!(
            "{} quotas for {} components",
            quotas.len(),
            components.len()
        )));
    }

    let mut all_keys = Vec::with_capacity(quotas.iter().map(|q| q.count).sum());
    for (component, quota) in components.iter().zip(quotas) {
        log::info!(
            "Generating {:>6} for '{}' ({})...",
            quota.count,
            component.name,
            component.strategy
        );
        all_keys.extend(component.generate(quota.count, rng)?);
    }

    if all_keys.len() < total {
        log::info!(
            "Generated {} instead of {} keys due to truncated weight fractions",
            all_keys.len(),
            total
        );
    }

    all_keys.shuffle(rng);
    Ok(all_keys)
}
