use std::collections::HashSet;

use super::criteria::Criterion;

/// Allowed drift of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Validate the weight budget before the engine is invoked.
/// Returns all validation errors at once (not just the first).
///
/// The engine itself uses weights as given; refusing or re-normalizing an
/// off-budget set is decided by the caller's [`super::WeightPolicy`].
pub fn validate_weights(criteria: &[Criterion]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if criteria.is_empty() {
        errors.push("scoring.criteria: at least one criterion is required".to_string());
        return Err(errors);
    }

    let mut seen = HashSet::new();
    for (i, criterion) in criteria.iter().enumerate() {
        if !seen.insert(criterion.id) {
            errors.push(format!(
                "scoring.criteria[{}]: duplicate criterion '{}'",
                i, criterion.id
            ));
        }
        if !criterion.weight.is_finite() {
            errors.push(format!(
                "scoring.criteria[{}].weight: must be a finite number",
                i
            ));
        } else if !(0.0..=1.0).contains(&criterion.weight) {
            errors.push(format!(
                "scoring.criteria[{}].weight: {} is outside [0, 1]",
                i, criterion.weight
            ));
        }
    }

    let sum = weight_sum(criteria);
    if sum.is_finite() && (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(format!(
            "scoring.criteria: weights sum to {:.6}, expected 1.0",
            sum
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn weight_sum(criteria: &[Criterion]) -> f64 {
    criteria.iter().map(|c| c.weight).sum()
}

/// Scale weights so they sum to 1.0. Returns false (and leaves the weights
/// untouched) when the sum is not positive and finite.
pub fn normalize_weights(criteria: &mut [Criterion]) -> bool {
    let sum = weight_sum(criteria);
    if !sum.is_finite() || sum <= 0.0 {
        return false;
    }
    for criterion in criteria.iter_mut() {
        criterion.weight /= sum;
    }
    true
}
