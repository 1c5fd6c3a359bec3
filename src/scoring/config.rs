use serde::{Deserialize, Serialize};

use super::criteria::{default_criteria, Criterion};
use super::matrix::InputMode;
use super::validation::{normalize_weights, validate_weights, weight_sum};

/// What to do when the configured weights do not sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPolicy {
    /// Refuse to rank
    #[default]
    Reject,
    /// Divide every weight by the sum, then rank
    Renormalize,
}

/// Main scoring configuration.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   mode: banded
///   weight_policy: reject
///   criteria:
///     - { id: price, weight: 0.30 }
///     - { id: distance, weight: 0.25 }
///     - { id: facility, weight: 0.15 }
///     - { id: rating, weight: 0.15 }
///     - { id: security, weight: 0.15, direction: benefit }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Input mode (default: banded)
    #[serde(default)]
    pub mode: InputMode,

    /// Weight budget policy (default: reject)
    #[serde(default)]
    pub weight_policy: WeightPolicy,

    /// Criteria in column order (default: all five listing attributes)
    #[serde(default = "default_criteria")]
    pub criteria: Vec<Criterion>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            weight_policy: WeightPolicy::default(),
            criteria: default_criteria(),
        }
    }
}

/// Criteria ready to hand to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCriteria {
    pub criteria: Vec<Criterion>,
    /// Original weight sum when the budget had to be re-normalized
    pub renormalized_from: Option<f64>,
}

impl ScoringConfig {
    /// Apply the weight policy. Errors list every problem found.
    pub fn resolve_criteria(&self) -> Result<ResolvedCriteria, Vec<String>> {
        match validate_weights(&self.criteria) {
            Ok(()) => Ok(ResolvedCriteria {
                criteria: self.criteria.clone(),
                renormalized_from: None,
            }),
            Err(errors) if self.weight_policy == WeightPolicy::Reject => Err(errors),
            Err(_) => {
                let mut criteria = self.criteria.clone();
                let sum = weight_sum(&criteria);
                if !normalize_weights(&mut criteria) {
                    return Err(vec![format!(
                        "scoring.criteria: cannot re-normalize weights summing to {}",
                        sum
                    )]);
                }
                validate_weights(&criteria)?;
                Ok(ResolvedCriteria {
                    criteria,
                    renormalized_from: Some(sum),
                })
            }
        }
    }
}
