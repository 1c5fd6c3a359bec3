use serde::{Deserialize, Serialize};
use std::fmt;

/// The listing attributes a criterion can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    Price,
    Distance,
    Facility,
    Rating,
    Security,
}

impl CriterionKind {
    pub const ALL: [CriterionKind; 5] = [
        CriterionKind::Price,
        CriterionKind::Distance,
        CriterionKind::Facility,
        CriterionKind::Rating,
        CriterionKind::Security,
    ];

    /// Natural direction of the attribute: cheaper and closer are better,
    /// everything else is better when higher.
    pub fn default_direction(self) -> Direction {
        match self {
            CriterionKind::Price | CriterionKind::Distance => Direction::Cost,
            CriterionKind::Facility | CriterionKind::Rating | CriterionKind::Security => {
                Direction::Benefit
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CriterionKind::Price => "price",
            CriterionKind::Distance => "distance",
            CriterionKind::Facility => "facility",
            CriterionKind::Rating => "rating",
            CriterionKind::Security => "security",
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher raw value is more desirable
    Benefit,
    /// Lower raw value is more desirable
    Cost,
}

/// A single weighted criterion.
///
/// `direction` may be omitted in YAML, in which case the attribute's
/// natural direction is used (see [`CriterionKind::default_direction`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub id: CriterionKind,
    pub direction: Direction,
    pub weight: f64,
}

impl Criterion {
    pub fn new(id: CriterionKind, weight: f64) -> Self {
        Self {
            id,
            direction: id.default_direction(),
            weight,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCriterion {
    id: CriterionKind,
    #[serde(default)]
    direction: Option<Direction>,
    weight: f64,
}

impl<'de> Deserialize<'de> for Criterion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawCriterion::deserialize(deserializer)?;
        Ok(Criterion {
            id: raw.id,
            direction: raw.direction.unwrap_or_else(|| raw.id.default_direction()),
            weight: raw.weight,
        })
    }
}

/// Default criterion set, in column order. Weights sum to 1.0.
pub fn default_criteria() -> Vec<Criterion> {
    vec![
        Criterion::new(CriterionKind::Price, 0.30),
        Criterion::new(CriterionKind::Distance, 0.25),
        Criterion::new(CriterionKind::Facility, 0.15),
        Criterion::new(CriterionKind::Rating, 0.15),
        Criterion::new(CriterionKind::Security, 0.15),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directions() {
        assert_eq!(CriterionKind::Price.default_direction(), Direction::Cost);
        assert_eq!(CriterionKind::Distance.default_direction(), Direction::Cost);
        assert_eq!(CriterionKind::Facility.default_direction(), Direction::Benefit);
        assert_eq!(CriterionKind::Rating.default_direction(), Direction::Benefit);
        assert_eq!(CriterionKind::Security.default_direction(), Direction::Benefit);
    }

    #[test]
    fn test_default_criteria_sum_to_one() {
        let sum: f64 = default_criteria().iter().map(|c| c.weight).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_criteria_cover_every_kind_in_order() {
        let ids: Vec<CriterionKind> = default_criteria().iter().map(|c| c.id).collect();
        assert_eq!(ids, CriterionKind::ALL.to_vec());
    }

    #[test]
    fn test_parse_criterion_without_direction() {
        let criterion: Criterion = serde_saphyr::from_str("id: price\nweight: 0.4\n").unwrap();
        assert_eq!(criterion.id, CriterionKind::Price);
        assert_eq!(criterion.direction, Direction::Cost);
        assert_eq!(criterion.weight, 0.4);
    }

    #[test]
    fn test_parse_criterion_direction_override() {
        let yaml = "id: distance\ndirection: benefit\nweight: 0.2\n";
        let criterion: Criterion = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(criterion.direction, Direction::Benefit);
    }

    #[test]
    fn test_parse_criterion_rejects_unknown_kind() {
        let result: Result<Criterion, _> = serde_saphyr::from_str("id: parking\nweight: 0.2\n");
        assert!(result.is_err());
    }
}
