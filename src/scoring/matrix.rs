use serde::{Deserialize, Serialize};

use super::bands;
use super::criteria::{Criterion, Direction};
use super::error::MalformedInput;

/// An opaque id plus one raw value per criterion, in criterion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub id: String,
    pub values: Vec<f64>,
}

impl Alternative {
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }
}

/// How raw attribute values enter the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Map each value to 1..=5 points first; every column becomes Benefit
    #[default]
    Banded,
    /// Use values unchanged; each column keeps its declared direction
    Raw,
}

impl InputMode {
    /// Directions the pipeline should use for `criteria` under this mode.
    pub fn directions(self, criteria: &[Criterion]) -> Vec<Direction> {
        match self {
            InputMode::Banded => vec![Direction::Benefit; criteria.len()],
            InputMode::Raw => criteria.iter().map(|c| c.direction).collect(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Banded => "banded",
            InputMode::Raw => "raw",
        }
    }
}

/// Rectangular R x C table of finite values. R >= 1, C >= 1.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    columns: usize,
    rows: Vec<Alternative>,
}

impl DecisionMatrix {
    pub fn new(columns: usize, rows: Vec<Alternative>) -> Result<Self, MalformedInput> {
        if columns == 0 {
            return Err(MalformedInput::NoCriteria);
        }
        if rows.is_empty() {
            return Err(MalformedInput::NoAlternatives);
        }
        for row in &rows {
            check_row(row, columns)?;
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Alternative] {
        &self.rows
    }

    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row.values[j])
    }
}

fn check_row(row: &Alternative, columns: usize) -> Result<(), MalformedInput> {
    if row.values.len() != columns {
        return Err(MalformedInput::RowLength {
            id: row.id.clone(),
            expected: columns,
            got: row.values.len(),
        });
    }
    if let Some(column) = row.values.iter().position(|v| !v.is_finite()) {
        return Err(MalformedInput::NonFinite {
            id: row.id.clone(),
            column,
        });
    }
    Ok(())
}

/// Build the decision matrix for `alternatives`, columns in `criteria` order.
///
/// Rows are never padded or truncated: a value vector whose length differs
/// from the criterion count is rejected.
pub fn build_matrix(
    alternatives: &[Alternative],
    criteria: &[Criterion],
    mode: InputMode,
) -> Result<DecisionMatrix, MalformedInput> {
    let columns = criteria.len();
    if columns == 0 {
        return Err(MalformedInput::NoCriteria);
    }
    if alternatives.is_empty() {
        return Err(MalformedInput::NoAlternatives);
    }

    let rows = alternatives
        .iter()
        .map(|alt| {
            check_row(alt, columns)?;
            let values = match mode {
                InputMode::Raw => alt.values.clone(),
                InputMode::Banded => alt
                    .values
                    .iter()
                    .zip(criteria)
                    .map(|(value, criterion)| f64::from(bands::points(criterion.id, *value)))
                    .collect(),
            };
            Ok(Alternative {
                id: alt.id.clone(),
                values,
            })
        })
        .collect::<Result<Vec<_>, MalformedInput>>()?;

    DecisionMatrix::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::criteria::default_criteria;

    fn listing_row(id: &str) -> Alternative {
        // price, distance, facility, rating, security
        Alternative::new(id, vec![750_000.0, 0.3, 9.0, 4.0, 3.0])
    }

    #[test]
    fn test_raw_mode_passes_values_through() {
        let criteria = default_criteria();
        let matrix = build_matrix(&[listing_row("a")], &criteria, InputMode::Raw).unwrap();
        assert_eq!(matrix.rows()[0].values, vec![750_000.0, 0.3, 9.0, 4.0, 3.0]);
        assert_eq!(matrix.columns(), 5);
        assert_eq!(matrix.len(), 1);
    }

    #[test]
    fn test_banded_mode_maps_to_points() {
        let criteria = default_criteria();
        let matrix = build_matrix(&[listing_row("a")], &criteria, InputMode::Banded).unwrap();
        assert_eq!(matrix.rows()[0].values, vec![4.0, 5.0, 5.0, 4.0, 2.0]);
    }

    #[test]
    fn test_banded_mode_directions_are_all_benefit() {
        let criteria = default_criteria();
        let directions = InputMode::Banded.directions(&criteria);
        assert!(directions.iter().all(|d| *d == Direction::Benefit));
    }

    #[test]
    fn test_raw_mode_keeps_declared_directions() {
        let criteria = default_criteria();
        let directions = InputMode::Raw.directions(&criteria);
        assert_eq!(directions[0], Direction::Cost);
        assert_eq!(directions[1], Direction::Cost);
        assert_eq!(directions[2], Direction::Benefit);
    }

    #[test]
    fn test_short_row_rejected() {
        let criteria = default_criteria();
        let alternatives = vec![listing_row("a"), Alternative::new("b", vec![1.0, 2.0])];
        let err = build_matrix(&alternatives, &criteria, InputMode::Raw).unwrap_err();
        assert_eq!(
            err,
            MalformedInput::RowLength {
                id: "b".to_string(),
                expected: 5,
                got: 2
            }
        );
    }

    #[test]
    fn test_long_row_rejected_in_banded_mode() {
        let criteria = default_criteria();
        let alternatives = vec![Alternative::new("x", vec![1.0; 6])];
        let err = build_matrix(&alternatives, &criteria, InputMode::Banded).unwrap_err();
        assert!(matches!(err, MalformedInput::RowLength { got: 6, .. }));
    }

    #[test]
    fn test_empty_alternatives_rejected() {
        let criteria = default_criteria();
        let err = build_matrix(&[], &criteria, InputMode::Raw).unwrap_err();
        assert_eq!(err, MalformedInput::NoAlternatives);
    }

    #[test]
    fn test_no_criteria_rejected() {
        let err = build_matrix(&[listing_row("a")], &[], InputMode::Raw).unwrap_err();
        assert_eq!(err, MalformedInput::NoCriteria);
    }

    #[test]
    fn test_nan_rejected_before_banding() {
        let criteria = default_criteria();
        let alternatives = vec![Alternative::new("n", vec![1.0, f64::NAN, 1.0, 1.0, 1.0])];
        let err = build_matrix(&alternatives, &criteria, InputMode::Banded).unwrap_err();
        assert_eq!(
            err,
            MalformedInput::NonFinite {
                id: "n".to_string(),
                column: 1
            }
        );
    }

    #[test]
    fn test_column_iterates_in_row_order() {
        let matrix = DecisionMatrix::new(
            2,
            vec![
                Alternative::new("a", vec![1.0, 2.0]),
                Alternative::new("b", vec![3.0, 4.0]),
            ],
        )
        .unwrap();
        assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![2.0, 4.0]);
    }
}
