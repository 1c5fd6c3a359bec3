use super::criteria::{Criterion, Direction};
use super::error::MalformedInput;
use super::matrix::{build_matrix, Alternative, DecisionMatrix, InputMode};
use super::ranking::{rank, ScoreResult, Scored, Separation};

/// Run TOPSIS over `matrix` and return one ranked result per row.
///
/// Pure: no state survives the call and identical inputs give bit-identical
/// output. `weights` are used as given; keeping them on a 1.0 budget is the
/// caller's job (see [`super::validation::validate_weights`]).
///
/// Steps: vector-normalize each column, apply weights, take the ideal and
/// anti-ideal value per column according to its direction, measure each
/// row's Euclidean distance to both, score `d- / (d+ + d-)`, then rank.
pub fn score(
    matrix: &DecisionMatrix,
    weights: &[f64],
    directions: &[Direction],
) -> Result<Vec<ScoreResult>, MalformedInput> {
    let columns = matrix.columns();
    if weights.len() != columns {
        return Err(MalformedInput::WeightCount {
            expected: columns,
            got: weights.len(),
        });
    }
    if directions.len() != columns {
        return Err(MalformedInput::DirectionCount {
            expected: columns,
            got: directions.len(),
        });
    }

    let weighted = weighted_normalized(matrix, weights);
    let (ideal, anti_ideal) = ideal_solutions(&weighted, directions);

    let scored = matrix
        .rows()
        .iter()
        .zip(&weighted)
        .map(|(alt, row)| {
            let separation = Separation {
                to_ideal: distance(row, &ideal),
                to_anti_ideal: distance(row, &anti_ideal),
            };
            Scored {
                alternative_id: alt.id.clone(),
                preference_score: closeness(separation),
                separation,
            }
        })
        .collect();

    Ok(rank(scored))
}

/// Build the matrix from `alternatives` and score it in one call.
///
/// Under [`InputMode::Banded`] every column is treated as Benefit.
pub fn rank_alternatives(
    alternatives: &[Alternative],
    criteria: &[Criterion],
    mode: InputMode,
) -> Result<Vec<ScoreResult>, MalformedInput> {
    let matrix = build_matrix(alternatives, criteria, mode)?;
    let weights: Vec<f64> = criteria.iter().map(|c| c.weight).collect();
    score(&matrix, &weights, &mode.directions(criteria))
}

/// `norm[i][j] * weights[j]`, with an all-zero column normalizing to zeros.
fn weighted_normalized(matrix: &DecisionMatrix, weights: &[f64]) -> Vec<Vec<f64>> {
    let denominators: Vec<f64> = (0..matrix.columns())
        .map(|j| matrix.column(j).map(|v| v * v).sum::<f64>().sqrt())
        .collect();

    matrix
        .rows()
        .iter()
        .map(|alt| {
            alt.values
                .iter()
                .zip(&denominators)
                .zip(weights)
                .map(|((value, denom), weight)| {
                    let norm = if *denom == 0.0 { 0.0 } else { value / denom };
                    norm * weight
                })
                .collect()
        })
        .collect()
}

fn ideal_solutions(weighted: &[Vec<f64>], directions: &[Direction]) -> (Vec<f64>, Vec<f64>) {
    directions
        .iter()
        .enumerate()
        .map(|(j, direction)| {
            let (min, max) = weighted.iter().map(|row| row[j]).fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), v| (lo.min(v), hi.max(v)),
            );
            match direction {
                Direction::Benefit => (max, min),
                Direction::Cost => (min, max),
            }
        })
        .unzip()
}

fn distance(row: &[f64], point: &[f64]) -> f64 {
    row.iter()
        .zip(point)
        .map(|(v, p)| (v - p) * (v - p))
        .sum::<f64>()
        .sqrt()
}

fn closeness(separation: Separation) -> f64 {
    let total = separation.to_ideal + separation.to_anti_ideal;
    if total == 0.0 {
        0.0
    } else {
        separation.to_anti_ideal / total
    }
}
