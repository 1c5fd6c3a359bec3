use thiserror::Error;

/// Structural problems with the engine's input. Numeric edge cases
/// (zero columns, identical rows, a single alternative) are not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedInput {
    #[error("no alternatives to rank")]
    NoAlternatives,
    #[error("at least one criterion is required")]
    NoCriteria,
    #[error("alternative '{id}' has {got} values, expected {expected}")]
    RowLength {
        id: String,
        expected: usize,
        got: usize,
    },
    #[error("{got} weights supplied for {expected} criteria")]
    WeightCount { expected: usize, got: usize },
    #[error("{got} directions supplied for {expected} criteria")]
    DirectionCount { expected: usize, got: usize },
    #[error("alternative '{id}' has a non-finite value in column {column}")]
    NonFinite { id: String, column: usize },
}
