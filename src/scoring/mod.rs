pub mod bands;
pub mod config;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod ranking;
pub mod validation;

pub use config::*;
pub use criteria::{default_criteria, Criterion, CriterionKind, Direction};
pub use engine::{rank_alternatives, score};
pub use error::MalformedInput;
pub use matrix::{build_matrix, Alternative, DecisionMatrix, InputMode};
pub use ranking::{rank, ScoreResult, Separation};
pub use validation::{normalize_weights, validate_weights};
