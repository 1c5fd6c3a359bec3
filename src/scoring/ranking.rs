use serde::Serialize;
use std::cmp::Ordering;

/// Euclidean distances of one alternative to the ideal and anti-ideal points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Separation {
    pub to_ideal: f64,
    pub to_anti_ideal: f64,
}

/// An alternative's closeness score before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub alternative_id: String,
    pub preference_score: f64,
    pub separation: Separation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub alternative_id: String,
    pub preference_score: f64,
    pub rank: usize,
    pub separation: Separation,
}

/// Descending by score. Equal scores compare equal so a stable sort keeps
/// input order among ties.
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Order scored alternatives and assign ranks 1..=R.
///
/// Ties keep input order (the earlier alternative gets the smaller rank),
/// so every alternative receives a distinct rank.
pub fn rank(scored: Vec<Scored>) -> Vec<ScoreResult> {
    let mut scored = scored;
    // Vec::sort_by is stable
    scored.sort_by(|a, b| compare_scores(a.preference_score, b.preference_score));

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, s)| ScoreResult {
            alternative_id: s.alternative_id,
            preference_score: s.preference_score,
            rank: idx + 1,
            separation: s.separation,
        })
        .collect()
}
