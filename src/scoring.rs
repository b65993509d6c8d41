use crate::error::{Result, RubricError};
use crate::rubric::RubricRegistry;
use crate::types::criterion::Criterion;
use crate::types::evaluation::ScoreSet;
use crate::types::semester::Semester;
use tracing::debug;

pub const MIN_RAW_SCORE: f64 = 0.0;
pub const MAX_RAW_SCORE: f64 = 10.0;
pub const DEFAULT_DECIMALS: u32 = 2;
pub const MAX_DECIMALS: u32 = 6;

/// Computes the overall score of an evaluation from its raw criterion scores.
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator<'a> {
    registry: &'a RubricRegistry,
    decimals: u32,
}

impl<'a> ScoreAggregator<'a> {
    pub fn new(registry: &'a RubricRegistry) -> Self {
        Self {
            registry,
            decimals: DEFAULT_DECIMALS,
        }
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals.min(MAX_DECIMALS);
        self
    }

    pub fn registry(&self) -> &'a RubricRegistry {
        self.registry
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Weighted overall score, rounded to the configured precision.
    pub fn aggregate(&self, semester: Semester, raw_scores: &ScoreSet) -> Result<f64> {
        let overall = round_to(self.aggregate_unrounded(semester, raw_scores)?, self.decimals);
        debug!(%semester, overall, "aggregated score set");
        Ok(overall)
    }

    pub fn aggregate_unrounded(&self, semester: Semester, raw_scores: &ScoreSet) -> Result<f64> {
        weighted_sum(self.registry.criteria_for(semester)?, raw_scores)
    }
}

/// `Σ raw[c.name] * c.weight` over the rubric, after checking that the score
/// set is complete, in range and free of names the rubric does not define.
///
/// The sum is divided by the total weight, so the rounding slack a registry
/// allows on the weights never moves a score outside `[0, 10]`.
pub fn weighted_sum(criteria: &[Criterion], raw_scores: &ScoreSet) -> Result<f64> {
    let missing = criteria
        .iter()
        .filter(|criterion| !raw_scores.contains_key(&criterion.name))
        .map(|criterion| criterion.name.clone())
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(RubricError::IncompleteScoreSet { missing });
    }

    for (name, value) in raw_scores {
        if !criteria.iter().any(|criterion| &criterion.name == name) {
            return Err(RubricError::UnknownCriterion(name.clone()));
        }
        if !(MIN_RAW_SCORE..=MAX_RAW_SCORE).contains(value) {
            return Err(RubricError::ScoreOutOfRange {
                criterion: name.clone(),
                value: *value,
            });
        }
    }

    let total_weight: f64 = criteria.iter().map(|criterion| criterion.weight).sum();
    let weighted: f64 = criteria
        .iter()
        .map(|criterion| raw_scores[&criterion.name] * criterion.weight)
        .sum();
    if total_weight > 0.0 {
        Ok(weighted / total_weight)
    } else {
        Ok(weighted)
    }
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    (value * factor).round() / factor
}
