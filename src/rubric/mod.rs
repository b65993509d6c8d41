pub mod defaults;

use crate::error::{Result, RubricError};
use crate::types::criterion::Criterion;
use crate::types::semester::Semester;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// Widest permitted deviation of a rubric's weight sum from 1.0. A registry
/// may check more strictly, never more loosely.
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-6;

/// Read-only lookup from semester to its ordered, validated criteria.
///
/// Every rubric is checked when the registry is built, so a registry value
/// only exists if all of its weight tables sum to 1.0.
#[derive(Debug, Clone)]
pub struct RubricRegistry {
    rubrics: BTreeMap<Semester, Vec<Criterion>>,
    tolerance: f64,
}

impl RubricRegistry {
    pub fn new(rubrics: BTreeMap<Semester, Vec<Criterion>>) -> Result<Self> {
        Self::with_tolerance(rubrics, DEFAULT_WEIGHT_TOLERANCE)
    }

    pub fn with_tolerance(
        mut rubrics: BTreeMap<Semester, Vec<Criterion>>,
        tolerance: f64,
    ) -> Result<Self> {
        if rubrics.is_empty() {
            return Err(RubricError::ConfigParse(
                "at least one semester rubric is required".to_string(),
            ));
        }
        if !(tolerance > 0.0 && tolerance <= DEFAULT_WEIGHT_TOLERANCE) {
            return Err(RubricError::ConfigParse(format!(
                "weight tolerance must be in (0, {DEFAULT_WEIGHT_TOLERANCE:e}] (found {tolerance})"
            )));
        }

        for criterion in rubrics.values_mut().flatten() {
            criterion.name = criterion.name.trim().to_string();
        }

        let registry = Self { rubrics, tolerance };
        for semester in registry.rubrics.keys() {
            if let Err(err) = registry.validate(*semester) {
                warn!(%semester, error = %err, "rejecting rubric");
                return Err(err);
            }
        }
        debug!(semesters = registry.rubrics.len(), "rubric registry ready");
        Ok(registry)
    }

    /// Registry over the built-in seminar rubrics.
    pub fn builtin() -> Result<Self> {
        Self::new(defaults::default_rubrics())
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn semesters(&self) -> impl Iterator<Item = Semester> + '_ {
        self.rubrics.keys().copied()
    }

    pub fn criteria_for(&self, semester: Semester) -> Result<&[Criterion]> {
        self.rubrics
            .get(&semester)
            .map(Vec::as_slice)
            .ok_or_else(|| RubricError::UnknownSemester(semester.to_string()))
    }

    /// Lookup by a free-form semester label, as received from a form field.
    pub fn criteria_for_label(&self, label: &str) -> Result<&[Criterion]> {
        self.criteria_for(label.parse()?)
    }

    pub fn validate(&self, semester: Semester) -> Result<()> {
        check_rubric(semester, self.criteria_for(semester)?, self.tolerance)
    }

    /// Text summary of a rubric, used as context for the comment assistant.
    pub fn describe(&self, semester: Semester) -> Result<String> {
        let lines = self
            .criteria_for(semester)?
            .iter()
            .map(|criterion| {
                let mut line = format!(
                    "- {} ({}%)",
                    criterion.name,
                    format_percent(criterion.weight)
                );
                if let Some(description) = &criterion.description {
                    line.push_str(": ");
                    line.push_str(description);
                }
                line
            })
            .collect::<Vec<_>>();
        Ok(lines.join("\n"))
    }
}

fn check_rubric(semester: Semester, criteria: &[Criterion], tolerance: f64) -> Result<()> {
    if criteria.is_empty() {
        return Err(RubricError::invalid_rubric(semester, "no criteria defined"));
    }

    let mut seen = HashSet::new();
    for criterion in criteria {
        let name = criterion.name.as_str();
        if name.is_empty() {
            return Err(RubricError::invalid_rubric(
                semester,
                "criterion names must be non-empty",
            ));
        }
        if !seen.insert(name) {
            return Err(RubricError::invalid_rubric(
                semester,
                format!("duplicate criterion: {name}"),
            ));
        }
        if !(criterion.weight > 0.0 && criterion.weight <= 1.0) {
            return Err(RubricError::invalid_rubric(
                semester,
                format!(
                    "weight for '{name}' must be in (0, 1] (found {})",
                    criterion.weight
                ),
            ));
        }
    }

    let weight_sum: f64 = criteria.iter().map(|criterion| criterion.weight).sum();
    if (weight_sum - 1.0).abs() > tolerance {
        return Err(RubricError::invalid_rubric(
            semester,
            format!("weights must sum to 1.0 (found {weight_sum:.6})"),
        ));
    }
    Ok(())
}

fn format_percent(weight: f64) -> String {
    let rendered = format!("{:.1}", weight * 100.0);
    rendered
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(rendered)
}
