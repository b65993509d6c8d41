use crate::error::{Result, RubricError};
use crate::rubric::{defaults, RubricRegistry, DEFAULT_WEIGHT_TOLERANCE};
use crate::scoring::{DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::types::criterion::Criterion;
use crate::types::semester::Semester;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RubricConfig {
    pub scoring: Option<ScoringConfig>,
    pub semesters: Option<HashMap<String, SemesterConfig>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub decimals: Option<u32>,
    pub tolerance: Option<f64>,
}

/// A semester rubric, either as weighted criteria or as legacy labels that
/// carry their weight in the name (`"Objectives (25%)"`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SemesterConfig {
    #[serde(default)]
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub legacy: Vec<String>,
}

impl RubricConfig {
    pub fn decimals(&self) -> u32 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.decimals)
            .unwrap_or(DEFAULT_DECIMALS)
    }

    pub fn tolerance(&self) -> f64 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.tolerance)
            .unwrap_or(DEFAULT_WEIGHT_TOLERANCE)
    }

    pub fn validate(&self) -> Result<()> {
        if self.decimals() > MAX_DECIMALS {
            return Err(RubricError::ConfigParse(format!(
                "scoring.decimals must be between 0 and {MAX_DECIMALS}"
            )));
        }
        let tolerance = self.tolerance();
        if !(tolerance > 0.0 && tolerance <= DEFAULT_WEIGHT_TOLERANCE) {
            return Err(RubricError::ConfigParse(format!(
                "scoring.tolerance must be greater than 0.0 and at most {DEFAULT_WEIGHT_TOLERANCE:e}"
            )));
        }

        let mut seen = HashMap::<Semester, &str>::new();
        for (key, semester) in self.semesters.iter().flatten() {
            let parsed = key
                .parse::<Semester>()
                .map_err(|_| RubricError::ConfigParse(format!("unknown semester key: {key}")))?;
            if let Some(previous) = seen.insert(parsed, key) {
                return Err(RubricError::ConfigParse(format!(
                    "semesters.{previous} and semesters.{key} both configure {parsed}"
                )));
            }
            if !semester.criteria.is_empty() && !semester.legacy.is_empty() {
                return Err(RubricError::ConfigParse(format!(
                    "semesters.{key} cannot mix criteria and legacy entries"
                )));
            }
        }
        Ok(())
    }

    /// Rubric tables with configured semesters replacing the built-in ones.
    /// Legacy labels are converted to weighted criteria here, once.
    pub fn rubric_tables(&self) -> Result<BTreeMap<Semester, Vec<Criterion>>> {
        let mut tables = defaults::default_rubrics();
        for (key, semester) in self.semesters.iter().flatten() {
            let parsed = key
                .parse::<Semester>()
                .map_err(|_| RubricError::ConfigParse(format!("unknown semester key: {key}")))?;
            let criteria = if semester.legacy.is_empty() {
                semester.criteria.clone()
            } else {
                semester
                    .legacy
                    .iter()
                    .map(|label| Criterion::from_legacy_label(label))
                    .collect::<Result<Vec<_>>>()?
            };
            tables.insert(parsed, criteria);
        }
        Ok(tables)
    }

    pub fn registry(&self) -> Result<RubricRegistry> {
        self.validate()?;
        RubricRegistry::with_tolerance(self.rubric_tables()?, self.tolerance())
    }
}
