use thiserror::Error;

#[derive(Error, Debug)]
pub enum RubricError {
    #[error("unknown semester: {0}")]
    UnknownSemester(String),

    #[error("invalid rubric for {semester}: {reason}")]
    InvalidRubric { semester: String, reason: String },

    #[error("incomplete score set, missing: {}", .missing.join(", "))]
    IncompleteScoreSet { missing: Vec<String> },

    #[error("score out of range for '{criterion}': {value} (expected 0 to 10)")]
    ScoreOutOfRange { criterion: String, value: f64 },

    #[error("invalid score entry '{0}' (expected NAME=VALUE)")]
    InvalidScoreEntry(String),

    #[error("unknown criterion in score set: {0}")]
    UnknownCriterion(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("record id already exists: {0}")]
    DuplicateId(String),

    #[error("{0} records cannot be modified once created")]
    ImmutableRecord(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RubricError {
    pub(crate) fn invalid_rubric(semester: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidRubric {
            semester: semester.to_string(),
            reason: reason.into(),
        }
    }

    /// Errors an evaluator can fix by correcting the submitted form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownSemester(_)
                | Self::IncompleteScoreSet { .. }
                | Self::ScoreOutOfRange { .. }
                | Self::UnknownCriterion(_)
                | Self::InvalidScoreEntry(_)
                | Self::MissingField(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RubricError>;
