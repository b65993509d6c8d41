use crate::types::semester::Semester;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw evaluator scores keyed by criterion name, each on the 0 to 10 scale.
pub type ScoreSet = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub student_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub admin: bool,
}

/// A submitted, scored evaluation. Only built by the submission flow so that
/// `overall_score` always matches `scores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: String,
    pub student_name: String,
    pub semester: Semester,
    pub evaluator: String,
    pub date: String,
    pub scores: ScoreSet,
    pub overall_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_comments: Option<String>,
}

/// What the evaluation form collects before the overall score is computed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationDraft {
    pub student_name: String,
    pub semester: Option<Semester>,
    pub evaluator: String,
    pub scores: ScoreSet,
    pub professor_prompt: Option<String>,
    pub ai_comments: Option<String>,
}
