use crate::types::semester::Semester;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl GradeBand {
    pub fn for_score(score: f64) -> Self {
        if score >= 9.0 {
            GradeBand::Excellent
        } else if score >= 7.0 {
            GradeBand::Good
        } else {
            GradeBand::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeBand::Excellent => "excellent",
            GradeBand::Good => "good",
            GradeBand::NeedsImprovement => "needs improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRow {
    pub id: String,
    pub student_name: String,
    pub semester: Semester,
    pub date: String,
    pub evaluator: String,
    pub overall_score: f64,
    pub band: GradeBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAverage {
    pub student_name: String,
    pub student_id: Option<String>,
    pub evaluations: usize,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterAverage {
    pub semester: Semester,
    pub evaluations: usize,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeminarReport {
    pub total_evaluations: usize,
    pub total_students: usize,
    pub evaluations: Vec<EvaluationRow>,
    pub students: Vec<StudentAverage>,
    pub semesters: Vec<SemesterAverage>,
}
