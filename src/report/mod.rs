pub mod json;
pub mod md;

use crate::error::RubricError;
use crate::scoring::round_to;
use crate::types::evaluation::{Evaluation, Student};
use crate::types::report::{
    EvaluationRow, GradeBand, SemesterAverage, SeminarReport, StudentAverage,
};
use crate::types::semester::Semester;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &SeminarReport, format: OutputFormat) -> Result<String, RubricError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(RubricError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

/// Aggregates stored evaluations into the seminar overview. Evaluations are
/// matched to students by name; names with no student record still get a row.
pub fn build_report(evaluations: &[Evaluation], students: &[Student]) -> SeminarReport {
    let mut rows = evaluations
        .iter()
        .map(|evaluation| EvaluationRow {
            id: evaluation.id.clone(),
            student_name: evaluation.student_name.clone(),
            semester: evaluation.semester,
            date: evaluation.date.clone(),
            evaluator: evaluation.evaluator.clone(),
            overall_score: evaluation.overall_score,
            band: GradeBand::for_score(evaluation.overall_score),
        })
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.student_name.cmp(&b.student_name)));

    let mut by_student = BTreeMap::<&str, Vec<f64>>::new();
    let mut by_semester = BTreeMap::<Semester, Vec<f64>>::new();
    for evaluation in evaluations {
        by_student
            .entry(evaluation.student_name.as_str())
            .or_default()
            .push(evaluation.overall_score);
        by_semester
            .entry(evaluation.semester)
            .or_default()
            .push(evaluation.overall_score);
    }

    let mut student_rows = students
        .iter()
        .map(|student| {
            let scores = by_student.remove(student.name.as_str()).unwrap_or_default();
            StudentAverage {
                student_name: student.name.clone(),
                student_id: Some(student.student_id.clone()),
                evaluations: scores.len(),
                average: mean(&scores),
            }
        })
        .collect::<Vec<_>>();
    student_rows.extend(by_student.into_iter().map(|(name, scores)| StudentAverage {
        student_name: name.to_string(),
        student_id: None,
        evaluations: scores.len(),
        average: mean(&scores),
    }));

    let semester_rows = Semester::ALL
        .into_iter()
        .map(|semester| {
            let scores = by_semester.get(&semester).map(Vec::as_slice).unwrap_or(&[]);
            SemesterAverage {
                semester,
                evaluations: scores.len(),
                average: mean(scores),
            }
        })
        .collect();

    SeminarReport {
        total_evaluations: evaluations.len(),
        total_students: student_rows.len(),
        evaluations: rows,
        students: student_rows,
        semesters: semester_rows,
    }
}

fn mean(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(round_to(scores.iter().sum::<f64>() / scores.len() as f64, 2))
}
