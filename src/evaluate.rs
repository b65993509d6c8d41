use crate::error::{Result, RubricError};
use crate::scoring::ScoreAggregator;
use crate::store::Store;
use crate::types::evaluation::{Evaluation, EvaluationDraft};
use crate::types::semester::Semester;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::info;

/// Scores a completed draft and persists it as an immutable evaluation.
///
/// The overall score is computed here and nowhere else, so the stored
/// record can never disagree with its raw scores.
pub fn submit<S: Store<Evaluation>>(
    aggregator: &ScoreAggregator<'_>,
    store: &mut S,
    draft: EvaluationDraft,
    submitted_at: DateTime<Utc>,
) -> Result<Evaluation> {
    let student_name = required(&draft.student_name, "studentName")?;
    let evaluator = required(&draft.evaluator, "evaluator")?;
    let semester = draft.semester.ok_or(RubricError::MissingField("semester"))?;

    let overall_score = aggregator.aggregate(semester, &draft.scores)?;

    let evaluation = Evaluation {
        id: evaluation_id(&student_name, semester, &evaluator, submitted_at),
        student_name,
        semester,
        evaluator,
        date: submitted_at.format("%Y-%m-%d").to_string(),
        scores: draft.scores,
        overall_score,
        professor_prompt: optional_text(draft.professor_prompt),
        ai_comments: optional_text(draft.ai_comments),
    };

    let stored = store.add(evaluation)?;
    info!(
        id = %stored.id,
        student = %stored.student_name,
        semester = %stored.semester,
        overall = stored.overall_score,
        "evaluation recorded"
    );
    Ok(stored)
}

fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RubricError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn evaluation_id(
    student_name: &str,
    semester: Semester,
    evaluator: &str,
    submitted_at: DateTime<Utc>,
) -> String {
    let timestamp = submitted_at.to_rfc3339();
    let mut hasher = Sha256::new();
    for part in [student_name, semester.as_str(), evaluator, timestamp.as_str()] {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    let digest = hasher.finalize();
    let hex = digest
        .iter()
        .take(8)
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>();
    format!("eval-{hex}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::RubricRegistry;
    use crate::store::MemoryStore;
    use crate::types::evaluation::ScoreSet;
    use chrono::TimeZone;

    fn first_semester_scores(value: f64) -> ScoreSet {
        [
            "Clarity of the problem",
            "Objectives",
            "Justification",
            "Preliminary methodology",
        ]
        .into_iter()
        .map(|name| (name.to_string(), value))
        .collect()
    }

    fn draft(scores: ScoreSet) -> EvaluationDraft {
        EvaluationDraft {
            student_name: " Ana García ".to_string(),
            semester: Some(Semester::First),
            evaluator: "Dr. Smith".to_string(),
            scores,
            professor_prompt: Some("Clear problem statement".to_string()),
            ai_comments: Some("   ".to_string()),
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 15, 10, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn submit_computes_overall_and_persists() {
        let registry = RubricRegistry::builtin().expect("builtin rubrics should validate");
        let aggregator = ScoreAggregator::new(&registry);
        let mut store = MemoryStore::new();

        let evaluation = submit(&aggregator, &mut store, draft(first_semester_scores(8.0)), at())
            .expect("complete draft should submit");

        assert_eq!(evaluation.overall_score, 8.0);
        assert_eq!(evaluation.student_name, "Ana García");
        assert_eq!(evaluation.date, "2024-05-15");
        assert!(evaluation.id.starts_with("eval-"));
        assert_eq!(evaluation.id.len(), "eval-".len() + 16);
        assert_eq!(evaluation.professor_prompt.as_deref(), Some("Clear problem statement"));
        assert!(evaluation.ai_comments.is_none());

        let stored = store.list().expect("list should work");
        assert_eq!(stored, vec![evaluation]);
    }

    #[test]
    fn identical_submissions_get_identical_ids() {
        let registry = RubricRegistry::builtin().expect("builtin rubrics should validate");
        let aggregator = ScoreAggregator::new(&registry);
        let mut first_store = MemoryStore::new();
        let mut second_store = MemoryStore::new();
        let a = submit(&aggregator, &mut first_store, draft(first_semester_scores(6.0)), at())
            .expect("should submit");
        let b = submit(&aggregator, &mut second_store, draft(first_semester_scores(6.0)), at())
            .expect("should submit");
        assert_eq!(a.id, b.id);

        let err = submit(&aggregator, &mut first_store, draft(first_semester_scores(6.0)), at())
            .expect_err("resubmitting the same instant should collide");
        assert!(matches!(err, RubricError::DuplicateId(_)));
    }

    #[test]
    fn submit_rejects_missing_fields_without_storing() {
        let registry = RubricRegistry::builtin().expect("builtin rubrics should validate");
        let aggregator = ScoreAggregator::new(&registry);
        let mut store = MemoryStore::new();

        let mut no_student = draft(first_semester_scores(5.0));
        no_student.student_name = "  ".to_string();
        assert!(matches!(
            submit(&aggregator, &mut store, no_student, at()),
            Err(RubricError::MissingField("studentName"))
        ));

        let mut no_semester = draft(first_semester_scores(5.0));
        no_semester.semester = None;
        assert!(matches!(
            submit(&aggregator, &mut store, no_semester, at()),
            Err(RubricError::MissingField("semester"))
        ));

        let mut partial = first_semester_scores(5.0);
        partial.remove("Objectives");
        let err = submit(&aggregator, &mut store, draft(partial), at())
            .expect_err("incomplete scores should fail");
        assert!(err.is_validation());

        assert!(store.list().expect("list should work").is_empty());
    }
}
