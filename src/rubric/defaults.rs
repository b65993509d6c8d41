use crate::types::criterion::Criterion;
use crate::types::semester::Semester;
use std::collections::BTreeMap;

/// Seminar rubrics used when no `rubric.toml` overrides a semester.
pub fn default_rubrics() -> BTreeMap<Semester, Vec<Criterion>> {
    Semester::ALL
        .into_iter()
        .map(|semester| (semester, default_criteria(semester)))
        .collect()
}

pub fn default_criteria(semester: Semester) -> Vec<Criterion> {
    match semester {
        Semester::First => vec![
            Criterion::new("Clarity of the problem", 0.25)
                .with_description("The research problem is stated precisely and its scope is bounded."),
            Criterion::new("Objectives", 0.25)
                .with_description("General and specific objectives are measurable and aligned with the problem."),
            Criterion::new("Justification", 0.20)
                .with_description("Relevance, novelty and expected contribution are argued convincingly."),
            Criterion::new("Preliminary methodology", 0.30)
                .with_description("The proposed method is feasible and suited to the objectives."),
        ],
        Semester::Second => vec![
            Criterion::new("Methodological advances", 0.40)
                .with_description("The methodology has been refined and put into practice since the last seminar."),
            Criterion::new("First results", 0.35)
                .with_description("Initial results are presented with supporting evidence."),
            Criterion::new("Coherence objectives-results", 0.25)
                .with_description("Results obtained so far respond to the stated objectives."),
        ],
        Semester::Third => vec![
            Criterion::new("Intermediate results", 0.40)
                .with_description("Substantial results cover most of the objectives."),
            Criterion::new("Critical analysis", 0.35)
                .with_description("Results are interpreted against the literature with their limitations."),
            Criterion::new("Validation of results", 0.25)
                .with_description("Results are verified through appropriate validation procedures."),
        ],
        Semester::Fourth => vec![
            Criterion::new("Final results", 0.40)
                .with_description("The complete set of results is presented."),
            Criterion::new("Exhaustive discussion", 0.35)
                .with_description("Results are discussed in depth, including alternatives and threats to validity."),
            Criterion::new("Preliminary conclusions", 0.25)
                .with_description("Conclusions follow from the results and answer the research question."),
        ],
        Semester::Fifth => vec![
            Criterion::new("Justification of extension", 0.30)
                .with_description("The need for an additional semester is justified."),
            Criterion::new("Additional conclusive results", 0.35)
                .with_description("New results close the gaps left open in the previous semester."),
            Criterion::new("Clear completion strategy", 0.35)
                .with_description("A concrete plan and timeline for finishing the thesis is presented."),
        ],
    }
}
