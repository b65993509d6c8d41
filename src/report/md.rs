use crate::types::report::SeminarReport;

pub fn to_markdown(report: &SeminarReport) -> String {
    let mut output = String::new();
    output.push_str("# Seminar Evaluation Report\n\n");
    output.push_str(&format!(
        "Evaluations: {}\nStudents: {}\n\n",
        report.total_evaluations, report.total_students
    ));

    output.push_str("## Evaluations\n\n");
    if report.evaluations.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| Student | Semester | Date | Evaluator | Overall |\n");
        output.push_str("|---|---|---|---|---:|\n");
        for row in &report.evaluations {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {:.2} ({}) |\n",
                row.student_name,
                row.semester,
                row.date,
                row.evaluator,
                row.overall_score,
                row.band.label()
            ));
        }
        output.push('\n');
    }

    output.push_str("## Student Averages\n\n");
    if report.students.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for student in &report.students {
            output.push_str(&format!(
                "- {}{}: {} ({} evaluations)\n",
                student.student_name,
                student
                    .student_id
                    .as_ref()
                    .map(|id| format!(" ({id})"))
                    .unwrap_or_default(),
                format_average(student.average),
                student.evaluations
            ));
        }
        output.push('\n');
    }

    output.push_str("## Semester Averages\n\n");
    for semester in &report.semesters {
        output.push_str(&format!(
            "- {}: {}\n",
            semester.semester,
            format_average(semester.average)
        ));
    }

    output
}

fn format_average(average: Option<f64>) -> String {
    average
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| "N/A".to_string())
}
