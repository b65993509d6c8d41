use crate::types::report::SeminarReport;

pub fn to_json(report: &SeminarReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
