use crate::error::{Result, RubricError};
use serde::{Deserialize, Serialize};

/// One weighted dimension of a semester rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub weight: f64,
}

impl Criterion {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            weight,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parses the older label format where the weight lives in the name,
    /// e.g. `"Objectives (25%)"`, `"Objectives: 25%"` or `"Objectives - 25 %"`.
    pub fn from_legacy_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        let body = trimmed.strip_suffix(')').unwrap_or(trimmed).trim_end();
        let body = body
            .strip_suffix('%')
            .ok_or_else(|| legacy_error(label, "missing percentage"))?
            .trim_end();

        let split_at = body
            .rfind(|c: char| !(c.is_ascii_digit() || c == '.'))
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let (head, digits) = body.split_at(split_at);
        let percent: f64 = digits
            .parse()
            .map_err(|_| legacy_error(label, "percentage is not a number"))?;

        let name = head
            .trim_end()
            .trim_end_matches(['(', ':', '-'])
            .trim();
        if name.is_empty() {
            return Err(legacy_error(label, "missing criterion name"));
        }

        Ok(Self::new(name, percent / 100.0))
    }
}

fn legacy_error(label: &str, reason: &str) -> RubricError {
    RubricError::ConfigParse(format!("legacy criterion '{label}': {reason}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_label_with_parentheses() {
        let criterion =
            Criterion::from_legacy_label("Clarity of the problem (30%)").expect("should parse");
        assert_eq!(criterion.name, "Clarity of the problem");
        assert!((criterion.weight - 0.30).abs() < 1e-12);
        assert!(criterion.description.is_none());
    }

    #[test]
    fn legacy_label_with_separator_and_decimal() {
        let criterion = Criterion::from_legacy_label("Objectives: 12.5 %").expect("should parse");
        assert_eq!(criterion.name, "Objectives");
        assert!((criterion.weight - 0.125).abs() < 1e-12);

        let criterion = Criterion::from_legacy_label("First results - 35%").expect("should parse");
        assert_eq!(criterion.name, "First results");
    }

    #[test]
    fn legacy_label_without_percentage_is_rejected() {
        let err = Criterion::from_legacy_label("Objectives").expect_err("should fail");
        assert!(err.to_string().contains("missing percentage"));
    }

    #[test]
    fn legacy_label_without_name_is_rejected() {
        let err = Criterion::from_legacy_label("(40%)").expect_err("should fail");
        assert!(err.to_string().contains("missing criterion name"));
    }
}
