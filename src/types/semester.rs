use crate::error::RubricError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five seminar semesters a thesis presentation can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Semester {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Semester {
    pub const ALL: [Semester; 5] = [
        Semester::First,
        Semester::Second,
        Semester::Third,
        Semester::Fourth,
        Semester::Fifth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Semester::First => "First",
            Semester::Second => "Second",
            Semester::Third => "Third",
            Semester::Fourth => "Fourth",
            Semester::Fifth => "Fifth",
        }
    }

    /// Label used by the seminar staff and the comment assistant.
    pub fn local_label(self) -> &'static str {
        match self {
            Semester::First => "Primero",
            Semester::Second => "Segundo",
            Semester::Third => "Tercero",
            Semester::Fourth => "Cuarto",
            Semester::Fifth => "Quinto",
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            Semester::First => 1,
            Semester::Second => 2,
            Semester::Third => 3,
            Semester::Fourth => 4,
            Semester::Fifth => 5,
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Semester {
    type Err = RubricError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        Semester::ALL
            .into_iter()
            .find(|semester| {
                key.eq_ignore_ascii_case(semester.as_str())
                    || key.eq_ignore_ascii_case(semester.local_label())
                    || key == semester.ordinal().to_string()
            })
            .ok_or_else(|| RubricError::UnknownSemester(raw.to_string()))
    }
}
