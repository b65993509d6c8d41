pub mod config;
pub mod error;
pub mod evaluate;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod rubric;
pub mod scoring;
pub mod store;
pub mod types;

pub use error::{Result, RubricError};
pub use rubric::RubricRegistry;
pub use scoring::ScoreAggregator;
pub use types::criterion::Criterion;
pub use types::evaluation::{Evaluation, EvaluationDraft, ScoreSet};
pub use types::semester::Semester;
