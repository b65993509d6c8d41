use crate::error::{Result, RubricError};
use crate::rubric::RubricRegistry;
use crate::types::semester::Semester;
use tracing::{debug, warn};

/// A professor's free-text notes, to be turned into narrative comments.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentRequest {
    pub prompt: String,
    pub semester: Semester,
}

/// Port to the external text-generation service.
pub trait CommentGenerator {
    fn generate(&self, rendered_prompt: &str) -> Result<String>;
}

pub fn render_comment_prompt(registry: &RubricRegistry, request: &CommentRequest) -> Result<String> {
    let notes = request.prompt.trim();
    if notes.is_empty() {
        return Err(RubricError::MissingField("prompt"));
    }
    let criteria = registry.describe(request.semester)?;

    Ok(format!(
        "You are an assistant helping professors evaluate students' thesis presentations.\n\
         \n\
         Based on the professor's notes, write useful, constructive evaluation comments and insights.\n\
         Take into account the semester and the evaluation criteria specific to that semester.\n\
         \n\
         Semester: {} ({})\n\
         Criteria:\n{}\n\
         Professor's notes: {}\n\
         \n\
         Comments and insights:",
        request.semester,
        request.semester.local_label(),
        criteria,
        notes
    ))
}

/// Renders the prompt and hands it to the generator. Generation failures
/// are returned to the caller untouched; nothing here retries.
pub fn request_comments<G: CommentGenerator>(
    generator: &G,
    registry: &RubricRegistry,
    request: &CommentRequest,
) -> Result<String> {
    let rendered = render_comment_prompt(registry, request)?;
    debug!(semester = %request.semester, chars = rendered.len(), "requesting comments");
    generator.generate(&rendered).map_err(|err| {
        warn!(error = %err, "comment generation failed");
        err
    })
}
