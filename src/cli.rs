use clap::{Args, Parser, Subcommand, ValueEnum};
use seminar_rubric::{RubricError, ScoreSet};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seminar-rubric",
    version,
    about = "Weighted rubric scoring for thesis seminar evaluations"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory containing rubric.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the weighted criteria of a semester
    Criteria(SemesterArgs),
    /// Print the rubric summary given to the comment assistant
    Describe(SemesterArgs),
    /// Check that every configured rubric is valid
    Validate,
    /// Compute the overall score for a set of raw scores
    Score(ScoreCommand),
    /// Score and record an evaluation
    Submit(SubmitCommand),
    /// Summarise recorded evaluations
    Report(ReportCommand),
    /// Render the comment-assistant prompt for a professor's notes
    Prompt(PromptCommand),
    /// Load the initial student list into an empty data directory
    Seed(SeedCommand),
}

#[derive(Args)]
pub struct SemesterArgs {
    pub semester: String,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub semester: String,
    /// Raw score for one criterion, repeatable
    #[arg(short, long = "score", value_name = "NAME=VALUE")]
    pub scores: Vec<String>,
}

#[derive(Args)]
pub struct SubmitCommand {
    pub semester: String,
    #[arg(long)]
    pub data_dir: PathBuf,
    #[arg(long)]
    pub student: String,
    #[arg(long)]
    pub evaluator: String,
    #[arg(short, long = "score", value_name = "NAME=VALUE")]
    pub scores: Vec<String>,
    /// Professor's free-text notes
    #[arg(long)]
    pub notes: Option<String>,
    /// Narrative comments produced by the assistant
    #[arg(long)]
    pub comments: Option<String>,
}

#[derive(Args)]
pub struct ReportCommand {
    #[arg(long)]
    pub data_dir: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct PromptCommand {
    pub semester: String,
    #[arg(long)]
    pub text: String,
}

#[derive(Args)]
pub struct SeedCommand {
    #[arg(long)]
    pub data_dir: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

/// Parses repeated `NAME=VALUE` arguments. The split happens at the last `=`
/// so criterion names may themselves contain one.
pub fn parse_score_entries(entries: &[String]) -> Result<ScoreSet, RubricError> {
    let mut scores = ScoreSet::new();
    for entry in entries {
        let (name, value) = entry
            .rsplit_once('=')
            .ok_or_else(|| RubricError::InvalidScoreEntry(entry.clone()))?;
        let name = name.trim();
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| RubricError::InvalidScoreEntry(entry.clone()))?;
        if name.is_empty() || scores.insert(name.to_string(), value).is_some() {
            return Err(RubricError::InvalidScoreEntry(entry.clone()));
        }
    }
    Ok(scores)
}
