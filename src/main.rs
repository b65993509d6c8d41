mod cli;

use chrono::Utc;
use clap::Parser;
use seminar_rubric::config;
use seminar_rubric::evaluate;
use seminar_rubric::logging;
use seminar_rubric::prompt::{self, CommentRequest};
use seminar_rubric::report;
use seminar_rubric::scoring::{ScoreAggregator, DEFAULT_DECIMALS};
use seminar_rubric::store::json::JsonStore;
use seminar_rubric::store::{self, Store};
use seminar_rubric::types::evaluation::{Evaluation, EvaluationDraft, Student};
use seminar_rubric::{RubricError, RubricRegistry, Semester};
use std::path::Path;

pub mod exit_code {
    use seminar_rubric::RubricError;

    pub const SUCCESS: i32 = 0;
    pub const VALIDATION: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;

    pub fn for_error(err: &RubricError) -> i32 {
        match err {
            err if err.is_validation() => VALIDATION,
            RubricError::InvalidRubric { .. } | RubricError::ConfigParse(_) | RubricError::Toml(_) => {
                BLOCKING
            }
            _ => RUNTIME_FAILURE,
        }
    }
}

fn load_registry(config_dir: &Path) -> Result<(RubricRegistry, u32), RubricError> {
    match config::load_config(config_dir)? {
        Some(cfg) => Ok((cfg.registry()?, cfg.decimals())),
        None => Ok((RubricRegistry::builtin()?, DEFAULT_DECIMALS)),
    }
}

fn run(cli: cli::Cli) -> Result<i32, RubricError> {
    let (registry, decimals) = load_registry(&cli.config_dir)?;
    let aggregator = ScoreAggregator::new(&registry).with_decimals(decimals);

    match cli.command {
        cli::Commands::Criteria(cmd) => {
            let semester: Semester = cmd.semester.parse()?;
            println!("{} semester ({}):", semester, semester.local_label());
            for criterion in registry.criteria_for(semester)? {
                println!("- {} [weight {:.2}]", criterion.name, criterion.weight);
                if let Some(description) = &criterion.description {
                    println!("  {description}");
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Describe(cmd) => {
            let semester: Semester = cmd.semester.parse()?;
            println!("{}", registry.describe(semester)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate => {
            for semester in registry.semesters() {
                registry.validate(semester)?;
                println!(
                    "{}: ok ({} criteria)",
                    semester,
                    registry.criteria_for(semester)?.len()
                );
            }
            println!("rubric: valid");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let semester: Semester = cmd.semester.parse()?;
            let scores = cli::parse_score_entries(&cmd.scores)?;
            let overall = aggregator.aggregate(semester, &scores)?;
            println!("overall: {:.*}", aggregator.decimals() as usize, overall);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Submit(cmd) => {
            let draft = EvaluationDraft {
                student_name: cmd.student,
                semester: Some(cmd.semester.parse()?),
                evaluator: cmd.evaluator,
                scores: cli::parse_score_entries(&cmd.scores)?,
                professor_prompt: cmd.notes,
                ai_comments: cmd.comments,
            };
            let mut evaluations = JsonStore::<Evaluation>::open(&cmd.data_dir)?;
            let evaluation = evaluate::submit(&aggregator, &mut evaluations, draft, Utc::now())?;
            println!(
                "recorded {}: {} ({}) overall {:.*}",
                evaluation.id,
                evaluation.student_name,
                evaluation.semester,
                aggregator.decimals() as usize,
                evaluation.overall_score
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Report(cmd) => {
            let evaluations = JsonStore::<Evaluation>::open(&cmd.data_dir)?.list()?;
            let students = JsonStore::<Student>::open(&cmd.data_dir)?.list()?;
            let seminar_report = report::build_report(&evaluations, &students);
            let format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&seminar_report, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Prompt(cmd) => {
            let request = CommentRequest {
                prompt: cmd.text,
                semester: cmd.semester.parse()?,
            };
            println!("{}", prompt::render_comment_prompt(&registry, &request)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Seed(cmd) => {
            let mut students = JsonStore::<Student>::open(&cmd.data_dir)?;
            if !students.list()?.is_empty() {
                println!("seed: students already present, nothing to do");
                return Ok(exit_code::SUCCESS);
            }
            let seeds = store::seed_students();
            let count = seeds.len();
            for student in seeds {
                students.add(student)?;
            }
            println!("seed: added {count} students");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    if let Err(e) = logging::init_tracing(cli.verbose, cli.quiet) {
        eprintln!("warning: logging unavailable: {}", e);
    }
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::for_error(&e));
        }
    }
}
