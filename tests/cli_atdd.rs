#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn rubric(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("seminar-rubric").expect("binary should compile");
    cmd.arg("--config-dir").arg(config_dir);
    cmd.env_remove("SEMINAR_RUBRIC_LOG");
    cmd
}

fn submit_first(config_dir: &Path, data_dir: &Path, student: &str, value: &str) {
    rubric(config_dir)
        .arg("submit")
        .arg("First")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--student", student, "--evaluator", "Dr. Smith"])
        .args(["--score", &format!("Clarity of the problem={value}")])
        .args(["--score", &format!("Objectives={value}")])
        .args(["--score", &format!("Justification={value}")])
        .args(["--score", &format!("Preliminary methodology={value}")])
        .assert()
        .success()
        .stdout(predicate::str::contains("recorded eval-"));
}

#[test]
fn configured_rubric_drives_scoring() {
    let config = TempDir::new().expect("temp dir should be created");
    fs::write(
        config.path().join("rubric.toml"),
        r#"
[scoring]
decimals = 1

[semesters.First]
legacy = ["A (60%)", "B (30%)", "C (10%)"]
"#,
    )
    .expect("config should write");

    rubric(config.path())
        .args(["score", "First", "-s", "A=8", "-s", "B=9", "-s", "C=10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("overall: 8.5"));
}

#[test]
fn invalid_rubric_config_blocks_every_command() {
    let config = TempDir::new().expect("temp dir should be created");
    fs::write(
        config.path().join("rubric.toml"),
        r#"
[[semesters.Third.criteria]]
name = "Results"
weight = 0.5

[[semesters.Third.criteria]]
name = "Analysis"
weight = 0.4
"#,
    )
    .expect("config should write");

    rubric(config.path())
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid rubric for Third"))
        .stderr(predicate::str::contains("must sum to 1.0"));

    rubric(config.path())
        .args(["criteria", "First"])
        .assert()
        .code(2);
}

#[test]
fn submit_seed_and_report_round_trip() {
    let config = TempDir::new().expect("temp dir should be created");
    let data = TempDir::new().expect("temp dir should be created");

    rubric(config.path())
        .arg("seed")
        .arg("--data-dir")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("seed: added 5 students"));

    rubric(config.path())
        .arg("seed")
        .arg("--data-dir")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"));

    submit_first(config.path(), data.path(), "Ana García", "9");
    submit_first(config.path(), data.path(), "Beatriz López", "6");

    let stored = fs::read_to_string(data.path().join("evaluations.json"))
        .expect("evaluations should be stored");
    assert!(stored.contains("\"overallScore\": 9.0"));
    assert!(stored.contains("\"studentName\": \"Beatriz López\""));

    rubric(config.path())
        .arg("report")
        .arg("--data-dir")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Seminar Evaluation Report"))
        .stdout(predicate::str::contains("Evaluations: 2"))
        .stdout(predicate::str::contains("- Ana García (A01234567): 9.00 (1 evaluations)"))
        .stdout(predicate::str::contains("- Elena Gómez (A01234571): N/A (0 evaluations)"))
        .stdout(predicate::str::contains("- First: 7.50"));

    rubric(config.path())
        .arg("report")
        .arg("--data-dir")
        .arg(data.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"band\": \"needs_improvement\""));
}

#[test]
fn submit_rejects_incomplete_scores_without_writing() {
    let config = TempDir::new().expect("temp dir should be created");
    let data = TempDir::new().expect("temp dir should be created");

    rubric(config.path())
        .arg("submit")
        .arg("First")
        .arg("--data-dir")
        .arg(data.path())
        .args(["--student", "Ana García", "--evaluator", "Dr. Smith"])
        .args(["--score", "Objectives=8"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("incomplete score set"));

    assert!(!data.path().join("evaluations.json").exists());
}
