use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const TRANSCRIPT: &str = r#"{
    "text": " Bonjour le chat",
    "language": "fr",
    "segments": [
        {"words": [
            {"word": " Bonjour", "start": 0.0, "end": 0.5, "probability": 0.95},
            {"word": " le", "start": 0.5, "end": 0.7, "probability": 0.9},
            {"word": " chat", "start": 0.7, "end": 1.1, "probability": 0.5}
        ]}
    ]
}"#;

fn transcript_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", TRANSCRIPT).unwrap();
    file
}

#[test]
fn evaluates_transcript_file() {
    let file = transcript_file();
    Command::cargo_bin("parleval")
        .unwrap()
        .arg(file.path())
        .args(["--reference", "Bonjour le chat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Pronunciation Analysis"))
        .stdout(predicate::str::contains("**Levenshtein**: 100.0/100"))
        .stdout(predicate::str::contains("criteria met"));
}

#[test]
fn evaluates_inline_transcript_json() {
    Command::cargo_bin("parleval")
        .unwrap()
        .args(["--transcript-json", TRANSCRIPT])
        .args(["--reference", "Bonjour le chat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Global**: 100.0/100"));
}

#[test]
fn emits_detailed_json_on_request() {
    let file = transcript_file();
    Command::cargo_bin("parleval")
        .unwrap()
        .arg(file.path())
        .args(["--reference", "Bonjour le chat", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"production_assessment\""))
        .stdout(predicate::str::contains("\"word_details\""));
}

#[test]
fn applies_threshold_override() {
    let file = transcript_file();
    let mut config = NamedTempFile::new().unwrap();
    write!(config, r#"{{"thresholds": {{"lisp_severity": 0.5}}}}"#).unwrap();
    Command::cargo_bin("parleval")
        .unwrap()
        .arg(file.path())
        .args(["--reference", "Bonjour le chat"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("NEEDS MINOR IMPROVEMENTS"));
}

#[test]
fn rejects_missing_reference() {
    let file = transcript_file();
    Command::cargo_bin("parleval")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference"));
}

#[test]
fn rejects_empty_reference() {
    let file = transcript_file();
    Command::cargo_bin("parleval")
        .unwrap()
        .arg(file.path())
        .args(["--reference", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Reference text must not be empty"));
}

#[test]
fn rejects_missing_transcript_file() {
    Command::cargo_bin("parleval")
        .unwrap()
        .arg("no-such-transcript.json")
        .args(["--reference", "bonjour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
