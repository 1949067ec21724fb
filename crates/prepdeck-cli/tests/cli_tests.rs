//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `prepdeck` invocation isolated from the caller's config and key.
fn prepdeck(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("prepdeck").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("PREPDECK_GEMINI_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn numbered_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| l.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

#[test]
fn generate_rule_based_writes_pdf() {
    let dir = TempDir::new().unwrap();

    let output = prepdeck(dir.path())
        .args(["generate", "--mode", "rule", "--seed", "7", "--output", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated interview questions:"))
        .stdout(predicate::str::contains("Interview prep PDF:"))
        .get_output()
        .stdout
        .clone();

    let lines = numbered_lines(&output);
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("1. "));
    assert!(lines[4].starts_with("5. "));

    let pdf = dir.path().join("out").join("Data Scientist_interview_prep.pdf");
    let bytes = std::fs::read(&pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn generate_same_seed_same_questions() {
    let dir = TempDir::new().unwrap();
    let run = |seed: &str| {
        let out = prepdeck(dir.path())
            .args(["generate", "--skills", "python, sql", "--count", "4", "--seed", seed])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        numbered_lines(&out)
    };

    let first = run("42");
    assert_eq!(first.len(), 4);
    assert_eq!(first, run("42"));
}

#[test]
fn generate_count_capped_by_pool() {
    let dir = TempDir::new().unwrap();

    let output = prepdeck(dir.path())
        .args(["generate", "--skills", "SQL", "--count", "10", "--seed", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(numbered_lines(&output).len(), 5);
}

#[test]
fn generate_unknown_skills_still_exports_warning() {
    let dir = TempDir::new().unwrap();

    prepdeck(dir.path())
        .args(["generate", "--role", "Analyst", "--skills", "cobol, fortran"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. ⚠️ No predefined questions available for given skills.",
        ))
        .stdout(predicate::str::contains("2. ").not());

    assert!(dir.path().join("Analyst_interview_prep.pdf").exists());
}

#[test]
fn generate_rejects_out_of_range_count() {
    let dir = TempDir::new().unwrap();

    prepdeck(dir.path())
        .args(["generate", "--count", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("11"));

    prepdeck(dir.path())
        .args(["generate", "--count", "0"])
        .assert()
        .failure();
}

#[test]
fn generate_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();

    prepdeck(dir.path())
        .args(["generate", "--mode", "oracle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn generate_ai_without_key_fails_without_export() {
    let dir = TempDir::new().unwrap();

    prepdeck(dir.path())
        .args(["generate", "--mode", "ai", "--api-key", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Gemini API key"))
        .stdout(predicate::str::contains("Generated interview questions").not());

    assert!(!dir.path().join("Data Scientist_interview_prep.pdf").exists());
}

#[test]
fn generate_from_unsupported_resume_uses_warning_text() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("resume.txt"), "python, sql").unwrap();

    // The warning replaces the skills, so no bank tag matches.
    prepdeck(dir.path())
        .args(["generate", "--resume", "resume.txt", "--skills", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unsupported file format. Please upload PDF or DOCX.",
        ))
        .stdout(predicate::str::contains("No predefined questions available"));
}

#[test]
fn generate_missing_resume_fails() {
    let dir = TempDir::new().unwrap();

    prepdeck(dir.path())
        .args(["generate", "--resume", "nowhere.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn generate_uses_extra_bank() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("bank.toml"),
        "[skills]\nrust = [\"What is ownership?\", \"Explain lifetimes.\"]\n",
    )
    .unwrap();

    prepdeck(dir.path())
        .args(["generate", "--skills", "Rust", "--bank", "bank.toml", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("What is ownership?"))
        .stdout(predicate::str::contains("Explain lifetimes."));
}

#[test]
fn generate_reads_defaults_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("prepdeck.toml"),
        "default_role = \"ML/Ops\"\ndefault_skills = \"ml\"\ndefault_count = 2\noutput_dir = \"pdfs\"\n",
    )
    .unwrap();

    let output = prepdeck(dir.path())
        .args(["generate", "--seed", "9"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(numbered_lines(&output).len(), 2);
    assert!(dir.path().join("pdfs").join("ML_Ops_interview_prep.pdf").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn generate_ai_mode_against_gemini() {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "1. What is a join?\n\n2. What is an index?\n"}]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("prepdeck.toml"),
        format!("[gemini]\nbase_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    let output = prepdeck(dir.path())
        .args(["generate", "--mode", "ai", "--role", "DBA", "--api-key", "test-key"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        numbered_lines(&output),
        vec!["1. 1. What is a join?", "2. 2. What is an index?"]
    );
    assert!(dir.path().join("DBA_interview_prep.pdf").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn generate_ai_mode_remote_failure_degrades() {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("prepdeck.toml"),
        format!("[gemini]\nbase_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    prepdeck(dir.path())
        .env("PREPDECK_GEMINI_KEY", "env-key")
        .args(["generate", "--mode", "ai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ⚠️ Error:"))
        .stdout(predicate::str::contains("2. ").not());

    assert!(dir.path().join("Data Scientist_interview_prep.pdf").exists());
}

#[test]
fn extract_unsupported_format() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();

    prepdeck(dir.path())
        .args(["extract", "--resume", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "⚠️ Unsupported file format. Please upload PDF or DOCX.",
        ));
}

#[test]
fn extract_reads_exported_pdf() {
    let dir = TempDir::new().unwrap();

    prepdeck(dir.path())
        .args(["generate", "--role", "Engineer", "--skills", "python", "--seed", "1"])
        .assert()
        .success();

    prepdeck(dir.path())
        .args(["extract", "--resume", "Engineer_interview_prep.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interview Prep Guide for Engineer"))
        .stdout(predicate::str::contains("Interview Questions:"));
}

#[test]
fn extract_corrupt_pdf_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("broken.pdf"), b"not a pdf").unwrap();

    prepdeck(dir.path())
        .args(["extract", "--resume", "broken.pdf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn skills_lists_builtin_tags() {
    let dir = TempDir::new().unwrap();

    prepdeck(dir.path())
        .arg("skills")
        .assert()
        .success()
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("sql"))
        .stdout(predicate::str::contains("ml"))
        .stdout(predicate::str::contains("3 skill(s) known."));
}

#[test]
fn skills_reports_bank_warnings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("bank.toml"),
        "[skills]\ngo = [\"What is a goroutine?\", \"What is a goroutine?\"]\nempty = []\n",
    )
    .unwrap();

    prepdeck(dir.path())
        .args(["skills", "--bank", "bank.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 skill(s) known."))
        .stdout(predicate::str::contains("WARN [go]"))
        .stdout(predicate::str::contains("WARN [empty]"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    prepdeck(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created prepdeck.toml"))
        .stdout(predicate::str::contains("Created banks/example.toml"));

    assert!(dir.path().join("prepdeck.toml").exists());
    assert!(dir.path().join("banks/example.toml").exists());

    // The generated files are usable as-is.
    prepdeck(dir.path())
        .args(["skills", "--bank", "banks/example.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("prepdeck.toml"), "# mine\n").unwrap();

    prepdeck(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("prepdeck.toml already exists, skipping."));

    let content = std::fs::read_to_string(dir.path().join("prepdeck.toml")).unwrap();
    assert_eq!(content, "# mine\n");
}

#[test]
fn no_args_shows_help() {
    let dir = TempDir::new().unwrap();

    prepdeck(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
