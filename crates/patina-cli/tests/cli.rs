//! Integration tests for the `patina` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn patina() -> Command {
    let mut cmd = Command::cargo_bin("patina").expect("binary builds");
    // Keep assertions stable regardless of the test environment.
    cmd.arg("--no-color");
    cmd.env_remove("NO_COLOR");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    patina()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("patina"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn version_flag() {
    patina()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn run_strategy_prints_the_tax_calculation() {
    patina()
        .args(["run", "strategy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy Pattern:"))
        .stdout(predicate::str::contains("US tax on $100,000.00: $30,000.00"));
}

#[test]
fn run_accepts_aliases() {
    patina()
        .args(["run", "factory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Factory Method Pattern:"));
}

#[test]
fn run_unknown_pattern_fails_with_exit_two() {
    patina()
        .args(["run", "monoid"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown pattern 'monoid'"))
        .stderr(predicate::str::contains("patina list"));
}

#[test]
fn run_json_output_is_parseable() {
    let output = patina()
        .args(["run", "null-object", "--output-format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(json["pattern"], "null-object");
    assert!(json["lines"].as_array().is_some_and(|l| !l.is_empty()));
}

#[test]
fn demo_category_prints_numbered_patterns() {
    patina()
        .args(["demo", "creational"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Creational Design Patterns Demo ==="))
        .stdout(predicate::str::contains("1. Factory Method Pattern:"))
        .stdout(predicate::str::contains("6. Object Pool Pattern:"));
}

#[test]
fn demo_accepts_british_spelling() {
    patina()
        .args(["demo", "behavioural"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Behavioral Design Patterns Demo ==="));
}

#[test]
fn demo_all_covers_every_category() {
    patina()
        .args(["demo", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Creational Design Patterns Demo ==="))
        .stdout(predicate::str::contains("=== Structural Design Patterns Demo ==="))
        .stdout(predicate::str::contains("=== Behavioral Design Patterns Demo ==="));
}

#[test]
fn demo_unknown_category_fails_with_exit_two() {
    patina()
        .args(["demo", "functional"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown category 'functional'"));
}

#[test]
fn demo_without_category_all_or_default_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "").unwrap();

    patina()
        .args(["--config", config_path.to_str().unwrap(), "demo"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No category given"))
        .stderr(predicate::str::contains("defaults.category"));
}

#[test]
fn demo_falls_back_to_the_configured_default_category() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[defaults]\ncategory = \"creational\"\n").unwrap();

    patina()
        .args(["--config", config_path.to_str().unwrap(), "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Creational Design Patterns Demo ==="));
}

#[test]
fn list_shows_all_slugs() {
    patina()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalogued Patterns:"))
        .stdout(predicate::str::contains("factory-method"))
        .stdout(predicate::str::contains("chain-of-responsibility"))
        .stdout(predicate::str::contains("visitor"));
}

#[test]
fn list_category_filter() {
    patina()
        .args(["list", "--category", "structural", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("adapter"))
        .stdout(predicate::str::contains("proxy"))
        .stdout(predicate::str::contains("facade"))
        .stdout(predicate::str::contains("strategy").not());
}

#[test]
fn list_csv_quotes_summaries_containing_commas() {
    let output = patina()
        .args(["list", "--format", "csv"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("slug,name,category,summary"));

    // The facade summary contains commas and must arrive as one field.
    assert!(stdout.contains(
        "facade,Facade,structural,\"Unifies card validation, fraud checks, and ledger posting\""
    ));
}

#[test]
fn list_json_is_an_array_of_25() {
    let output = patina()
        .args(["list", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(json.as_array().map(Vec::len), Some(25));
}

#[test]
fn describe_prints_the_doc_card() {
    patina()
        .args(["describe", "singleton"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Singleton (creational)"))
        .stdout(predicate::str::contains("Intent:"))
        .stdout(predicate::str::contains("Motivation:"))
        .stdout(predicate::str::contains("Participants:"));
}

#[test]
fn quiet_flag_suppresses_stdout() {
    patina()
        .args(["-q", "run", "memento"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn verbose_flag_logs_to_stderr() {
    patina()
        .args(["-v", "run", "memento"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn shell_completions() {
    patina()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn config_set_and_get_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let config_arg = config_path.to_str().unwrap().to_string();

    // An explicit --config path must exist, so start from an empty file.
    std::fs::write(&config_path, "").unwrap();

    patina()
        .args(["--config", &config_arg, "config", "set", "output.format", "json"])
        .assert()
        .success();

    patina()
        .args(["--config", &config_arg, "config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format = json"));
}

#[test]
fn init_force_writes_the_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("patina.toml");
    let config_arg = config_path.to_str().unwrap().to_string();

    std::fs::write(&config_path, "").unwrap();

    patina()
        .args(["--config", &config_arg, "init", "--force"])
        .assert()
        .success();

    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[output]"));
    assert!(written.contains("format = \"human\""));
}

#[test]
fn init_refuses_to_clobber_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("patina.toml");
    let config_arg = config_path.to_str().unwrap().to_string();

    std::fs::write(&config_path, "[defaults]\nwith_doc = true\n").unwrap();

    patina()
        .args(["--config", &config_arg, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let untouched = std::fs::read_to_string(&config_path).unwrap();
    assert!(untouched.contains("with_doc = true"));
}
