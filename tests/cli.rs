use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

const USAGE_LINE: &str = "usage: check_coverage.py <cobertura_xml> <min_percent>\n";

fn check_coverage(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-coverage"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .output()
        .expect("failed to run check-coverage")
}

fn write_report(contents: &str) -> (TempDir, String) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coverage.xml");
    fs::write(&path, contents).unwrap();
    (dir, path_arg(&path))
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_threshold_met() {
    let (_dir, report) = write_report(r#"<?xml version="1.0"?><coverage line-rate="0.85"></coverage>"#);
    let output = check_coverage(&[&report, "80"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "line coverage: 85.00% (required: 80.00%)\ncoverage threshold met\n"
    );
}

#[test]
fn test_threshold_not_met() {
    let (_dir, report) = write_report(r#"<coverage line-rate="0.72"/>"#);
    let output = check_coverage(&[&report, "80"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "line coverage: 72.00% (required: 80.00%)\ncoverage threshold not met\n"
    );
}

#[test]
fn test_threshold_tie() {
    let (_dir, report) = write_report(r#"<coverage line-rate="0.80"/>"#);
    let output = check_coverage(&[&report, "80"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).ends_with("coverage threshold met\n"));
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let (_dir, report) = write_report(r#"<coverage line-rate="0.9"/>"#);

    for args in [vec![], vec![report.as_str()], vec![report.as_str(), "80", "extra"]] {
        let output = check_coverage(&args);
        assert_eq!(output.status.code(), Some(2), "args: {:?}", args);
        assert_eq!(stdout(&output), USAGE_LINE);
    }
}

#[test]
fn test_non_numeric_threshold_prints_usage() {
    let (_dir, report) = write_report(r#"<coverage line-rate="0.9"/>"#);
    let output = check_coverage(&[&report, "eighty"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), USAGE_LINE);
}

#[test]
fn test_missing_line_rate() {
    let (_dir, report) = write_report("<notcoverage/>");
    let output = check_coverage(&[&report, "80"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "coverage xml missing line-rate attribute\n");
}

#[test]
fn test_malformed_report() {
    for contents in ["<coverage line-rate=\"0.9\">", "just some text", ""] {
        let (_dir, report) = write_report(contents);
        let output = check_coverage(&[&report, "80"]);

        assert_eq!(output.status.code(), Some(2), "contents: {:?}", contents);
        let out = stdout(&output);
        assert!(out.starts_with("failed to parse coverage xml"), "{}", out);
        assert!(!out.contains("line coverage:"));
    }
}

#[test]
fn test_missing_report_file() {
    let dir = tempdir().unwrap();
    let missing = path_arg(&dir.path().join("missing.xml"));
    let output = check_coverage(&[&missing, "80"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).starts_with("failed to read coverage xml"));
}

#[test]
fn test_help_and_version_flags_print_usage() {
    for flag in ["--help", "-h", "--version", "-V"] {
        let output = check_coverage(&[flag]);
        assert_eq!(output.status.code(), Some(2), "flag: {}", flag);
        assert_eq!(stdout(&output), USAGE_LINE);
    }
}

#[test]
fn test_separator_counts_toward_argument_count() {
    let (_dir, report) = write_report(r#"<coverage line-rate="0.9"/>"#);
    let output = check_coverage(&["--", &report, "80"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), USAGE_LINE);
}
