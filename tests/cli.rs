//! Command-line behaviour of the `pagewright` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn pagewright(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagewright"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run pagewright")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn no_arguments_reports_missing_input() {
    let tmp = TempDir::new().unwrap();
    let output = pagewright(tmp.path(), &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("required option input <file or directory> is not specified"));
    assert!(!tmp.path().join("dist").exists());
}

#[test]
fn missing_input_path_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let output = pagewright(tmp.path(), &["--input", "nope.txt"]);

    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("error: Input file or directory"));
    assert!(stderr(&output).contains("doesn't exist"));
}

#[test]
fn single_text_file_goes_to_default_dist() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sample.txt"), "Sample\n\n\nFirst.\n\nSecond.").unwrap();

    let output = pagewright(tmp.path(), &["-i", "sample.txt", "-s", "link"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let html = fs::read_to_string(tmp.path().join("dist/sample.html")).unwrap();
    assert!(html.contains("<link href=\"link\" rel=\"stylesheet\">"));
    assert!(html.contains("<h1>Sample</h1>"));
    assert!(!tmp.path().join("dist/index.html").exists());
}

#[test]
fn invalid_output_falls_back_to_dist_with_warning() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sample.txt"), "text").unwrap();

    let output = pagewright(tmp.path(), &["-i", "sample.txt", "-o", "./invalid"]);

    assert!(output.status.success());
    assert!(tmp.path().join("dist/sample.html").is_file());
    assert!(!tmp.path().join("invalid").exists());
    assert!(stderr(&output).contains("output directory doesn't exist"));
}

#[test]
fn existing_output_directory_is_used() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sample.txt"), "text").unwrap();
    fs::create_dir(tmp.path().join("outputTest")).unwrap();

    let output = pagewright(tmp.path(), &["-i", "sample.txt", "-o", "outputTest"]);

    assert!(output.status.success());
    assert!(tmp.path().join("outputTest/sample.html").is_file());
}

#[test]
fn unsupported_single_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.rtf"), "text").unwrap();

    let output = pagewright(tmp.path(), &["-i", "notes.rtf"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains(".rtf is not a file type that can be processed"));
}

#[test]
fn config_file_supplies_input() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("docs")).unwrap();
    fs::write(tmp.path().join("docs/guide.md"), "---\ntitle: Guide\n---\nRead me.").unwrap();
    fs::write(
        tmp.path().join("ssg-config.json"),
        r#"{"input": "docs", "stylesheet": "water.css"}"#,
    )
    .unwrap();

    let output = pagewright(tmp.path(), &["-c", "ssg-config.json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("guide \u{2192} guide.html"));
    let index = fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
    assert!(index.contains("<a href=\"./guide.html\">guide</a>"));
    assert!(index.contains("water.css"));
}

#[test]
fn config_file_without_input_is_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("c.json"), r#"{"output": "out"}"#).unwrap();

    let output = pagewright(tmp.path(), &["-c", "c.json", "-i", "."]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("not specified in config file"));
}
