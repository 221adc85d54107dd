use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn rsvp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rsvp"))
        .args(args)
        .env_remove("RSVP_WPM")
        .output()
        .expect("failed to run rsvp")
}

fn text_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_argument_exits_one() {
    let output = rsvp(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    let output = rsvp(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_file_exits_one() {
    let output = rsvp(&["definitely_missing_file_98765.txt"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("definitely_missing_file_98765.txt"));
    assert!(stderr.contains("not found"));
}

#[test]
fn test_wpm_below_range_exits_one() {
    let file = text_file("some words here");
    let output = rsvp(&[file.path().to_str().unwrap(), "49"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("got 49"));
}

#[test]
fn test_wpm_above_range_exits_one() {
    let file = text_file("some words here");
    let output = rsvp(&[file.path().to_str().unwrap(), "1501"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_negative_wpm_is_a_range_error() {
    let file = text_file("some words here");
    let output = rsvp(&[file.path().to_str().unwrap(), "-10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("got -10"));
}

#[test]
fn test_non_numeric_wpm_exits_one() {
    let file = text_file("some words here");
    let output = rsvp(&[file.path().to_str().unwrap(), "fast"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_whitespace_only_file_exits_one() {
    let file = text_file("   \n\t\n ");
    let output = rsvp(&[file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No words found"));
}
