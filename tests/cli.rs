//! End-to-end tests for the `bytestats` binary

#![cfg(feature = "cli")]

use std::io::Write as _;

use assert_cmd::Command;
use predicates::prelude::*;

fn bytestats() -> Command {
    Command::cargo_bin("bytestats").unwrap()
}

#[test]
fn reports_all_widths_from_stdin() {
    let input = [0x00u8, 0x01, 0x02, 0x03].repeat(25);

    bytestats()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Byte Count"))
        .stdout(predicate::str::contains("Short Unique"))
        .stdout(predicate::str::contains("DWord Entropy"))
        .stdout(predicate::str::contains("1.500"))
        .stdout(predicate::str::contains("2.000, 25.0%"));
}

#[test]
fn reads_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0u8; 100]).unwrap();
    file.flush().unwrap();

    bytestats()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Byte Count:             100"))
        .stdout(predicate::str::contains("Short Count:              50"))
        .stdout(predicate::str::contains("DWord Count:              25"));
}

#[test]
fn dash_reads_stdin() {
    bytestats()
        .arg("-")
        .write_stdin(vec![7u8; 8])
        .assert()
        .success()
        .stdout(predicate::str::contains("Byte Count:               8"));
}

#[test]
fn short_input_fails() {
    bytestats()
        .write_stdin(vec![1u8, 2, 3])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no 32-bit fields to summarize"));
}

#[test]
fn empty_input_fails() {
    bytestats()
        .write_stdin(Vec::<u8>::new())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no 8-bit fields to summarize"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    bytestats()
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}
