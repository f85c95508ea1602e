use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn trade(base: &Path, period: &str, inst: &str, body: &str) {
    let dir = base.join(period).join(period).join(inst);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("trade_data__{inst}.csv")), body).unwrap();
}

fn dataset(base: &Path) {
    trade(base, "Period1", "A", "timestamp,price\n09:30:01.000000123,10\n09:30:04,11\n");
    trade(base, "Period1", "B", "timestamp,price\n09:30:12,20\n");
    // Period2 has no usable timestamp anywhere
    trade(base, "Period2", "A", "timestamp,price\nnoon,1\n");
}

fn tickgrid(input: &Path, output: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tickgrid").unwrap();
    cmd.env("RUST_LOG", "off")
        .arg("--date")
        .arg("2025-01-25")
        .arg("--input")
        .arg(input)
        .arg("--output")
        .arg(output)
        .arg("--instruments")
        .arg("A,B");
    cmd
}

#[test]
fn writes_aligned_files_and_reports_failed_periods() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    let output = dir.path().join("out");
    dataset(&input);

    tickgrid(&input, &output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Period1: 2025-01-25 09:30:00 to 2025-01-25 09:30:15"))
        .stdout(predicate::str::contains("failed: period Period2 failed"))
        .stdout(predicate::str::contains("1 period(s) processed, 1 failed, 2 file(s) written"));

    let a = fs::read_to_string(output.join("Period1").join("resampled_5S_data__A.csv")).unwrap();
    let b = fs::read_to_string(output.join("Period1").join("resampled_5S_data__B.csv")).unwrap();
    assert_eq!(a.lines().count(), 5);
    assert_eq!(b.lines().count(), 5);
    assert_eq!(a.lines().nth(1), Some("2025-01-25 09:30:00,11.0"));
    assert_eq!(b.lines().last(), Some("2025-01-25 09:30:15,20.0"));
    assert!(!output.join("Period2").exists());
}

#[test]
fn json_summary_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    dataset(&input);

    let out = tickgrid(&input, &dir.path().join("out"))
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["batch"]["periods"][0]["period"], "Period1");
    assert_eq!(v["batch"]["failures"].as_array().unwrap().len(), 1);
    assert_eq!(v["written"].as_array().unwrap().len(), 2);
}

#[test]
fn strict_mode_fails_on_skipped_work() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    dataset(&input);

    tickgrid(&input, &dir.path().join("out"))
        .arg("--strict")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("strict mode failed"));
}

#[test]
fn unwritable_period_does_not_stop_the_others() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    let output = dir.path().join("out");
    dataset(&input);
    trade(&input, "Period3", "A", "timestamp,price\n09:31:00,30\n09:31:05,31\n");
    // a plain file where the Period1 output directory should go
    fs::create_dir_all(&output).unwrap();
    fs::write(output.join("Period1"), "").unwrap();

    tickgrid(&input, &output)
        .assert()
        .success()
        .stdout(predicate::str::contains("failed: period Period1 failed"))
        .stdout(predicate::str::contains("2 period(s) processed, 2 failed, 1 file(s) written"));
    assert!(output.join("Period3").join("resampled_5S_data__A.csv").is_file());

    tickgrid(&input, &output)
        .arg("--strict")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("strict mode failed"));
}

#[test]
fn empty_dataset_exits_with_nothing_to_process() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    fs::create_dir_all(&input).unwrap();

    tickgrid(&input, &dir.path().join("out"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no period directories"));
}

#[test]
fn missing_input_is_an_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    tickgrid(&dir.path().join("absent"), &dir.path().join("out"))
        .assert()
        .code(10);
}

#[test]
fn non_positive_step_is_an_invalid_argument() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    dataset(&input);

    tickgrid(&input, &dir.path().join("out"))
        .arg("--step-secs")
        .arg("0")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("step must be positive"));
}

#[test]
fn date_is_required() {
    Command::cargo_bin("tickgrid")
        .unwrap()
        .assert()
        .code(2);
}
