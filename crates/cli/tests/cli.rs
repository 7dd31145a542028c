use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

fn target_sum() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("target_sum").unwrap()
}

#[test]
fn test_help() {
    target_sum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--strategy"))
        .stdout(predicate::str::contains("--verify"));
}

#[test]
fn test_plain_single_problem() {
    target_sum()
        .args(["-t", "3", "1", "1", "1", "1", "1", "--format", "plain"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_negative_target_and_numbers() {
    target_sum()
        .args(["--target", "-5", "5", "--format", "plain"])
        .assert()
        .success()
        .stdout("1\n");
    target_sum()
        .args(["-t", "0", "-3", "3", "--format", "plain"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_empty_sequence_has_one_way() {
    target_sum()
        .args(["-t", "0", "--format", "plain"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_every_strategy_agrees() {
    for strategy in ["direct", "complement", "worklist", "dynamic", "auto"] {
        target_sum()
            .args(["-t", "0", "1,2,3", "--format", "plain", "--strategy", strategy])
            .assert()
            .success()
            .stdout("2\n");
    }
}

#[test]
fn test_verify_json() {
    let assert = target_sum()
        .args(["-t", "0", "1", "2", "3", "--verify", "--format", "json"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json[0]["ways"], 2);
    assert_eq!(json[0]["strategy"], "complement");
    assert_eq!(json[0]["verified_by"].as_array().unwrap().len(), 3);
}

#[test]
fn test_table_is_default() {
    target_sum()
        .args(["-t", "3", "1", "1", "1", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WAYS"))
        .stdout(predicate::str::contains("Completed: 1 problems solved."));
}

#[test]
fn test_batch_file_csv_with_total() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# problems").unwrap();
    writeln!(file, "3: 1 1 1 1 1").unwrap();
    writeln!(file, r#"{{"numbers":[5],"target":0}}"#).unwrap();

    target_sum()
        .arg("--input")
        .arg(file.path())
        .args(["--format", "csv", "--total-row", "--jobs", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3,1 1 1 1 1,5,complement,"))
        .stdout(predicate::str::contains("0,5,0,complement,"))
        .stdout(predicate::str::ends_with(",TOTAL,5,,\n"));
}

#[test]
fn test_batch_from_stdin() {
    target_sum()
        .args(["--input", "-", "--format", "plain"])
        .write_stdin("0: 1 2 3\n5: 5\n")
        .assert()
        .success()
        .stdout("2\n1\n");
}

#[test]
fn test_too_long_for_exhaustive_strategy_fails() {
    target_sum()
        .args(["-t", "1", "1,1,1", "--strategy", "direct", "--max-len", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the direct limit of 2"));
}

#[test]
fn test_partial_batch_failure_still_prints_successes() {
    target_sum()
        .args(["--input", "-", "--format", "plain", "--strategy", "worklist", "--max-len", "2"])
        .write_stdin("1: 1\n1: 1 1 1\n")
        .assert()
        .failure()
        .stdout("1\n")
        .stderr(predicate::str::contains("problem #2"));
}

#[test]
fn test_malformed_batch_line_is_reported() {
    target_sum()
        .args(["--input", "-"])
        .write_stdin("1: 1\nnot a problem\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2"));
}

#[test]
fn test_missing_target_is_reported() {
    target_sum()
        .args(["1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--target is required"));
}

#[test]
fn test_partial_sum_cap_is_reported() {
    target_sum()
        .args(["-t", "2", "2,4,8,16,32,64,128,256,512,1024,2048,4096"])
        .args(["--strategy", "dynamic", "--max-sums", "100", "--format", "plain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("More than 100 distinct partial sums"));
}
