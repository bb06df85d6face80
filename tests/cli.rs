use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_invalid_duration_names_input_and_fails() {
    cargo_bin_cmd!("countdown")
        .arg("5x")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid time format: 5x"))
        .stderr(predicate::str::contains("'10m', '2h', '30s'"));
}

#[test]
fn test_duration_without_unit_fails() {
    cargo_bin_cmd!("countdown")
        .arg("10")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid time format: 10"));
}

#[test]
fn test_huge_duration_fails_cleanly() {
    for input in ["10000000000000000000s", "18446744073709551615s", "99999999999999h"] {
        cargo_bin_cmd!("countdown")
            .arg(input)
            .assert()
            .code(1)
            .stderr(predicate::str::contains(format!("Invalid time format: {input}")))
            .stderr(predicate::str::contains("panicked").not());
    }
}

#[test]
fn test_missing_argument_prints_usage() {
    cargo_bin_cmd!("countdown")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: countdown <duration>"));
}

#[test]
fn test_extra_arguments_print_usage() {
    cargo_bin_cmd!("countdown")
        .args(["10s", "--loud"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_zero_duration_celebrates_and_succeeds() {
    cargo_bin_cmd!("countdown")
        .arg("0s")
        .assert()
        .success()
        .stdout(predicate::str::contains("Time's Up"))
        .stdout(predicate::str::contains("\x07"));
}
