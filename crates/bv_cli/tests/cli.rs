//! End-to-end CLI integration tests: invoke the built `bv` binary and assert
//! on its exit code and stdout/stderr shape.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn succeeds_and_emits_json_on_a_small_deterministic_run() {
    Command::cargo_bin("bv")
        .unwrap()
        .args([
            "--n", "2",
            "--m", "3",
            "--gamma", "50",
            "--heuristic", "evoi",
            "--israeli",
            "--dataset", "fixed",
            "--seed", "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"winner\""))
        .stdout(predicate::str::contains("\"query_count\""));
}

#[test]
fn exits_with_a_summary_line_when_render_is_summary() {
    Command::cargo_bin("bv")
        .unwrap()
        .args([
            "--n", "2",
            "--m", "3",
            "--gamma", "50",
            "--heuristic", "evoi",
            "--israeli",
            "--dataset", "fixed",
            "--seed", "42",
            "--render", "summary",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("winner="));
}

#[test]
fn rejects_too_few_candidates_with_a_nonzero_exit_code() {
    Command::cargo_bin("bv")
        .unwrap()
        .args(["--n", "2", "--m", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn rejects_an_unknown_heuristic_with_a_nonzero_exit_code() {
    Command::cargo_bin("bv")
        .unwrap()
        .args(["--n", "2", "--m", "3", "--heuristic", "bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("configuration error"));
}
