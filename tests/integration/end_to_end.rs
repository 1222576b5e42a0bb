use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

fn size_guard() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_size_guard"));
    cmd.env_remove("SIZE_GUARD_LOG");
    cmd
}

#[test]
fn shows_help() {
    size_guard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("size_guard"));
}

#[test]
fn passing_files_exit_zero() {
    let ws = TempWorkspace::new();
    let file = ws.file_of_len("ok.bin", 1024);
    size_guard()
        .args(["--min", "1kb", "--max", "1mb"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 checked, 1 passed, 0 failed"));
}

#[test]
fn failing_files_exit_one() {
    let ws = TempWorkspace::new();
    let file = ws.file_of_len("big.bin", 501);
    size_guard()
        .args(["--max", "500b"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("must be lower than 500b"));
}

#[test]
fn malformed_size_is_a_usage_error() {
    size_guard()
        .args(["--max", "10xb", "whatever"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a recognized file size"));
}

#[test]
fn missing_bounds_are_rejected() {
    size_guard()
        .arg("Cargo.toml")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pass --min, --max or --rules"));
}

#[test]
fn missing_path_falls_back_to_zero() {
    let ws = TempWorkspace::new();
    let missing = ws.missing("gone.txt");
    size_guard().args(["--max", "1kb"]).arg(&missing).assert().success();
    size_guard().args(["--min", "1b"]).arg(&missing).assert().code(1);
    size_guard()
        .args(["--max", "1kb", "--on-unresolved", "reject"])
        .arg(&missing)
        .assert()
        .code(1);
}

#[test]
fn recursive_expansion_checks_every_file() {
    let ws = TempWorkspace::new();
    ws.file_of_len("a/one.bin", 10);
    ws.file_of_len("a/b/two.bin", 20);
    size_guard()
        .args(["--max", "1kb", "--recursive", "--format", "json"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"checked\": 2"));
}

#[cfg(unix)]
#[test]
fn recursive_walk_measures_dangling_symlink_as_empty() {
    let ws = TempWorkspace::new();
    ws.file_of_len("a.txt", 10);
    std::os::unix::fs::symlink(ws.missing("nowhere"), ws.path().join("dangling")).unwrap();
    size_guard()
        .args(["--max", "1kb", "--recursive", "--format", "json"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"checked\": 2"))
        .stdout(predicate::str::contains("\"assumed_empty\": 1"));
}

#[test]
fn json_inputs_include_unsupported_values() {
    let ws = TempWorkspace::new();
    let inputs = ws.write("inputs.json", br#"[ { "size": 100 }, 42, "does-not-exist" ]"#);
    size_guard()
        .args(["--max", "1kb", "--format", "json", "--inputs-json"])
        .arg(&inputs)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is not a file size input"))
        .stdout(predicate::str::contains("\"passed\": 2"));
}

#[test]
fn rules_file_conflicts_with_inline_bounds() {
    size_guard()
        .args(["--rules", "rules.yaml", "--max", "1kb", "x"])
        .assert()
        .code(2);
}

#[test]
fn piped_logs_carry_no_colour_codes() {
    let ws = TempWorkspace::new();
    size_guard()
        .env("SIZE_GUARD_LOG", "warn")
        .args(["--max", "1kb"])
        .arg(ws.missing("gone.bin"))
        .assert()
        .success()
        .stderr(predicate::str::contains("assuming 0 bytes"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
