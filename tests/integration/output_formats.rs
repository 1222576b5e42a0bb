use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

fn run_with_format(ws: &TempWorkspace, format: &str) -> assert_cmd::assert::Assert {
    let ok = ws.file_of_len("ok.bin", 10);
    let big = ws.file_of_len("big.bin", 2000);
    Command::new(env!("CARGO_BIN_EXE_size_guard"))
        .args(["--max", "1kb", "--format", format])
        .arg(&ok)
        .arg(&big)
        .assert()
        .code(1)
}

#[test]
fn json_output_is_parseable() {
    let ws = TempWorkspace::new();
    let out = run_with_format(&ws, "json").get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["totals"]["checked"], 2);
    assert_eq!(v["totals"]["failed"], 1);
    assert_eq!(v["outcomes"][1]["observation"]["bytes"], 2000);
}

#[test]
fn jsonl_ends_with_totals() {
    let ws = TempWorkspace::new();
    let out = run_with_format(&ws, "jsonl").get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
    assert_eq!(last["type"], "totals");
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_output_lists_outcomes() {
    let ws = TempWorkspace::new();
    run_with_format(&ws, "yaml").stdout(predicate::str::contains("outcomes:"));
}

#[test]
fn failures_only_table() {
    let ws = TempWorkspace::new();
    let ok = ws.file_of_len("ok.bin", 10);
    let big = ws.file_of_len("big.bin", 2000);
    Command::new(env!("CARGO_BIN_EXE_size_guard"))
        .args(["--max", "1kb", "--failures-only"])
        .arg(&ok)
        .arg(&big)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("big.bin"))
        .stdout(predicate::str::contains("ok.bin").not());
}
