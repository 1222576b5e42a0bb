use size_guard_domain::{SizeConstraint, SizeInput, UnresolvedSizePolicy};
use size_guard_infra::MetadataSizeProbe;

use crate::common::TempWorkspace;

#[test]
fn two_sided_bound_on_real_files() {
    let ws = TempWorkspace::new();
    let rule = SizeConstraint::between("1kb", "1mb").unwrap();
    let probe = MetadataSizeProbe::default();

    let cases = [(1024, true), (1023, false), (1_048_576, true), (1_048_577, false)];
    for (len, expected) in cases {
        let path = ws.file_of_len(&format!("f{len}.bin"), len);
        assert_eq!(rule.validate(&SizeInput::from(path), &probe), expected, "{len} bytes");
    }
}

#[test]
fn string_inputs_are_paths() {
    let ws = TempWorkspace::new();
    let path = ws.file_of_len("five.txt", 5);
    let rule = SizeConstraint::at_most("500b").unwrap();

    let as_string = path.to_string_lossy().into_owned();
    assert!(rule.validate(&SizeInput::from(as_string.as_str()), &MetadataSizeProbe::default()));
}

#[test]
fn metadata_handles_are_measured_directly() {
    let ws = TempWorkspace::new();
    let path = ws.file_of_len("big.bin", 501);
    let meta = std::fs::metadata(&path).unwrap();
    let rule = SizeConstraint::at_most("500B").unwrap();
    assert!(!rule.validate(&SizeInput::from(&meta), &MetadataSizeProbe::default()));
}

#[test]
fn missing_paths_are_zero_length_by_default() {
    let ws = TempWorkspace::new();
    let missing = SizeInput::from(ws.missing("nope.bin"));
    let probe = MetadataSizeProbe::default();

    assert!(!SizeConstraint::at_least("1b").unwrap().validate(&missing, &probe));
    assert!(SizeConstraint::at_most("1mb").unwrap().validate(&missing, &probe));

    let strict = SizeConstraint::at_most("1mb").unwrap().with_unresolved_policy(UnresolvedSizePolicy::Reject);
    assert!(!strict.validate(&missing, &probe));
}

#[test]
fn inverted_range_rejects_existing_files() {
    let ws = TempWorkspace::new();
    let rule = SizeConstraint::between("10kb", "1kb").unwrap();
    let probe = MetadataSizeProbe::default();
    for len in [0, 1024, 5000, 10_240] {
        let path = ws.file_of_len(&format!("f{len}"), len);
        assert!(!rule.validate(&SizeInput::from(path), &probe));
    }
}

#[test]
fn unsupported_inputs_are_false() {
    let rule = SizeConstraint::at_most("1yb").unwrap();
    let input = SizeInput::from_json(&serde_json::json!(42));
    assert!(!rule.validate(&input, &MetadataSizeProbe::default()));
}
