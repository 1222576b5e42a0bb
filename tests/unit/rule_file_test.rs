use size_guard_domain::{SizeInput, UnresolvedSizePolicy};
use size_guard_infra::{MetadataSizeProbe, RuleFile};
use size_guard_usecase::CheckInputs;

use crate::common::TempWorkspace;

#[test]
fn rule_file_drives_a_batch_check() {
    let ws = TempWorkspace::new();
    let rules_path = ws.write(
        "rules.json",
        br#"{ "rules": [
            { "name": "avatar", "min": "1kb", "max": "64kb" },
            { "name": "strict", "max": "1mb", "on_unresolved": "reject" }
        ] }"#,
    );
    let ok = ws.file_of_len("avatar.png", 2048);
    let missing = ws.missing("gone.png");

    let rules = RuleFile::load(&rules_path).unwrap().build_rules(UnresolvedSizePolicy::AssumeEmpty).unwrap();
    let probe = MetadataSizeProbe::default();
    let report = CheckInputs::new(&probe).run(&rules, &[SizeInput::from(ok), SizeInput::from(missing)]);

    let passed: Vec<_> = report.outcomes.iter().map(|o| (o.rule.as_str(), o.passed)).collect();
    assert_eq!(passed, vec![("avatar", true), ("strict", true), ("avatar", false), ("strict", false)]);
    assert_eq!(report.totals.assumed_empty, 1);
}

#[test]
fn malformed_rule_file_reports_the_rule() {
    let ws = TempWorkspace::new();
    let rules_path = ws.write("rules.json", br#"{ "rules": [ { "name": "oops", "max": "-5mb" } ] }"#);
    let err = RuleFile::load(&rules_path).unwrap().build_rules(UnresolvedSizePolicy::default()).unwrap_err();
    assert!(err.to_string().contains("oops"));
    assert!(err.to_string().contains("-5mb"));
}
