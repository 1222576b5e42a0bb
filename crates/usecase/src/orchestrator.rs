// crates/usecase/src/orchestrator.rs
use size_guard_domain::{NamedRule, SizeInput};
use size_guard_ports::FileSizeProbe;

use crate::dto::{CheckOutcome, CheckReport};

/// Judges every input against every rule.
pub struct CheckInputs<'a> {
    probe: &'a dyn FileSizeProbe,
}

impl<'a> CheckInputs<'a> {
    pub fn new(probe: &'a dyn FileSizeProbe) -> Self {
        Self { probe }
    }

    /// Outcomes are ordered by input, then by rule, regardless of the `parallel` feature.
    pub fn run(&self, rules: &[NamedRule], inputs: &[SizeInput]) -> CheckReport {
        log::debug!("checking {} inputs against {} rules", inputs.len(), rules.len());

        #[cfg(feature = "parallel")]
        let outcomes: Vec<CheckOutcome> = {
            use rayon::prelude::*;
            inputs
                .par_iter()
                .flat_map_iter(|input| rules.iter().map(move |rule| self.check_one(rule, input)))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<CheckOutcome> = inputs
            .iter()
            .flat_map(|input| rules.iter().map(move |rule| self.check_one(rule, input)))
            .collect();

        CheckReport::from_outcomes(outcomes)
    }

    fn check_one(&self, rule: &NamedRule, input: &SizeInput) -> CheckOutcome {
        let label = input.label();
        let observation = rule.constraint.observe(input, self.probe);
        let verdict = rule.constraint.judge(&label, &observation);
        CheckOutcome {
            rule: rule.name.clone(),
            input: label,
            observation,
            passed: verdict.is_ok(),
            message: verdict.err().map(|v| v.to_string()),
        }
    }
}
