// crates/usecase/src/dto.rs
use serde::Serialize;
use size_guard_domain::Observation;

/// Result of judging one input against one named rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub rule: String,
    pub input: String,
    pub observation: Observation,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckTotals {
    pub checked: usize,
    pub passed: usize,
    pub failed: usize,
    /// Outcomes whose size was assumed to be zero after a failed lookup.
    pub assumed_empty: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
    pub totals: CheckTotals,
}

impl CheckReport {
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<CheckOutcome>) -> Self {
        let totals = outcomes.iter().fold(CheckTotals::default(), |mut acc, o| {
            acc.checked += 1;
            if o.passed {
                acc.passed += 1;
            } else {
                acc.failed += 1;
            }
            if o.observation.is_fallback() {
                acc.assumed_empty += 1;
            }
            acc
        });
        Self { outcomes, totals }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.totals.failed == 0
    }
}
