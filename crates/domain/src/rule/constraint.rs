// crates/domain/src/rule/constraint.rs
use std::fmt;

use size_guard_ports::FileSizeProbe;
use size_guard_shared_kernel::{DomainError, DomainResult};

use super::{Observation, SizeInput, SizeSpec, SizeViolation, UnresolvedSizePolicy};

/// Inclusive byte-size bound built from one or two size specifications.
///
/// Parsing happens once in the constructor; afterwards the constraint is
/// read-only and can be shared across threads. `min > max` is accepted and
/// simply never satisfied.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeConstraint {
    min: Option<SizeSpec>,
    max: Option<SizeSpec>,
    unresolved: UnresolvedSizePolicy,
}

impl SizeConstraint {
    /// Builds a constraint from optional lower and upper specifications.
    ///
    /// # Errors
    /// [`DomainError::MalformedSpecification`] for a spec that is not a size,
    /// [`DomainError::Unbounded`] when both sides are absent.
    pub fn new(min: Option<&str>, max: Option<&str>) -> DomainResult<Self> {
        let min = min.map(SizeSpec::parse).transpose()?;
        let max = max.map(SizeSpec::parse).transpose()?;
        if min.is_none() && max.is_none() {
            return Err(DomainError::Unbounded);
        }
        Ok(Self { min, max, unresolved: UnresolvedSizePolicy::default() })
    }

    /// # Errors
    /// See [`SizeConstraint::new`].
    pub fn at_least(min: &str) -> DomainResult<Self> {
        Self::new(Some(min), None)
    }

    /// # Errors
    /// See [`SizeConstraint::new`].
    pub fn at_most(max: &str) -> DomainResult<Self> {
        Self::new(None, Some(max))
    }

    /// # Errors
    /// See [`SizeConstraint::new`].
    pub fn between(min: &str, max: &str) -> DomainResult<Self> {
        Self::new(Some(min), Some(max))
    }

    #[must_use]
    pub fn with_unresolved_policy(mut self, policy: UnresolvedSizePolicy) -> Self {
        self.unresolved = policy;
        self
    }

    #[must_use]
    pub fn min_spec(&self) -> Option<&str> {
        self.min.as_ref().map(SizeSpec::raw)
    }

    #[must_use]
    pub fn min_bound(&self) -> Option<f64> {
        self.min.as_ref().map(SizeSpec::bytes)
    }

    #[must_use]
    pub fn max_spec(&self) -> Option<&str> {
        self.max.as_ref().map(SizeSpec::raw)
    }

    #[must_use]
    pub fn max_bound(&self) -> Option<f64> {
        self.max.as_ref().map(SizeSpec::bytes)
    }

    #[must_use]
    pub fn unresolved_policy(&self) -> UnresolvedSizePolicy {
        self.unresolved
    }

    /// Inclusive comparison of `observed` against whichever bounds are set.
    #[must_use]
    pub fn is_satisfied_by(&self, observed: f64) -> bool {
        self.min_bound().is_none_or(|min| observed >= min)
            && self.max_bound().is_none_or(|max| observed <= max)
    }

    /// Resolves the byte count of `input`, applying the unresolved-size policy
    /// when a path lookup fails.
    pub fn observe<P>(&self, input: &SizeInput, probe: &P) -> Observation
    where
        P: FileSizeProbe + ?Sized,
    {
        match input {
            SizeInput::Resource(bytes) => Observation::Measured { bytes: *bytes },
            SizeInput::Path(path) => match probe.size_of(path) {
                Ok(bytes) => Observation::Measured { bytes },
                Err(err) => {
                    let reason = err.to_string();
                    match self.unresolved {
                        UnresolvedSizePolicy::AssumeEmpty => {
                            log::warn!("{}: size unavailable, assuming 0 bytes ({reason})", path.display());
                            Observation::AssumedEmpty { reason }
                        }
                        UnresolvedSizePolicy::Reject => {
                            log::debug!("{}: size unavailable, rejecting ({reason})", path.display());
                            Observation::Unresolved { reason }
                        }
                    }
                }
            },
            SizeInput::Unsupported(kind) => Observation::Unsupported { input: kind.clone() },
        }
    }

    /// `true` when `input` is a resource or path whose size lies within the bounds.
    pub fn validate<P>(&self, input: &SizeInput, probe: &P) -> bool
    where
        P: FileSizeProbe + ?Sized,
    {
        self.check(input, probe).is_ok()
    }

    /// Like [`SizeConstraint::validate`], but says why an input was rejected.
    ///
    /// # Errors
    /// A [`SizeViolation`] describing the failed bound or the unusable input.
    pub fn check<P>(&self, input: &SizeInput, probe: &P) -> Result<(), SizeViolation>
    where
        P: FileSizeProbe + ?Sized,
    {
        self.judge(&input.label(), &self.observe(input, probe))
    }

    /// Judges an already-resolved observation; `label` names the input in the violation.
    ///
    /// # Errors
    /// A [`SizeViolation`] when the observation has no byte count or falls outside the bounds.
    pub fn judge(&self, label: &str, observation: &Observation) -> Result<(), SizeViolation> {
        let input = label.to_string();
        let observed = match observation {
            Observation::Unsupported { .. } => return Err(SizeViolation::Unsupported { input }),
            Observation::Unresolved { reason } => {
                return Err(SizeViolation::Unresolved { input, reason: reason.clone() });
            }
            other => other.bytes().unwrap_or_default(),
        };

        if self.is_satisfied_by(observed.as_f64()) {
            log::debug!("{label}: {observed} bytes {self}");
            return Ok(());
        }

        Err(match (self.min_spec(), self.max_spec()) {
            (Some(min), Some(max)) => SizeViolation::NotBetween {
                input,
                min: min.to_string(),
                max: max.to_string(),
                observed,
            },
            (Some(min), None) => SizeViolation::TooSmall { input, min: min.to_string(), observed },
            (None, max) => SizeViolation::TooLarge {
                input,
                max: max.unwrap_or_default().to_string(),
                observed,
            },
        })
    }
}

impl fmt::Display for SizeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => write!(f, "between {min} and {max}"),
            (Some(min), None) => write!(f, "at least {min}"),
            (None, Some(max)) => write!(f, "at most {max}"),
            (None, None) => f.write_str("unbounded"),
        }
    }
}
