// crates/domain/src/rule/spec.rs
use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use size_guard_shared_kernel::{DomainError, DomainResult};

use super::SizeUnit;

/// A parsed size specification such as `"10MB"` or `"2048"`.
///
/// Keeps the raw text for diagnostics next to the canonical byte value.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeSpec {
    raw: String,
    unit: Option<SizeUnit>,
    bytes: f64,
}

impl SizeSpec {
    /// Parses `spec` into its canonical byte value.
    ///
    /// Accepted: a decimal magnitude (`12`, `1.5`) followed by nothing (raw
    /// bytes) or exactly one unit code, in any letter case. Whitespace, signs,
    /// exponents and trailing characters are rejected, as is a magnitude too
    /// large to be represented as a finite `f64` byte count.
    ///
    /// # Errors
    /// Returns [`DomainError::MalformedSpecification`] carrying `spec`.
    pub fn parse(spec: &str) -> DomainResult<Self> {
        let malformed = || DomainError::MalformedSpecification { spec: spec.to_string() };

        let (magnitude, suffix) = tokenize(spec).ok_or_else(malformed)?;
        let unit = if suffix.is_empty() {
            None
        } else {
            Some(SizeUnit::from_code(suffix).ok_or_else(malformed)?)
        };
        let magnitude: f64 = magnitude.parse().map_err(|_| malformed())?;
        let bytes = unit.map_or(magnitude, |u| magnitude * u.multiplier());
        if !bytes.is_finite() {
            return Err(malformed());
        }

        log::debug!("size spec {spec:?} -> {bytes} bytes");
        Ok(Self { raw: spec.to_string(), unit, bytes })
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `None` for a bare byte count.
    #[must_use]
    pub fn unit(&self) -> Option<SizeUnit> {
        self.unit
    }

    /// Canonical byte value; always finite and non-negative.
    #[must_use]
    pub fn bytes(&self) -> f64 {
        self.bytes
    }
}

impl FromStr for SizeSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Converts a size specification straight to its canonical byte value.
///
/// # Errors
/// Returns [`DomainError::MalformedSpecification`] when `spec` is not a size.
pub fn parse_size(spec: &str) -> DomainResult<f64> {
    SizeSpec::parse(spec).map(|s| s.bytes())
}

/// Splits `spec` into its numeric magnitude and its (possibly empty) letter suffix.
fn tokenize(spec: &str) -> Option<(&str, &str)> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)?)([A-Za-z]*)$").unwrap());

    let caps = re.captures(spec)?;
    Some((caps.get(1)?.as_str(), caps.get(2).map_or("", |m| m.as_str())))
}
