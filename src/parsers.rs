use size_guard_domain::SizeSpec;
use size_guard_shared_kernel::PresentationError;

/// Wrapper type to validate size arguments (e.g. 512b, 10MB, 2048) at parse time.
///
/// The raw text is kept; the constraint parses it again so that violation
/// messages quote exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeArg(pub String);

impl std::str::FromStr for SizeArg {
    type Err = PresentationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeSpec::parse(s).map(|_| Self(s.to_string())).map_err(|err| PresentationError::InvalidValue {
            flag: "size".into(),
            value: s.to_string(),
            reason: err.to_string(),
        })
    }
}

impl SizeArg {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
