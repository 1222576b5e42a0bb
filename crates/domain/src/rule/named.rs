// crates/domain/src/rule/named.rs
use super::SizeConstraint;

/// A constraint together with the name it is reported under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRule {
    pub name: String,
    pub constraint: SizeConstraint,
}

impl NamedRule {
    pub fn new(name: impl Into<String>, constraint: SizeConstraint) -> Self {
        Self { name: name.into(), constraint }
    }
}
