// crates/domain/src/rule/unit.rs
use std::fmt;

/// Binary size unit accepted in a size specification.
///
/// Each unit scales by `1024^exponent`; the declaration order is the exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeUnit {
    Bytes,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

impl SizeUnit {
    /// All units in ascending exponent order.
    pub const ALL: [Self; 9] = [
        Self::Bytes,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
        Self::Exa,
        Self::Zetta,
        Self::Yotta,
    ];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bytes => "b",
            Self::Kilo => "kb",
            Self::Mega => "mb",
            Self::Giga => "gb",
            Self::Tera => "tb",
            Self::Peta => "pb",
            Self::Exa => "eb",
            Self::Zetta => "zb",
            Self::Yotta => "yb",
        }
    }

    #[must_use]
    pub const fn exponent(self) -> i32 {
        self as i32
    }

    /// `1024^exponent` as a float; exact for every unit up to `yb`.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        1024_f64.powi(self.exponent())
    }

    /// Case-insensitive lookup of a unit code such as `"MB"` or `"kb"`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponents_follow_declaration_order() {
        for (idx, unit) in SizeUnit::ALL.iter().enumerate() {
            assert_eq!(unit.exponent(), i32::try_from(idx).unwrap());
        }
    }

    #[test]
    fn from_code_ignores_case() {
        assert_eq!(SizeUnit::from_code("MB"), Some(SizeUnit::Mega));
        assert_eq!(SizeUnit::from_code("kB"), Some(SizeUnit::Kilo));
        assert_eq!(SizeUnit::from_code("b"), Some(SizeUnit::Bytes));
        assert_eq!(SizeUnit::from_code("YB"), Some(SizeUnit::Yotta));
    }

    #[test]
    fn from_code_rejects_unknown_and_long_forms() {
        assert_eq!(SizeUnit::from_code("xb"), None);
        assert_eq!(SizeUnit::from_code("kib"), None);
        assert_eq!(SizeUnit::from_code("k"), None);
        assert_eq!(SizeUnit::from_code(""), None);
    }

    #[test]
    fn multiplier_is_power_of_1024() {
        assert_eq!(SizeUnit::Bytes.multiplier(), 1.0);
        assert_eq!(SizeUnit::Kilo.multiplier(), 1024.0);
        assert_eq!(SizeUnit::Mega.multiplier(), 1_048_576.0);
        assert_eq!(SizeUnit::Tera.multiplier(), 1_099_511_627_776.0);
    }
}
