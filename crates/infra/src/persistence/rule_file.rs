// crates/infra/src/persistence/rule_file.rs
use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};
use size_guard_domain::{NamedRule, SizeConstraint, UnresolvedSizePolicy};
use size_guard_shared_kernel::{DomainError, DomainResult, ErrorContext, InfrastructureError, Result};

use super::FileReader;

/// On-disk rule set, as YAML or JSON:
///
/// ```yaml
/// rules:
///   - name: avatars
///     min: 1kb
///     max: 1mb
///     on_unresolved: reject
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    pub rules: Vec<RuleDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub name: String,
    #[serde(default)]
    pub min: Option<SpecValue>,
    #[serde(default)]
    pub max: Option<SpecValue>,
    #[serde(default)]
    pub on_unresolved: Option<UnresolvedSizePolicy>,
}

/// A size written either as text (`"10mb"`) or as a bare integer byte count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Bytes(u64),
    Text(String),
}

impl SpecValue {
    #[must_use]
    pub fn as_spec(&self) -> String {
        match self {
            Self::Bytes(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl RuleDefinition {
    /// # Errors
    /// [`DomainError::InvalidRule`] naming this rule when a bound is malformed or missing.
    pub fn build(&self, default_policy: UnresolvedSizePolicy) -> DomainResult<NamedRule> {
        let min = self.min.as_ref().map(SpecValue::as_spec);
        let max = self.max.as_ref().map(SpecValue::as_spec);
        let constraint = SizeConstraint::new(min.as_deref(), max.as_deref())
            .map_err(|err| DomainError::InvalidRule { name: self.name.clone(), reason: err.to_string() })?
            .with_unresolved_policy(self.on_unresolved.unwrap_or(default_policy));
        Ok(NamedRule::new(self.name.clone(), constraint))
    }
}

impl RuleFile {
    /// Loads a rule file, picking the format from the extension.
    ///
    /// # Errors
    /// I/O and parse failures, or an extension other than `.json`/`.yaml`/`.yml`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = FileReader::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        let parsed = match ext.as_deref() {
            Some("json") => Self::from_json_str(&text),
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Self::from_yaml_str(&text),
            _ => return Err(InfrastructureError::UnsupportedRuleFile { path: path.to_path_buf() }.into()),
        };
        parsed.with_context(|| format!("loading rules from {}", path.display()))
    }

    /// # Errors
    /// Returns the JSON parse error.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// # Errors
    /// Returns the YAML parse error.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Builds every rule, rejecting empty sets and duplicate names.
    ///
    /// # Errors
    /// The first [`DomainError`] encountered.
    pub fn build_rules(&self, default_policy: UnresolvedSizePolicy) -> DomainResult<Vec<NamedRule>> {
        if self.rules.is_empty() {
            return Err(DomainError::InvalidRule {
                name: String::from("*"),
                reason: String::from("rule file defines no rules"),
            });
        }

        let mut seen = HashSet::new();
        self.rules
            .iter()
            .map(|def| {
                if !seen.insert(def.name.as_str()) {
                    return Err(DomainError::InvalidRule {
                        name: def.name.clone(),
                        reason: String::from("duplicate rule name"),
                    });
                }
                def.build(default_policy)
            })
            .collect()
    }
}
