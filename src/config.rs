use std::path::Path;

use serde_json::Value;
use size_guard_domain::{NamedRule, SizeConstraint, SizeInput, UnresolvedSizePolicy};
use size_guard_infra::{ExpansionPlan, RuleFile, expand_inputs, persistence::FileReader};
use size_guard_shared_kernel::{ErrorContext, InfrastructureError, PresentationError};

use crate::args::{Args, OutputFormat};
use crate::error::Result;

/// Everything a run needs, resolved from the command line and the files it names.
#[derive(Debug, Clone)]
pub struct Config {
    pub rules: Vec<NamedRule>,
    pub inputs: Vec<SizeInput>,
    pub format: OutputFormat,
    pub failures_only: bool,
    pub follow_links: bool,
}

impl Config {
    /// # Errors
    /// Malformed sizes, unreadable rule/input files, or a run with nothing to check.
    pub fn from_args(args: &Args) -> Result<Self> {
        let policy = UnresolvedSizePolicy::from(args.on_unresolved);
        let rules = build_rules(args, policy)?;
        let inputs = collect_inputs(args)?;
        if inputs.is_empty() {
            return Err(PresentationError::ConfigBuildFailed("no inputs given: pass paths or --inputs-json".into()).into());
        }
        log::info!("{} rules, {} inputs", rules.len(), inputs.len());

        Ok(Self {
            rules,
            inputs,
            format: args.format,
            failures_only: args.failures_only,
            follow_links: !args.no_follow_links,
        })
    }
}

fn build_rules(args: &Args, policy: UnresolvedSizePolicy) -> Result<Vec<NamedRule>> {
    if let Some(path) = &args.rules {
        let file = RuleFile::load(path)?;
        return Ok(file.build_rules(policy)?);
    }

    let min = args.min.as_ref().map(|s| s.as_str());
    let max = args.max.as_ref().map(|s| s.as_str());
    let constraint = SizeConstraint::new(min, max)
        .map_err(|err| PresentationError::ConfigBuildFailed(format!("{err}: pass --min, --max or --rules")))?
        .with_unresolved_policy(policy);
    Ok(vec![NamedRule::new(args.name.clone(), constraint)])
}

fn collect_inputs(args: &Args) -> Result<Vec<SizeInput>> {
    let plan = ExpansionPlan {
        recursive: args.recursive,
        include_hidden: args.hidden,
        follow_links: !args.no_follow_links,
    };
    let mut inputs: Vec<SizeInput> = expand_inputs(&args.paths, plan)?.into_iter().map(SizeInput::from).collect();

    if let Some(path) = &args.inputs_json {
        inputs.extend(load_json_inputs(path)?);
    }
    Ok(inputs)
}

/// Reads a JSON array of input values; each element is mapped with [`SizeInput::from_json`].
///
/// # Errors
/// The file cannot be read, is not JSON, or is not an array.
pub fn load_json_inputs(path: &Path) -> Result<Vec<SizeInput>> {
    let text = FileReader::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)
        .map_err(InfrastructureError::from)
        .with_context(|| format!("reading inputs from {}", path.display()))?;
    match value {
        Value::Array(items) => Ok(items.iter().map(SizeInput::from_json).collect()),
        _ => Err(PresentationError::ConfigBuildFailed(format!("{}: expected a JSON array of inputs", path.display())).into()),
    }
}
