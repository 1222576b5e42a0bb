// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod presentation;

use std::process::ExitCode;

use size_guard_infra::MetadataSizeProbe;
use size_guard_usecase::CheckInputs;

/// Exit code when at least one input fails a rule.
pub const EXIT_FAILED: u8 = 1;
/// Exit code for configuration and I/O errors.
pub const EXIT_ERROR: u8 = 2;

/// Checks every configured input and prints the report.
///
/// # Errors
/// Configuration, rule-file or rendering failures.
pub fn run(args: &args::Args) -> error::Result<ExitCode> {
    let config = config::Config::from_args(args)?;
    let probe = MetadataSizeProbe::new(config.follow_links);
    let report = CheckInputs::new(&probe).run(&config.rules, &config.inputs);

    println!("{}", presentation::render(&report, config.format, config.failures_only)?);

    Ok(if report.all_passed() { ExitCode::SUCCESS } else { ExitCode::from(EXIT_FAILED) })
}
