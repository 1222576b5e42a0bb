// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use size_guard::{EXIT_ERROR, args::Args, logging};

fn try_main(args: &Args) -> Result<ExitCode> {
    size_guard::run(args).context("size_guard failed")
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match try_main(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
