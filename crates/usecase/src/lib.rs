//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: judges a batch of inputs against named size rules
//! - [`dto`]: report types handed to the presentation layer
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{CheckOutcome, CheckReport, CheckTotals};
pub use orchestrator::CheckInputs;
