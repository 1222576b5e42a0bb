//! # Infrastructure
//!
//! Adapters behind the ports: the metadata-backed [`FileSizeProbe`]
//! implementation, directory expansion, and rule-file loading.
//!
//! [`FileSizeProbe`]: size_guard_ports::FileSizeProbe

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;

pub use filesystem::{ExpansionPlan, MetadataSizeProbe, expand_inputs};
pub use persistence::{RuleDefinition, RuleFile};
