//! # Domain
//!
//! The size rule: parsing of human-readable size specifications
//! ([`SizeSpec`], [`parse_size`]) and the [`SizeConstraint`] that judges an
//! input's byte length against one or two of them.

#![allow(clippy::multiple_crate_versions)]

pub mod rule;

pub use rule::{
    ByteLength, NamedRule, Observation, SizeConstraint, SizeInput, SizeSpec, SizeUnit, SizeViolation,
    UnresolvedSizePolicy, parse_size,
};
