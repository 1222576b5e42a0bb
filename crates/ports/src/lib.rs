//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: the "how large is this path" query a size rule consults
//!   when it is handed a path instead of a resource with a known length.
//!
//! The domain layer depends on these traits only; concrete adapters live in
//! `size_guard_infra`.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;

pub use filesystem::FileSizeProbe;
