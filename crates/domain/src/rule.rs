// crates/domain/src/rule.rs
pub mod constraint;
pub mod input;
pub mod named;
pub mod observation;
pub mod spec;
pub mod unit;
pub mod violation;

pub use constraint::SizeConstraint;
pub use input::{ByteLength, SizeInput};
pub use named::NamedRule;
pub use observation::{Observation, UnresolvedSizePolicy};
pub use spec::{SizeSpec, parse_size};
pub use unit::SizeUnit;
pub use violation::SizeViolation;
