// crates/shared-kernel/src/value_objects/mod.rs
pub mod byte_count;

pub use byte_count::ByteCount;
