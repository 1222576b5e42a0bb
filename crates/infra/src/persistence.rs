// crates/infra/src/persistence.rs
pub mod file_reader;
pub mod rule_file;

pub use file_reader::FileReader;
pub use rule_file::{RuleDefinition, RuleFile};
