//! Data models for the entities dealt with across the comparison pipeline

pub mod operator;
pub mod version;

pub use operator::{Comparator, OperatorFlags};
pub use version::VersionSum;
