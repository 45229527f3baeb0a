//! Error type shared by the parsing and construction entry points

use thiserror::Error;

/// Error type for version and range operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    /// The input did not match the grammar at the given byte offset.
    #[error("Expected {rule} at offset {offset}")]
    Parse { rule: &'static str, offset: usize },
    /// The grammar matched but the resulting fields are inconsistent.
    #[error("Invalid version: {reason}")]
    InvalidVersion { reason: String },
}
