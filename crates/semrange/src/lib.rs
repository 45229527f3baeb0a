//! Semantic version parsing, precedence and range matching
//!
//! This crate parses SemVer 2.0.0 versions (with optional minor and patch
//! components), compares them by precedence, and matches them against
//! npm-style range expressions with tilde, caret, x-range and hyphen
//! shorthands.

pub mod range;

mod error;
mod grammar;
mod prerelease;
mod semver;
mod version;

pub use error::SemverError;
pub use prerelease::{Identifier, PreRelease};
pub use range::{Comparator, ComparatorSet, InvalidOperatorError, Operator, RangeSet};
pub use semver::Semver;
pub use version::SemanticVersion;
