//! Semver facade providing high-level string-in, string-out operations

use std::cmp::Ordering;

use crate::range::{Comparator, RangeSet};
use crate::version::SemanticVersion;

/// Main facade for semantic versioning operations.
///
/// Every function takes plain strings and swallows parse failures:
/// `satisfies` and `range_intersect` report `false`, `compare` reports
/// `None`, and the sorting functions drop unparseable entries. Use the
/// typed API ([`SemanticVersion`], [`RangeSet`]) when errors matter.
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range expression.
    pub fn satisfies(version: &str, range: &str) -> bool {
        let version = match SemanticVersion::parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };
        let range = match RangeSet::parse(range) {
            Ok(r) => r,
            Err(_) => return false,
        };
        range.satisfied_by(&version)
    }

    /// Return all versions that satisfy the given range, in input order.
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let range = match RangeSet::parse(range) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter_map(|v| {
                let version = SemanticVersion::parse(v).ok()?;
                if range.satisfied_by(&version) {
                    Some(v.to_string())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Compare two version strings by precedence. `None` when either side
    /// does not parse.
    pub fn compare(a: &str, b: &str) -> Option<Ordering> {
        let a = SemanticVersion::parse(a).ok()?;
        let b = SemanticVersion::parse(b).ok()?;
        Some(a.cmp(&b))
    }

    /// Check if two single comparators admit at least one common version.
    pub fn range_intersect(a: &str, b: &str) -> bool {
        let a = match Comparator::parse(a) {
            Ok(c) => c,
            Err(_) => return false,
        };
        let b = match Comparator::parse(b) {
            Ok(c) => c,
            Err(_) => return false,
        };
        a.intersects(&b)
    }

    /// Check if a string is a well-formed version.
    pub fn is_valid(version: &str) -> bool {
        SemanticVersion::parse(version).is_ok()
    }

    /// Sort versions in ascending precedence order.
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending precedence order (reverse sort).
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Parse once, keeping the original index of every entry.
        let mut parsed: Vec<(SemanticVersion, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((SemanticVersion::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return original spellings in sorted order.
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
