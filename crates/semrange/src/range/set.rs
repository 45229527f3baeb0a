//! Conjunctions of comparators and `||` unions of those conjunctions

use std::fmt;
use std::str::FromStr;

use crate::error::SemverError;
use crate::grammar;
use crate::range::Comparator;
use crate::version::SemanticVersion;

/// A conjunction of comparators. A version satisfies the set when it
/// satisfies every member; the empty set is satisfied by everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparatorSet {
    comparators: Vec<Comparator>,
}

impl ComparatorSet {
    /// The empty set, which every version satisfies.
    pub fn any() -> Self {
        ComparatorSet {
            comparators: Vec::new(),
        }
    }

    pub fn new(comparators: Vec<Comparator>) -> Self {
        ComparatorSet { comparators }
    }

    /// Parse a single range alternative (no `||`), desugaring any tilde,
    /// caret, x-range or hyphen shorthand it contains.
    pub fn parse(text: &str) -> Result<Self, SemverError> {
        grammar::parse_range(text)
    }

    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    pub fn is_any(&self) -> bool {
        self.comparators.is_empty()
    }

    pub(crate) fn push(&mut self, comparator: Comparator) {
        self.comparators.push(comparator);
    }

    /// Whether `version` satisfies every comparator in the set.
    pub fn satisfied_by(&self, version: &SemanticVersion) -> bool {
        self.comparators.iter().all(|c| c.matches(version))
    }

    /// Whether some version satisfies both sets.
    ///
    /// Comparators describe intervals on one axis, so pairwise overlap of
    /// all cross pairs is enough.
    pub fn intersects(&self, other: &ComparatorSet) -> bool {
        self.comparators
            .iter()
            .all(|a| other.comparators.iter().all(|b| a.intersects(b)))
    }
}

impl fmt::Display for ComparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comparators.is_empty() {
            return write!(f, "*");
        }
        for (i, comparator) in self.comparators.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", comparator)?;
        }
        Ok(())
    }
}

impl FromStr for ComparatorSet {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparatorSet::parse(s)
    }
}

/// A union of comparator sets, written with `||` between alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSet {
    alternatives: Vec<ComparatorSet>,
}

impl RangeSet {
    pub fn new(alternatives: Vec<ComparatorSet>) -> Self {
        RangeSet { alternatives }
    }

    /// Parse a full range expression, `||`-separated alternatives included.
    pub fn parse(text: &str) -> Result<Self, SemverError> {
        grammar::parse_range_set(text)
    }

    pub fn alternatives(&self) -> &[ComparatorSet] {
        &self.alternatives
    }

    /// Whether `version` satisfies at least one alternative.
    pub fn satisfied_by(&self, version: &SemanticVersion) -> bool {
        self.alternatives.iter().any(|set| set.satisfied_by(version))
    }

    /// Whether some version satisfies both range sets.
    pub fn intersects(&self, other: &RangeSet) -> bool {
        self.alternatives
            .iter()
            .any(|a| other.alternatives.iter().any(|b| a.intersects(b)))
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i > 0 {
                write!(f, " || ")?;
            }
            write!(f, "{}", alternative)?;
        }
        Ok(())
    }
}

impl FromStr for RangeSet {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeSet::parse(s)
    }
}
