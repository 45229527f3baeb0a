//! Single operator-version comparators and their intersection test

use std::fmt;
use std::str::FromStr;

use crate::error::SemverError;
use crate::grammar;
use crate::range::Operator;
use crate::version::SemanticVersion;

/// An operator paired with a boundary version, such as `>=1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    operator: Operator,
    version: SemanticVersion,
}

impl Comparator {
    pub fn new(operator: Operator, version: SemanticVersion) -> Self {
        Comparator { operator, version }
    }

    /// Parse a comparator string such as `>=1.2` or `1.2.3` (bare versions
    /// mean equality).
    pub fn parse(text: &str) -> Result<Self, SemverError> {
        grammar::parse_comparator(text)
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &SemanticVersion {
        &self.version
    }

    /// Whether `version` satisfies this comparator.
    pub fn matches(&self, version: &SemanticVersion) -> bool {
        self.operator.matches(version.cmp(&self.version))
    }

    /// Whether some version satisfies both comparators.
    pub fn intersects(&self, other: &Comparator) -> bool {
        // An equality pins one side to a single version, so the question
        // reduces to containment.
        if self.operator == Operator::Equal {
            return other.matches(&self.version);
        }
        if other.operator == Operator::Equal {
            return self.matches(&other.version);
        }

        // Same direction comparisons always have a solution (both bound
        // below, or both bound above).
        if (self.operator.is_less_side() && other.operator.is_less_side())
            || (self.operator.is_greater_side() && other.operator.is_greater_side())
        {
            return true;
        }

        // Opposite directions: the boundaries themselves decide, and the
        // shared point only counts when both ends include it.
        match (self.operator, other.operator) {
            (Operator::LessThanOrEqual, Operator::GreaterThanOrEqual) => {
                other.version <= self.version
            }
            (Operator::GreaterThanOrEqual, Operator::LessThanOrEqual) => {
                other.version >= self.version
            }
            _ => {
                if self.operator.is_less_side() {
                    other.version < self.version
                } else {
                    other.version > self.version
                }
            }
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

impl FromStr for Comparator {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Comparator::parse(s)
    }
}
