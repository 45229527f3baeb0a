//! Pre-release identifier sequences and their precedence rules

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SemverError;
use crate::grammar;

/// A single pre-release identifier, classified at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Entirely digits with no leading zero (`0`, `7`, `42`).
    Numeric(u64),
    /// Contains at least one non-digit (`alpha`, `rc-2`, `x86`).
    AlphaNumeric(String),
}

impl Identifier {
    /// True for the numeric form.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// The numeric value, if this is the numeric form.
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(value) => Some(*value),
            Identifier::AlphaNumeric(_) => None,
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            // A numeric identifier always has lower precedence than an
            // alphanumeric one.
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => write!(f, "{}", value),
            Identifier::AlphaNumeric(text) => write!(f, "{}", text),
        }
    }
}

/// An ordered sequence of pre-release identifiers.
///
/// The empty sequence means "no pre-release" and outranks every non-empty
/// sequence, so a release version sorts after all of its pre-releases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PreRelease {
    identifiers: Vec<Identifier>,
}

impl PreRelease {
    /// The empty sequence (a release version).
    pub fn new() -> Self {
        PreRelease {
            identifiers: Vec::new(),
        }
    }

    /// Parse a dot-separated identifier list (the part after `-`).
    pub fn parse(text: &str) -> Result<Self, SemverError> {
        grammar::parse_pre_release(text)
    }

    pub(crate) fn from_identifiers(identifiers: Vec<Identifier>) -> Self {
        PreRelease { identifiers }
    }

    /// True when no identifiers are present.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Number of identifiers.
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Identifier at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Identifier> {
        self.identifiers.get(index)
    }

    /// All identifiers in order.
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Append an identifier.
    pub fn push(&mut self, identifier: Identifier) {
        self.identifiers.push(identifier);
    }

    /// Keep only the first `len` identifiers.
    pub fn truncate(&mut self, len: usize) {
        self.identifiers.truncate(len);
    }

    /// The next sequence in precedence order.
    ///
    /// Trailing numeric zeros render the same as an absent tail and are
    /// dropped first. The bump then lands on the last identifier: a numeric
    /// one is incremented, an alphanumeric one gets a new trailing `1`.
    /// A sequence of only zeros empties out (`0.0` becomes the release).
    pub fn increment(&self) -> PreRelease {
        let mut identifiers = self.identifiers.clone();
        while matches!(identifiers.last(), Some(Identifier::Numeric(0))) {
            identifiers.pop();
        }

        match identifiers.pop() {
            None => {}
            Some(Identifier::Numeric(value)) => {
                identifiers.push(Identifier::Numeric(value.saturating_add(1)));
            }
            Some(identifier @ Identifier::AlphaNumeric(_)) => {
                identifiers.push(identifier);
                identifiers.push(Identifier::Numeric(1));
            }
        }

        PreRelease { identifiers }
    }

    /// The previous sequence in precedence order.
    ///
    /// Mirrors [`PreRelease::increment`]: trailing zeros are dropped, then a
    /// trailing alphanumeric identifier is removed, and a numeric one is
    /// decremented (removed entirely when it reaches zero).
    pub fn decrement(&self) -> PreRelease {
        let mut identifiers = self.identifiers.clone();
        while matches!(identifiers.last(), Some(Identifier::Numeric(0))) {
            identifiers.pop();
        }

        match identifiers.pop() {
            None | Some(Identifier::AlphaNumeric(_)) => {}
            Some(Identifier::Numeric(value)) => {
                if value > 1 {
                    identifiers.push(Identifier::Numeric(value - 1));
                }
            }
        }

        PreRelease { identifiers }
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        // No pre-release outranks any pre-release.
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        let mut a = self.identifiers.iter();
        let mut b = other.identifiers.iter();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return Ordering::Equal,
                // Equal shared prefix: the shorter sequence is lower.
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(x), Some(y)) => match x.cmp(y) {
                    Ordering::Equal => continue,
                    ordering => return ordering,
                },
            }
        }
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, identifier) in self.identifiers.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", identifier)?;
        }
        Ok(())
    }
}

impl FromStr for PreRelease {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PreRelease::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pre(text: &str) -> PreRelease {
        PreRelease::parse(text).unwrap()
    }

    #[test]
    fn test_parse_classifies_identifiers() {
        let p = pre("alpha.1.x-2.0");
        assert_eq!(p.len(), 4);
        assert_eq!(p.get(0), Some(&Identifier::AlphaNumeric("alpha".to_string())));
        assert_eq!(p.get(1), Some(&Identifier::Numeric(1)));
        assert_eq!(p.get(2), Some(&Identifier::AlphaNumeric("x-2".to_string())));
        assert_eq!(p.get(3), Some(&Identifier::Numeric(0)));
        assert!(p.get(1).map_or(false, Identifier::is_numeric));
        assert_eq!(p.get(1).and_then(Identifier::as_numeric), Some(1));
    }

    #[test]
    fn test_parse_rejects_leading_zero_numeric() {
        assert!(PreRelease::parse("01").is_err());
        assert!(PreRelease::parse("alpha.007").is_err());
        // A leading zero is fine once a non-digit makes the token
        // alphanumeric.
        assert_eq!(
            pre("0a").get(0),
            Some(&Identifier::AlphaNumeric("0a".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_empty_identifiers() {
        assert!(PreRelease::parse("").is_err());
        assert!(PreRelease::parse("alpha.").is_err());
        assert!(PreRelease::parse(".alpha").is_err());
        assert!(PreRelease::parse("alpha..1").is_err());
    }

    #[test]
    fn test_ordering_numeric_below_alphanumeric() {
        assert!(pre("1") < pre("alpha"));
        assert!(pre("999999") < pre("0a"));
        assert!(pre("alpha") > pre("11111"));
    }

    #[test]
    fn test_ordering_numeric_by_value() {
        assert!(pre("2") < pre("11"));
        assert!(pre("beta.2") < pre("beta.11"));
        assert_eq!(pre("beta.2").cmp(&pre("beta.2")), Ordering::Equal);
    }

    #[test]
    fn test_ordering_alphanumeric_is_bytewise() {
        assert!(pre("alpha") < pre("beta"));
        assert!(pre("alpha") < pre("alpha-1"));
        assert!(pre("RC") < pre("alpha"));
    }

    #[test]
    fn test_ordering_shorter_prefix_is_lower() {
        assert!(pre("alpha") < pre("alpha.1"));
        assert!(pre("alpha.1") < pre("alpha.1.1"));
    }

    #[test]
    fn test_ordering_empty_outranks_everything() {
        assert!(PreRelease::new() > pre("rc.1"));
        assert!(pre("alpha") < PreRelease::new());
        assert_eq!(PreRelease::new().cmp(&PreRelease::new()), Ordering::Equal);
    }

    #[test]
    fn test_increment() {
        assert_eq!(pre("alpha.1").increment(), pre("alpha.2"));
        assert_eq!(pre("beta").increment(), pre("beta.1"));
        assert_eq!(pre("alpha.5").increment(), pre("alpha.6"));
        // Trailing zeros roll over before the bump lands.
        assert_eq!(pre("alpha.0").increment(), pre("alpha.1"));
        assert_eq!(pre("alpha.0.0").increment(), pre("alpha.1"));
        assert_eq!(pre("alpha.1.0").increment(), pre("alpha.2"));
        assert_eq!(pre("0.alpha").increment(), pre("0.alpha.1"));
        // A non-numeric tail stops the scan; earlier numerics stay untouched.
        assert_eq!(pre("alpha.1.beta").increment(), pre("alpha.1.beta.1"));
    }

    #[test]
    fn test_increment_all_zeros_empties() {
        assert!(pre("0").increment().is_empty());
        assert!(pre("0.0").increment().is_empty());
    }

    #[test]
    fn test_decrement() {
        assert_eq!(pre("alpha.2").decrement(), pre("alpha.1"));
        assert_eq!(pre("alpha.1").decrement(), pre("alpha"));
        assert_eq!(pre("5").decrement(), pre("4"));
        assert_eq!(pre("alpha.1.1").decrement(), pre("alpha.1"));
        assert_eq!(pre("alpha.1.beta").decrement(), pre("alpha.1"));
        assert_eq!(pre("alpha.0").decrement(), PreRelease::new());
        assert!(pre("beta").decrement().is_empty());
        assert!(pre("1").decrement().is_empty());
        assert!(pre("0").decrement().is_empty());
    }

    #[test]
    fn test_bump_does_not_mutate() {
        let original = pre("alpha.1");
        let bumped = original.increment();
        assert_eq!(original, pre("alpha.1"));
        assert_ne!(original, bumped);
    }

    #[test]
    fn test_append_and_truncate() {
        let mut p = pre("alpha");
        p.push(Identifier::Numeric(3));
        assert_eq!(p, pre("alpha.3"));
        p.truncate(1);
        assert_eq!(p, pre("alpha"));
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["alpha", "alpha.1", "rc.1.x-2", "0.3.7", "x-y-z.--"] {
            assert_eq!(pre(text).to_string(), text);
        }
        assert_eq!(PreRelease::new().to_string(), "");
    }
}
