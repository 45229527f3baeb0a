//! Semantic versions with optional minor and patch components

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::SemverError;
use crate::grammar;
use crate::prerelease::PreRelease;

/// A parsed semantic version.
///
/// Minor and patch may be absent (`1`, `1.2`); an absent component compares
/// as zero, so `1.0.0`, `1.0` and `1` are all equal. Pre-release identifiers
/// participate in precedence, build metadata never does.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
    pre_release: PreRelease,
    build: Vec<String>,
}

impl SemanticVersion {
    /// A full `major.minor.patch` version with no pre-release or build.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor: Some(minor),
            patch: Some(patch),
            pre_release: PreRelease::new(),
            build: Vec::new(),
        }
    }

    /// A version with possibly absent minor and patch components.
    ///
    /// A patch without a minor is rejected.
    pub fn partial(
        major: u64,
        minor: Option<u64>,
        patch: Option<u64>,
    ) -> Result<Self, SemverError> {
        Self::from_parts(major, minor, patch, PreRelease::new(), Vec::new())
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: Option<u64>,
        patch: Option<u64>,
        pre_release: PreRelease,
        build: Vec<String>,
    ) -> Result<Self, SemverError> {
        if minor.is_none() && patch.is_some() {
            return Err(SemverError::InvalidVersion {
                reason: "patch requires a minor version".to_string(),
            });
        }
        if patch.is_none() && !pre_release.is_empty() {
            return Err(SemverError::InvalidVersion {
                reason: "pre-release requires a major.minor.patch core".to_string(),
            });
        }
        if patch.is_none() && !build.is_empty() {
            return Err(SemverError::InvalidVersion {
                reason: "build metadata requires a major.minor.patch core".to_string(),
            });
        }

        Ok(SemanticVersion {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// Parse a version string such as `1.2.3-rc.1+build.5`.
    ///
    /// A single leading `v` or `V` and surrounding whitespace are tolerated.
    pub fn parse(text: &str) -> Result<Self, SemverError> {
        grammar::parse_version(text)
    }

    /// This version with the given pre-release identifiers.
    ///
    /// Requires a full `major.minor.patch` core.
    pub fn with_pre_release(self, pre_release: &str) -> Result<Self, SemverError> {
        let parsed = PreRelease::parse(pre_release).map_err(|_| SemverError::InvalidVersion {
            reason: format!("malformed pre-release \"{}\"", pre_release),
        })?;
        Self::from_parts(self.major, self.minor, self.patch, parsed, self.build)
    }

    /// This version with the given dot-separated build metadata.
    ///
    /// Requires a full `major.minor.patch` core.
    pub fn with_build(self, build: &str) -> Result<Self, SemverError> {
        let identifiers = grammar::parse_build(build).map_err(|_| SemverError::InvalidVersion {
            reason: format!("malformed build metadata \"{}\"", build),
        })?;
        Self::from_parts(
            self.major,
            self.minor,
            self.patch,
            self.pre_release,
            identifiers,
        )
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    pub fn pre_release(&self) -> &PreRelease {
        &self.pre_release
    }

    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// True when this is a pre-release version.
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Component-presence equality rather than precedence equality.
    ///
    /// `1.0` and `1.0.0` compare equal but are not strictly equal; build
    /// metadata must match as well.
    pub fn eq_strict(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
            && self.build == other.build
    }

    /// The next version in precedence order, stepping the finest present
    /// field.
    ///
    /// A pre-release version bumps its pre-release sequence; otherwise the
    /// finest present core component is incremented. Build metadata carries
    /// over unchanged.
    pub fn increment(&self) -> SemanticVersion {
        let mut next = self.clone();
        if !next.pre_release.is_empty() {
            next.pre_release = next.pre_release.increment();
        } else if let Some(patch) = next.patch {
            next.patch = Some(patch.saturating_add(1));
        } else if let Some(minor) = next.minor {
            next.minor = Some(minor.saturating_add(1));
        } else {
            next.major = next.major.saturating_add(1);
        }
        next
    }

    /// The previous version in precedence order, stepping the finest present
    /// field. Core components saturate at zero.
    pub fn decrement(&self) -> SemanticVersion {
        let mut previous = self.clone();
        if !previous.pre_release.is_empty() {
            previous.pre_release = previous.pre_release.decrement();
        } else if let Some(patch) = previous.patch {
            previous.patch = Some(patch.saturating_sub(1));
        } else if let Some(minor) = previous.minor {
            previous.minor = Some(minor.saturating_sub(1));
        } else {
            previous.major = previous.major.saturating_sub(1);
        }
        previous
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.unwrap_or(0).cmp(&other.minor.unwrap_or(0)))
            .then_with(|| self.patch.unwrap_or(0).cmp(&other.patch.unwrap_or(0)))
            .then_with(|| self.pre_release.cmp(&other.pre_release))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Absent components hash as zero to stay consistent with Eq.
        self.major.hash(state);
        self.minor.unwrap_or(0).hash(state);
        self.patch.unwrap_or(0).hash(state);
        self.pre_release.hash(state);
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
        }
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticVersion::parse(s)
    }
}
