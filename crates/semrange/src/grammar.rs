//! Recursive-descent parsing for versions, comparators and ranges
//!
//! All scanning works on a byte cursor over the input. Range shorthands
//! (tilde, caret, x-ranges and hyphen ranges) are desugared here into plain
//! comparators, so the rest of the crate only ever sees operator-version
//! pairs.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::SemverError;
use crate::prerelease::{Identifier, PreRelease};
use crate::range::{Comparator, ComparatorSet, Operator, RangeSet};
use crate::version::SemanticVersion;

lazy_static! {
    // Alternative separator, `||` with optional surrounding whitespace. A
    // single `|` is tolerated.
    static ref OR_SPLIT_RE: Regex = Regex::new(r"\s*\|\|?\s*").unwrap();
    // A hyphen range spans a whole alternative: `1.2.3 - 2.3.4`.
    static ref HYPHEN_RE: Regex =
        Regex::new(r"^\s*(?P<from>\S+)\s+-\s+(?P<to>\S+)\s*$").unwrap();
}

struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            end: input.len(),
        }
    }

    /// A scanner restricted to `input[start..end]` that keeps absolute
    /// offsets for error reporting.
    fn slice(input: &'a str, start: usize, end: usize) -> Self {
        Scanner {
            input,
            bytes: input.as_bytes(),
            pos: start,
            end,
        }
    }

    fn peek(&self) -> Option<u8> {
        if self.pos < self.end {
            Some(self.bytes[self.pos])
        } else {
            None
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Comparators may be separated by whitespace, commas or both.
    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(b) if b == b',' || b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn error(&self, rule: &'static str) -> SemverError {
        SemverError::Parse {
            rule,
            offset: self.pos,
        }
    }
}

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

/// A dotted core component in a range token: a number or a wildcard.
enum Component {
    Wildcard,
    Value(u64),
}

fn numeric_identifier(s: &mut Scanner) -> Result<u64, SemverError> {
    let start = s.pos;
    while matches!(s.peek(), Some(b) if b.is_ascii_digit()) {
        s.pos += 1;
    }
    let text = &s.input[start..s.pos];
    if text.is_empty() {
        return Err(SemverError::Parse {
            rule: "numeric identifier",
            offset: start,
        });
    }
    if text.len() > 1 && text.starts_with('0') {
        return Err(SemverError::Parse {
            rule: "numeric identifier without leading zero",
            offset: start,
        });
    }
    text.parse::<u64>().map_err(|_| SemverError::Parse {
        rule: "numeric identifier",
        offset: start,
    })
}

fn pre_release_identifier(s: &mut Scanner) -> Result<Identifier, SemverError> {
    let start = s.pos;
    let mut saw_non_digit = false;
    while let Some(byte) = s.peek() {
        if !is_identifier_byte(byte) {
            break;
        }
        if !byte.is_ascii_digit() {
            saw_non_digit = true;
        }
        s.pos += 1;
    }
    let text = &s.input[start..s.pos];
    if text.is_empty() {
        return Err(SemverError::Parse {
            rule: "pre-release identifier",
            offset: start,
        });
    }
    if saw_non_digit {
        return Ok(Identifier::AlphaNumeric(text.to_string()));
    }
    if text.len() > 1 && text.starts_with('0') {
        return Err(SemverError::Parse {
            rule: "numeric identifier without leading zero",
            offset: start,
        });
    }
    let value = text.parse::<u64>().map_err(|_| SemverError::Parse {
        rule: "numeric identifier",
        offset: start,
    })?;
    Ok(Identifier::Numeric(value))
}

/// Build identifiers keep leading zeros and stay strings.
fn build_identifier(s: &mut Scanner) -> Result<String, SemverError> {
    let start = s.pos;
    while matches!(s.peek(), Some(b) if is_identifier_byte(b)) {
        s.pos += 1;
    }
    if s.pos == start {
        return Err(SemverError::Parse {
            rule: "build identifier",
            offset: start,
        });
    }
    Ok(s.input[start..s.pos].to_string())
}

fn pre_release_identifiers(s: &mut Scanner) -> Result<PreRelease, SemverError> {
    let mut identifiers = vec![pre_release_identifier(s)?];
    while s.eat(b'.') {
        identifiers.push(pre_release_identifier(s)?);
    }
    Ok(PreRelease::from_identifiers(identifiers))
}

fn build_identifiers(s: &mut Scanner) -> Result<Vec<String>, SemverError> {
    let mut identifiers = vec![build_identifier(s)?];
    while s.eat(b'.') {
        identifiers.push(build_identifier(s)?);
    }
    Ok(identifiers)
}

fn version_core(s: &mut Scanner) -> Result<(u64, Option<u64>, Option<u64>), SemverError> {
    let major = numeric_identifier(s)?;
    let mut minor = None;
    let mut patch = None;
    if s.eat(b'.') {
        minor = Some(numeric_identifier(s)?);
        if s.eat(b'.') {
            patch = Some(numeric_identifier(s)?);
        }
    }
    Ok((major, minor, patch))
}

fn version(s: &mut Scanner) -> Result<SemanticVersion, SemverError> {
    if matches!(s.peek(), Some(b'v' | b'V')) {
        s.pos += 1;
    }
    let (major, minor, patch) = version_core(s)?;
    let pre_release = if s.eat(b'-') {
        pre_release_identifiers(s)?
    } else {
        PreRelease::new()
    };
    let build = if s.eat(b'+') {
        build_identifiers(s)?
    } else {
        Vec::new()
    };
    SemanticVersion::from_parts(major, minor, patch, pre_release, build)
}

fn operator(s: &mut Scanner) -> Result<Operator, SemverError> {
    let start = s.pos;
    while matches!(s.peek(), Some(b'<' | b'>' | b'=')) {
        s.pos += 1;
    }
    Operator::from_str(&s.input[start..s.pos]).map_err(|_| SemverError::Parse {
        rule: "comparator operator",
        offset: start,
    })
}

fn comparator(s: &mut Scanner) -> Result<Comparator, SemverError> {
    let op = operator(s)?;
    s.skip_whitespace();
    let version = version(s)?;
    Ok(Comparator::new(op, version))
}

pub(crate) fn parse_version(text: &str) -> Result<SemanticVersion, SemverError> {
    let mut s = Scanner::new(text);
    s.skip_whitespace();
    let version = version(&mut s)?;
    s.skip_whitespace();
    if !s.at_end() {
        return Err(s.error("end of input"));
    }
    Ok(version)
}

pub(crate) fn parse_comparator(text: &str) -> Result<Comparator, SemverError> {
    let mut s = Scanner::new(text);
    s.skip_whitespace();
    let comparator = comparator(&mut s)?;
    s.skip_whitespace();
    if !s.at_end() {
        return Err(s.error("end of input"));
    }
    Ok(comparator)
}

pub(crate) fn parse_pre_release(text: &str) -> Result<PreRelease, SemverError> {
    let mut s = Scanner::new(text);
    let pre_release = pre_release_identifiers(&mut s)?;
    if !s.at_end() {
        return Err(s.error("end of input"));
    }
    Ok(pre_release)
}

pub(crate) fn parse_build(text: &str) -> Result<Vec<String>, SemverError> {
    let mut s = Scanner::new(text);
    let build = build_identifiers(&mut s)?;
    if !s.at_end() {
        return Err(s.error("end of input"));
    }
    Ok(build)
}

pub(crate) fn parse_range(text: &str) -> Result<ComparatorSet, SemverError> {
    if let Some(offset) = text.find('|') {
        return Err(SemverError::Parse {
            rule: "comparator",
            offset,
        });
    }
    range_alternative(text, 0, text.len())
}

pub(crate) fn parse_range_set(text: &str) -> Result<RangeSet, SemverError> {
    let mut alternatives = Vec::new();
    let mut start = 0;
    for separator in OR_SPLIT_RE.find_iter(text) {
        alternatives.push(range_alternative(text, start, separator.start())?);
        start = separator.end();
    }
    alternatives.push(range_alternative(text, start, text.len())?);
    Ok(RangeSet::new(alternatives))
}

fn range_alternative(text: &str, start: usize, end: usize) -> Result<ComparatorSet, SemverError> {
    let mut set = ComparatorSet::any();
    if hyphen_range(text, start, end, &mut set)? {
        return Ok(set);
    }

    let mut s = Scanner::slice(text, start, end);
    s.skip_separators();
    if s.at_end() {
        return Err(s.error("range"));
    }
    while !s.at_end() {
        range_token(&mut s, &mut set)?;
        let before = s.pos;
        s.skip_separators();
        if !s.at_end() && s.pos == before {
            return Err(s.error("comparator separator"));
        }
    }
    Ok(set)
}

fn range_token(s: &mut Scanner, set: &mut ComparatorSet) -> Result<(), SemverError> {
    match s.peek() {
        Some(b'~') => tilde_range(s, set),
        Some(b'^') => caret_range(s, set),
        Some(b'<' | b'>' | b'=') => {
            let comparator = comparator(s)?;
            set.push(comparator);
            Ok(())
        }
        _ => plain_or_x_range(s, set),
    }
}

/// `~1.2.3` allows patch-level changes, `~1.2` the same, `~1` minor-level
/// changes.
fn tilde_range(s: &mut Scanner, set: &mut ComparatorSet) -> Result<(), SemverError> {
    s.pos += 1;
    s.skip_whitespace();
    let low = version(s)?;
    let upper = match low.minor() {
        Some(minor) => SemanticVersion::new(low.major(), next_component(minor)?, 0),
        None => SemanticVersion::new(next_component(low.major())?, 0, 0),
    };
    set.push(Comparator::new(Operator::GreaterThanOrEqual, low));
    set.push(Comparator::new(Operator::LessThan, upper));
    Ok(())
}

/// `^` allows changes that keep the leftmost non-zero core component fixed.
/// When every given component is zero the finest one given is pinned
/// instead.
fn caret_range(s: &mut Scanner, set: &mut ComparatorSet) -> Result<(), SemverError> {
    s.pos += 1;
    s.skip_whitespace();
    let low = version(s)?;
    let upper = if low.major() != 0 || low.minor().is_none() {
        SemanticVersion::new(next_component(low.major())?, 0, 0)
    } else if low.minor() != Some(0) || low.patch().is_none() {
        SemanticVersion::new(0, next_component(low.minor().unwrap_or(0))?, 0)
    } else {
        SemanticVersion::new(0, 0, next_component(low.patch().unwrap_or(0))?)
    };
    set.push(Comparator::new(Operator::GreaterThanOrEqual, low));
    set.push(Comparator::new(Operator::LessThan, upper));
    Ok(())
}

/// A bare token: either a plain version used as an equality comparator, or
/// an x-range such as `1.x` once a wildcard component shows up.
fn plain_or_x_range(s: &mut Scanner, set: &mut ComparatorSet) -> Result<(), SemverError> {
    if matches!(s.peek(), Some(b'v' | b'V')) {
        s.pos += 1;
    }

    let mut parts: Vec<(Component, usize)> = Vec::new();
    loop {
        let offset = s.pos;
        let component = match s.peek() {
            Some(b'x' | b'X' | b'*') => {
                s.pos += 1;
                Component::Wildcard
            }
            _ => Component::Value(numeric_identifier(s)?),
        };
        parts.push((component, offset));
        if parts.len() == 3 || !s.eat(b'.') {
            break;
        }
    }

    let first_wildcard = parts
        .iter()
        .position(|(component, _)| matches!(component, Component::Wildcard));
    let first_wildcard = match first_wildcard {
        Some(index) => index,
        None => {
            let pre_release = if s.eat(b'-') {
                pre_release_identifiers(s)?
            } else {
                PreRelease::new()
            };
            let build = if s.eat(b'+') {
                build_identifiers(s)?
            } else {
                Vec::new()
            };
            let version = SemanticVersion::from_parts(
                component_value(&parts, 0).unwrap_or(0),
                component_value(&parts, 1),
                component_value(&parts, 2),
                pre_release,
                build,
            )?;
            set.push(Comparator::new(Operator::Equal, version));
            return Ok(());
        }
    };

    // Nothing but wildcards may follow the first wildcard.
    for (component, offset) in &parts[first_wildcard + 1..] {
        if !matches!(component, Component::Wildcard) {
            return Err(SemverError::Parse {
                rule: "wildcard",
                offset: *offset,
            });
        }
    }

    match first_wildcard {
        // `*` alone constrains nothing.
        0 => {}
        1 => {
            let major = component_value(&parts, 0).unwrap_or(0);
            set.push(Comparator::new(
                Operator::GreaterThanOrEqual,
                SemanticVersion::new(major, 0, 0),
            ));
            set.push(Comparator::new(
                Operator::LessThan,
                SemanticVersion::new(next_component(major)?, 0, 0),
            ));
        }
        _ => {
            let major = component_value(&parts, 0).unwrap_or(0);
            let minor = component_value(&parts, 1).unwrap_or(0);
            set.push(Comparator::new(
                Operator::GreaterThanOrEqual,
                SemanticVersion::new(major, minor, 0),
            ));
            set.push(Comparator::new(
                Operator::LessThan,
                SemanticVersion::new(major, next_component(minor)?, 0),
            ));
        }
    }
    Ok(())
}

fn component_value(parts: &[(Component, usize)], index: usize) -> Option<u64> {
    match parts.get(index) {
        Some((Component::Value(value), _)) => Some(*value),
        _ => None,
    }
}

/// Hyphen ranges (`1.2.3 - 2.3.4`) desugar to `>=from` plus an upper bound
/// that is inclusive for a full `to` version and exclusive past the next
/// boundary for a partial one.
fn hyphen_range(
    text: &str,
    start: usize,
    end: usize,
    set: &mut ComparatorSet,
) -> Result<bool, SemverError> {
    let captures = match HYPHEN_RE.captures(&text[start..end]) {
        Some(captures) => captures,
        None => return Ok(false),
    };
    let (from_start, from_end) = match captures.name("from") {
        Some(m) => (start + m.start(), start + m.end()),
        None => return Ok(false),
    };
    let (to_start, to_end) = match captures.name("to") {
        Some(m) => (start + m.start(), start + m.end()),
        None => return Ok(false),
    };

    let mut s = Scanner::slice(text, from_start, from_end);
    let low = version(&mut s)?;
    if !s.at_end() {
        return Err(s.error("end of version"));
    }

    let mut s = Scanner::slice(text, to_start, to_end);
    let high = version(&mut s)?;
    if !s.at_end() {
        return Err(s.error("end of version"));
    }

    set.push(Comparator::new(Operator::GreaterThanOrEqual, low));
    match (high.minor(), high.patch()) {
        (Some(_), Some(_)) => {
            set.push(Comparator::new(Operator::LessThanOrEqual, high));
        }
        (Some(minor), None) => {
            let bound = SemanticVersion::new(high.major(), next_component(minor)?, 0);
            set.push(Comparator::new(Operator::LessThan, bound));
        }
        (None, _) => {
            let bound = SemanticVersion::new(next_component(high.major())?, 0, 0);
            set.push(Comparator::new(Operator::LessThan, bound));
        }
    }
    Ok(true)
}

fn next_component(value: u64) -> Result<u64, SemverError> {
    value.checked_add(1).ok_or_else(|| SemverError::InvalidVersion {
        reason: "version component overflow".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(text: &str) -> String {
        parse_range(text).unwrap().to_string()
    }

    #[test]
    fn test_parse_version_forms() {
        assert_eq!(parse_version("1.2.3").unwrap().to_string(), "1.2.3");
        assert_eq!(parse_version("1.2").unwrap().to_string(), "1.2");
        assert_eq!(parse_version("4").unwrap().to_string(), "4");
        assert_eq!(parse_version("v1.2.3").unwrap().to_string(), "1.2.3");
        assert_eq!(parse_version("  1.2.3\t").unwrap().to_string(), "1.2.3");
        assert_eq!(
            parse_version("1.2.3-rc.1+build.5").unwrap().to_string(),
            "1.2.3-rc.1+build.5"
        );
        assert_eq!(parse_version("1.2.3+21AF26D3").unwrap().to_string(), "1.2.3+21AF26D3");
    }

    #[test]
    fn test_parse_version_leading_zero_offsets() {
        assert_eq!(
            parse_version("01.2.3"),
            Err(SemverError::Parse {
                rule: "numeric identifier without leading zero",
                offset: 0
            })
        );
        assert_eq!(
            parse_version("1.02.3"),
            Err(SemverError::Parse {
                rule: "numeric identifier without leading zero",
                offset: 2
            })
        );
        assert_eq!(
            parse_version("1.2.3-01"),
            Err(SemverError::Parse {
                rule: "numeric identifier without leading zero",
                offset: 6
            })
        );
        // Build identifiers may keep leading zeros.
        assert!(parse_version("1.2.3+001").is_ok());
    }

    #[test]
    fn test_parse_version_trailing_junk() {
        assert_eq!(
            parse_version("1.2.3.4"),
            Err(SemverError::Parse {
                rule: "end of input",
                offset: 5
            })
        );
        assert!(parse_version("1.2.3 x").is_err());
        assert!(parse_version("1.2.3-").is_err());
        assert!(parse_version("").is_err());
    }

    #[test]
    fn test_parse_version_hierarchy() {
        assert!(matches!(
            parse_version("1.2-alpha"),
            Err(SemverError::InvalidVersion { .. })
        ));
        assert!(matches!(
            parse_version("1+build"),
            Err(SemverError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_parse_version_overflow() {
        // Too large for u64 is a grammar-level failure.
        assert!(matches!(
            parse_version("99999999999999999999.0.0"),
            Err(SemverError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_comparator() {
        assert_eq!(parse_comparator(">=1.2.3").unwrap().to_string(), ">=1.2.3");
        assert_eq!(parse_comparator("<= 1.2").unwrap().to_string(), "<=1.2");
        assert_eq!(parse_comparator("1.2.3").unwrap().to_string(), "=1.2.3");
        assert_eq!(parse_comparator("=1.2.3").unwrap().to_string(), "=1.2.3");
        assert_eq!(
            parse_comparator("==1.2.3"),
            Err(SemverError::Parse {
                rule: "comparator operator",
                offset: 0
            })
        );
        assert!(parse_comparator("<>1.2.3").is_err());
        assert!(parse_comparator(">=1.2.3 <2").is_err());
    }

    #[test]
    fn test_x_range_desugar() {
        assert_eq!(range("1.x"), ">=1.0.0 <2.0.0");
        assert_eq!(range("1.X"), ">=1.0.0 <2.0.0");
        assert_eq!(range("1.*"), ">=1.0.0 <2.0.0");
        assert_eq!(range("4.4.x"), ">=4.4.0 <4.5.0");
        assert_eq!(range("1.2.x"), ">=1.2.0 <1.3.0");
        assert_eq!(range("*"), "*");
        assert_eq!(range("x"), "*");
        assert_eq!(range("1.x.x"), ">=1.0.0 <2.0.0");
    }

    #[test]
    fn test_tilde_desugar() {
        assert_eq!(range("~1.2.3"), ">=1.2.3 <1.3.0");
        assert_eq!(range("~1.2"), ">=1.2 <1.3.0");
        assert_eq!(range("~1"), ">=1 <2.0.0");
        assert_eq!(range("~0.2.3"), ">=0.2.3 <0.3.0");
        assert_eq!(range("~1.2.3-beta.2"), ">=1.2.3-beta.2 <1.3.0");
    }

    #[test]
    fn test_caret_desugar() {
        assert_eq!(range("^1.2.3"), ">=1.2.3 <2.0.0");
        assert_eq!(range("^0.2.3"), ">=0.2.3 <0.3.0");
        assert_eq!(range("^0.0.3"), ">=0.0.3 <0.0.4");
        assert_eq!(range("^0.0"), ">=0.0 <0.1.0");
        assert_eq!(range("^0"), ">=0 <1.0.0");
        assert_eq!(range("^1.2.3-beta.2"), ">=1.2.3-beta.2 <2.0.0");
    }

    #[test]
    fn test_hyphen_desugar() {
        assert_eq!(range("1.2.3 - 2.3.4"), ">=1.2.3 <=2.3.4");
        assert_eq!(range("1.2.3 - 2.3"), ">=1.2.3 <2.4.0");
        assert_eq!(range("1.2.3 - 2"), ">=1.2.3 <3.0.0");
        assert_eq!(range("1.2 - 2.3.4"), ">=1.2 <=2.3.4");
        assert_eq!(range("1.2.3 - 2.3.4-rc.1"), ">=1.2.3 <=2.3.4-rc.1");
        // The hyphen needs space on both sides, otherwise it starts a
        // pre-release.
        assert_eq!(range("1.2.3-2.3.4"), "=1.2.3-2.3.4");
    }

    #[test]
    fn test_range_conjunction_separators() {
        assert_eq!(range(">=1.2.0 <2.0.0"), ">=1.2.0 <2.0.0");
        assert_eq!(range(">=1.2.0, <2.0.0"), ">=1.2.0 <2.0.0");
        assert_eq!(range(">=1.2.0,<2.0.0"), ">=1.2.0 <2.0.0");
        assert_eq!(range("~1.2 <1.2.5"), ">=1.2 <1.3.0 <1.2.5");
        assert_eq!(range(" 1.2.3 "), "=1.2.3");
    }

    #[test]
    fn test_bare_version_is_equality() {
        assert_eq!(range("1.2.3"), "=1.2.3");
        assert_eq!(range("1.2"), "=1.2");
        assert_eq!(range("v1.2.3"), "=1.2.3");
        assert_eq!(range("1.2.3-rc.1"), "=1.2.3-rc.1");
    }

    #[test]
    fn test_range_set_alternatives() {
        let set = parse_range_set("<1.0.0 || >=2.0.0").unwrap();
        assert_eq!(set.to_string(), "<1.0.0 || >=2.0.0");
        assert_eq!(set.alternatives().len(), 2);

        assert_eq!(
            parse_range_set("1.x || 3.x").unwrap().to_string(),
            ">=1.0.0 <2.0.0 || >=3.0.0 <4.0.0"
        );
        // A single `|` separator is tolerated.
        assert_eq!(
            parse_range_set("1.2.3 | 2.0.0").unwrap().to_string(),
            "=1.2.3 || =2.0.0"
        );
    }

    #[test]
    fn test_range_errors() {
        assert_eq!(
            parse_range(""),
            Err(SemverError::Parse {
                rule: "range",
                offset: 0
            })
        );
        assert_eq!(
            parse_range("x.2.3"),
            Err(SemverError::Parse {
                rule: "wildcard",
                offset: 2
            })
        );
        assert_eq!(
            parse_range("1.2.x-dev"),
            Err(SemverError::Parse {
                rule: "comparator separator",
                offset: 5
            })
        );
        // A single alternative may not contain a union.
        assert_eq!(
            parse_range("<1 || >2"),
            Err(SemverError::Parse {
                rule: "comparator",
                offset: 3
            })
        );
        assert!(parse_range_set("<1 ||").is_err());
        assert!(parse_range_set("").is_err());
        assert!(parse_range(">=1.x").is_err());
    }

    #[test]
    fn test_range_boundary_overflow() {
        let text = format!("~{}.0.0", u64::MAX);
        assert!(parse_range(&text).is_ok());
        let text = format!("~{}", u64::MAX);
        assert!(matches!(
            parse_range(&text),
            Err(SemverError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_parse_pre_release_entry() {
        assert_eq!(parse_pre_release("rc.1").unwrap().to_string(), "rc.1");
        assert!(parse_pre_release("rc.").is_err());
        assert!(parse_pre_release("rc!").is_err());
    }

    #[test]
    fn test_parse_build_entry() {
        assert_eq!(
            parse_build("exp.sha.5114f85").unwrap(),
            ["exp", "sha", "5114f85"]
        );
        assert_eq!(parse_build("001").unwrap(), ["001"]);
        assert!(parse_build("").is_err());
        assert!(parse_build("a..b").is_err());
    }
}
