//! Grammar recognizers for versions, pre-release tags and build tags
//!
//! Every entry point matches the complete input or fails; there is no
//! partial success and no recovery. Only the exact
//! `MAJOR.MINOR.PATCH[-PRE][+BUILD]` shape is accepted: no `v` prefix, no
//! surrounding whitespace, no missing or extra components.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::identifier::{Build, Identifier, PreRelease};
use crate::version::Version;

/// Error type for version and constraint parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("invalid pre-release tag \"{0}\"")]
    InvalidPreRelease(String),
    #[error("invalid build tag \"{0}\"")]
    InvalidBuild(String),
    #[error("could not parse constraint \"{0}\"")]
    InvalidConstraint(String),
}

lazy_static! {
    /// A numeric component: `0` or a digit run with no leading zero.
    static ref NUMERIC: &'static str = r"(?:0|[1-9][0-9]*)";

    /// A pre-release or build identifier: ASCII letters, digits and hyphens.
    static ref IDENTIFIER: &'static str = r"[0-9A-Za-z-]+";

    static ref VERSION_RE: Regex = Regex::new(&format!(
        r"^({num})\.({num})\.({num})(?:-({ident}(?:\.{ident})*))?(?:\+({ident}(?:\.{ident})*))?$",
        num = *NUMERIC,
        ident = *IDENTIFIER,
    )).unwrap();

    static ref TAG_RE: Regex = Regex::new(&format!(
        r"^{ident}(?:\.{ident})*$",
        ident = *IDENTIFIER,
    )).unwrap();
}

/// Parse a complete version string.
pub(crate) fn version(input: &str) -> Result<Version, ParseError> {
    let invalid = || ParseError::InvalidVersion(input.to_string());

    let caps = VERSION_RE.captures(input).ok_or_else(invalid)?;
    let major = component(caps.get(1)).ok_or_else(invalid)?;
    let minor = component(caps.get(2)).ok_or_else(invalid)?;
    let patch = component(caps.get(3)).ok_or_else(invalid)?;

    let pre_release = match caps.get(4) {
        Some(tag_text) => PreRelease::new(tag(tag_text.as_str()).ok_or_else(invalid)?),
        None => PreRelease::default(),
    };
    let build = match caps.get(5) {
        Some(tag_text) => Build::new(tag(tag_text.as_str()).ok_or_else(invalid)?),
        None => Build::default(),
    };

    Ok(Version::new(major, minor, patch, pre_release, build))
}

/// Parse a dotted pre-release tag (the part after `-`, without the `-`).
pub(crate) fn pre_release(input: &str) -> Result<PreRelease, ParseError> {
    match tag(input) {
        Some(identifiers) => Ok(PreRelease::new(identifiers)),
        None => Err(ParseError::InvalidPreRelease(input.to_string())),
    }
}

/// Parse a dotted build tag (the part after `+`, without the `+`).
pub(crate) fn build(input: &str) -> Result<Build, ParseError> {
    match tag(input) {
        Some(identifiers) => Ok(Build::new(identifiers)),
        None => Err(ParseError::InvalidBuild(input.to_string())),
    }
}

fn component(capture: Option<regex::Match<'_>>) -> Option<u64> {
    // A grammar-valid number that overflows u64 is rejected outright.
    capture?.as_str().parse().ok()
}

fn tag(input: &str) -> Option<Vec<Identifier>> {
    if !TAG_RE.is_match(input) {
        return None;
    }
    input.split('.').map(identifier).collect()
}

fn identifier(text: &str) -> Option<Identifier> {
    let all_digits = text.bytes().all(|b| b.is_ascii_digit());
    if all_digits && (text.len() == 1 || !text.starts_with('0')) {
        return text.parse().ok().map(Identifier::Numeric);
    }
    // All-digit identifiers with a leading zero are not a numeric form;
    // they stay textual and keep their exact spelling.
    Some(Identifier::Text(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_versions() {
        assert!(version("0.0.0").is_ok());
        assert!(version("1.2.3").is_ok());
        assert!(version("10.20.30").is_ok());
        assert!(version("1.2.3-alpha").is_ok());
        assert!(version("1.2.3-alpha.1").is_ok());
        assert!(version("1.2.3+build").is_ok());
        assert!(version("1.2.3-alpha.1+build.5").is_ok());
        assert!(version("1.2.3-x-y-z.007").is_ok());
        assert!(version("18446744073709551615.0.0").is_ok());
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(version(" 0.0.0").is_err());
        assert!(version("0.0.0 ").is_err());
        assert!(version("0 .0.0").is_err());
        assert!(version("0.0.0\n").is_err());
        assert!(version("\t0.0.0").is_err());
    }

    #[test]
    fn test_rejects_leading_zeros() {
        assert!(version("01.0.0").is_err());
        assert!(version("0.01.0").is_err());
        assert!(version("0.0.01").is_err());
        assert!(version("00.0.0").is_err());
        assert!(version("007.0.0").is_err());
    }

    #[test]
    fn test_rejects_wrong_component_count() {
        assert!(version("1").is_err());
        assert!(version("1.2").is_err());
        assert!(version("0.0.0.0").is_err());
        assert!(version("1.2.3.4").is_err());
        assert!(version("1..3").is_err());
        assert!(version("1.2.").is_err());
        assert!(version(".1.2").is_err());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(version("").is_err());
        assert!(version("-1.2.3").is_err());
        assert!(version("v1.2.3").is_err());
        assert!(version("1.2.3-").is_err());
        assert!(version("1.2.3+").is_err());
        assert!(version("1.2.3-alpha..1").is_err());
        assert!(version("1.2.3-alpha.").is_err());
        assert!(version("1.2.3+build..5").is_err());
        assert!(version("1.2.3-alpha_1").is_err());
        assert!(version("1.2.3-alphä").is_err());
        assert!(version("１.2.3").is_err());
    }

    #[test]
    fn test_rejects_numeric_overflow() {
        // One past u64::MAX: grammar-valid, machine-range invalid
        assert!(version("18446744073709551616.0.0").is_err());
        assert!(version("1.2.3-18446744073709551616").is_err());
    }

    #[test]
    fn test_error_quotes_input() {
        let error = version("not a version").unwrap_err();
        assert_eq!(error.to_string(), "invalid version string \"not a version\"");
    }
}
