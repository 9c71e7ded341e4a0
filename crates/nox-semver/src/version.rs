//! Version value, constructors, bumpers and field accessors

use std::fmt;
use std::str::FromStr;

use crate::identifier::{Build, PreRelease};
use crate::version_parser::{self, ParseError};

/// A Semantic Versioning 2.0.0 version.
///
/// Values are immutable; the `with_*` methods return a new version with one
/// field replaced. Structural equality includes build metadata — precedence
/// comparison, which ignores it, lives on [`crate::Comparator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: PreRelease,
    build: Build,
}

impl Version {
    /// Construct a version from already-validated parts.
    pub fn new(major: u64, minor: u64, patch: u64, pre_release: PreRelease, build: Build) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        }
    }

    /// `0.0.0` with no pre-release and no build.
    pub fn initial() -> Self {
        Version::new(0, 0, 0, PreRelease::default(), Build::default())
    }

    /// Parse a complete `MAJOR.MINOR.PATCH[-PRE][+BUILD]` string.
    ///
    /// Returns `None` on any deviation from the grammar: surrounding
    /// whitespace, leading zeros, missing or extra components, empty tag
    /// segments, non-ASCII input.
    pub fn parse(input: &str) -> Option<Self> {
        input.parse().ok()
    }

    /// Like [`Version::parse`] but panics on invalid input. Intended for
    /// static strings only.
    pub fn parse_or_panic(input: &str) -> Self {
        match input.parse() {
            Ok(version) => version,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> &PreRelease {
        &self.pre_release
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    pub fn with_major(&self, major: u64) -> Version {
        Version { major, ..self.clone() }
    }

    pub fn with_minor(&self, minor: u64) -> Version {
        Version { minor, ..self.clone() }
    }

    pub fn with_patch(&self, patch: u64) -> Version {
        Version { patch, ..self.clone() }
    }

    pub fn with_pre_release(&self, pre_release: PreRelease) -> Version {
        Version { pre_release, ..self.clone() }
    }

    pub fn with_build(&self, build: Build) -> Version {
        Version { build, ..self.clone() }
    }

    /// Next major version: minor and patch zeroed, tags cleared.
    pub fn bump_major(&self) -> Version {
        Version::new(self.major.saturating_add(1), 0, 0, PreRelease::default(), Build::default())
    }

    /// Next minor version: patch zeroed, tags cleared.
    pub fn bump_minor(&self) -> Version {
        Version::new(self.major, self.minor.saturating_add(1), 0, PreRelease::default(), Build::default())
    }

    /// Next patch version: tags cleared.
    pub fn bump_patch(&self) -> Version {
        Version::new(self.major, self.minor, self.patch.saturating_add(1), PreRelease::default(), Build::default())
    }

    /// A version is unstable while its major component is zero.
    pub fn is_unstable(&self) -> bool {
        self.major == 0
    }

    pub fn is_stable(&self) -> bool {
        !self.is_unstable()
    }

    pub(crate) fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        version_parser::version(input)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}
