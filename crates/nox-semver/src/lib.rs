//! Semantic versioning library compatible with the npm range grammar
//!
//! This crate provides Semantic Versioning 2.0.0 parsing, precedence
//! comparison, and range constraint matching compatible with the npm
//! ecosystem's `~`, `^`, hyphen and x-range forms.

pub mod constraint;
mod comparator;
mod identifier;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use constraint::{Atom, Bound, Conjunction, Constraint, Op, Wildcard};
pub use identifier::{Build, Identifier, PreRelease};
pub use semver::Semver;
pub use version::Version;
pub use version_parser::ParseError;
