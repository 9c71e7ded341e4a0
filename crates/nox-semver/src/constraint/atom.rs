//! Surface atoms of the range grammar
//!
//! The atom keeps the shape the user wrote (`~`, `^`, hyphen, wildcard) so
//! rendering can reproduce it; evaluation desugars to primitive bounds.

use std::fmt;

use crate::constraint::Op;
use crate::version::Version;

/// A wildcard version pattern. Wildcard slots are right-aligned and carry
/// no pre-release or build tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// `X.Y.x` — patch may be anything
    Patch { major: u64, minor: u64 },
    /// `X.x.x` — minor and patch may be anything
    Minor { major: u64 },
    /// `x.x.x` — matches every release
    Any,
}

/// A single atom of a range constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// An operator bound: `<v`, `<=v`, `>=v`, `>v`, or `=v` / bare `v`
    /// (the written `=` folds into the bare form).
    Cmp(Op, Version),
    /// `~v` — patch-level changes allowed
    Tilde(Version),
    /// `^v` — changes left of the first non-zero component disallowed
    Caret(Version),
    /// `v1 - v2` — the inclusive interval
    Hyphen(Version, Version),
    /// An x-range such as `1.2.x`
    Wildcard(Wildcard),
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wildcard::Patch { major, minor } => write!(f, "{}.{}.x", major, minor),
            Wildcard::Minor { major } => write!(f, "{}.x.x", major),
            Wildcard::Any => write!(f, "x.x.x"),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `=` is never printed; the bare form is canonical
            Atom::Cmp(Op::Equal, version) => write!(f, "{}", version),
            Atom::Cmp(op, version) => write!(f, "{}{}", op, version),
            Atom::Tilde(version) => write!(f, "~{}", version),
            Atom::Caret(version) => write!(f, "^{}", version),
            Atom::Hyphen(lower, upper) => write!(f, "{} - {}", lower, upper),
            Atom::Wildcard(wildcard) => write!(f, "{}", wildcard),
        }
    }
}
