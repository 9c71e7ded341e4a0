//! Range constraints: disjunctions of conjunctions of atoms

use std::fmt;
use std::str::FromStr;

use crate::constraint::{parser, Atom};
use crate::version::Version;
use crate::version_parser::ParseError;

/// A space-separated AND-group of atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjunction(Vec<Atom>);

impl Conjunction {
    pub(crate) fn new(atoms: Vec<Atom>) -> Self {
        Conjunction(atoms)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.0
    }

    /// True iff every atom admits the version.
    pub fn satisfies(&self, version: &Version) -> bool {
        self.0.iter().all(|atom| atom.matches(version))
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, atom) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}

/// A parsed range constraint: `||`-separated conjunctions of atoms.
///
/// The parsed value keeps the shape the user wrote, so rendering reproduces
/// it up to the documented normalizations (whitespace collapsed, `=`
/// stripped, wildcard slots printed as `x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint(Vec<Conjunction>);

impl Constraint {
    pub(crate) fn new(conjunctions: Vec<Conjunction>) -> Self {
        Constraint(conjunctions)
    }

    /// Parse a range constraint string.
    ///
    /// Returns `None` on any deviation from the grammar.
    pub fn parse(input: &str) -> Option<Self> {
        input.parse().ok()
    }

    /// Like [`Constraint::parse`] but panics on invalid input. Intended for
    /// static strings only.
    pub fn parse_or_panic(input: &str) -> Self {
        match input.parse() {
            Ok(constraint) => constraint,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn conjunctions(&self) -> &[Conjunction] {
        &self.0
    }

    /// True iff some conjunction is entirely satisfied by the version.
    pub fn satisfies(&self, version: &Version) -> bool {
        self.0.iter().any(|conjunction| conjunction.satisfies(version))
    }
}

impl FromStr for Constraint {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parser::constraint(input)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conjunction) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " || ")?;
            }
            write!(f, "{}", conjunction)?;
        }
        Ok(())
    }
}
