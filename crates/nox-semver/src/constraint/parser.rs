//! Parser for the range constraint grammar
//!
//! The grammar is whitespace-sensitive: single ASCII spaces separate the
//! atoms of a conjunction, `||` (with optional space padding) separates
//! conjunctions, and a hyphen range is written `version - version` with
//! spaces around the hyphen. Runs of spaces are tolerated and collapse on
//! render; every other whitespace character fails to match and the parse
//! returns an error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::{Atom, Conjunction, Constraint, Op, Wildcard};
use crate::version::Version;
use crate::version_parser::{self, ParseError};

lazy_static! {
    static ref OR_RE: Regex = Regex::new(r" *\|\| *").unwrap();
}

pub(crate) fn constraint(input: &str) -> Result<Constraint, ParseError> {
    match parse(input) {
        Some(constraint) => Ok(constraint),
        None => Err(ParseError::InvalidConstraint(input.to_string())),
    }
}

fn parse(input: &str) -> Option<Constraint> {
    let trimmed = input.trim_matches(' ');
    if trimmed.is_empty() {
        return None;
    }

    let mut conjunctions = Vec::new();
    for group in OR_RE.split(trimmed) {
        // An empty group means a leading, trailing or doubled `||`
        if group.is_empty() {
            return None;
        }
        conjunctions.push(conjunction(group)?);
    }
    Some(Constraint::new(conjunctions))
}

fn conjunction(input: &str) -> Option<Conjunction> {
    let tokens: Vec<&str> = input.split(' ').filter(|token| !token.is_empty()).collect();

    let mut atoms = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        // `lo - hi`: the hyphen stands alone between two full versions
        if tokens.get(i + 1) == Some(&"-") {
            let low = version(tokens[i])?;
            let high = version(tokens.get(i + 2)?)?;
            atoms.push(Atom::Hyphen(low, high));
            i += 3;
            continue;
        }

        // A detached operator takes the following token as its operand
        if let Some((op, rest)) = split_operator(tokens[i]) {
            if rest.is_empty() {
                let operand = version(tokens.get(i + 1)?)?;
                atoms.push(op.atom(operand));
                i += 2;
                continue;
            }
            atoms.push(op.atom(version(rest)?));
            i += 1;
            continue;
        }

        atoms.push(plain_atom(tokens[i])?);
        i += 1;
    }

    if atoms.is_empty() {
        return None;
    }
    Some(Conjunction::new(atoms))
}

enum OpToken {
    Cmp(Op),
    Tilde,
    Caret,
}

impl OpToken {
    fn atom(self, operand: Version) -> Atom {
        match self {
            OpToken::Cmp(op) => Atom::Cmp(op, operand),
            OpToken::Tilde => Atom::Tilde(operand),
            OpToken::Caret => Atom::Caret(operand),
        }
    }
}

/// Split a leading operator off a token. Two-character operators are
/// matched before their one-character prefixes.
fn split_operator(token: &str) -> Option<(OpToken, &str)> {
    for text in ["<=", ">=", "<", ">", "="] {
        if let Some(rest) = token.strip_prefix(text) {
            let op = Op::from_str(text).ok()?;
            return Some((OpToken::Cmp(op), rest));
        }
    }
    if let Some(rest) = token.strip_prefix('~') {
        return Some((OpToken::Tilde, rest));
    }
    if let Some(rest) = token.strip_prefix('^') {
        return Some((OpToken::Caret, rest));
    }
    None
}

/// An atom with no operator prefix: a wildcard pattern or a bare version.
fn plain_atom(token: &str) -> Option<Atom> {
    if token
        .split('.')
        .any(|part| matches!(part, "x" | "X" | "*"))
    {
        return wildcard(token).map(Atom::Wildcard);
    }
    version(token).map(|version| Atom::Cmp(Op::Equal, version))
}

/// A wildcard pattern: exactly three dotted slots, each a numeric component
/// or a wildcard, with every slot right of a wildcard also a wildcard.
/// No operator prefix and no pre-release or build tag is allowed.
fn wildcard(token: &str) -> Option<Wildcard> {
    let mut slots = token.split('.');
    let first = slot(slots.next()?)?;
    let second = slot(slots.next()?)?;
    let third = slot(slots.next()?)?;
    if slots.next().is_some() {
        return None;
    }

    match (first, second, third) {
        (Slot::Number(major), Slot::Number(minor), Slot::X) => {
            Some(Wildcard::Patch { major, minor })
        }
        (Slot::Number(major), Slot::X, Slot::X) => Some(Wildcard::Minor { major }),
        (Slot::X, Slot::X, Slot::X) => Some(Wildcard::Any),
        _ => None,
    }
}

enum Slot {
    Number(u64),
    X,
}

fn slot(part: &str) -> Option<Slot> {
    if matches!(part, "x" | "X" | "*") {
        return Some(Slot::X);
    }
    if part.is_empty() || (part.len() > 1 && part.starts_with('0')) {
        return None;
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok().map(Slot::Number)
}

fn version(token: &str) -> Option<Version> {
    version_parser::version(token).ok()
}
