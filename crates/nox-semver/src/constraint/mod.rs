//! Constraint types for version range matching

mod atom;
mod bound;
pub mod constraint;
mod desugar;
mod operator;
mod parser;

pub use atom::{Atom, Wildcard};
pub use bound::Bound;
pub use constraint::{Conjunction, Constraint};
pub use operator::{InvalidOperatorError, Op};
