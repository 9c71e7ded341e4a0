//! Expansion of sugar atoms into primitive bound chains, and atom
//! evaluation against a candidate version

use crate::constraint::bound::op_admits;
use crate::constraint::{Atom, Bound, Op, Wildcard};
use crate::identifier::{Build, PreRelease};
use crate::version::Version;

fn release(major: u64, minor: u64, patch: u64) -> Version {
    Version::new(major, minor, patch, PreRelease::default(), Build::default())
}

fn lower(version: &Version) -> Bound {
    Bound::new(Op::GreaterThanOrEqual, version.clone())
}

fn below(version: Version) -> Bound {
    Bound::new(Op::LessThan, version)
}

impl Atom {
    /// Reduce this atom to the AND-chain of primitive bounds it denotes.
    ///
    /// Sugar upper bounds are strict and carry no pre-release tag; `x.x.x`
    /// reduces to the empty, always-true chain.
    pub fn desugar(&self) -> Vec<Bound> {
        match self {
            Atom::Cmp(op, version) => vec![Bound::new(*op, version.clone())],
            Atom::Tilde(version) => vec![lower(version), below(version.bump_minor())],
            Atom::Caret(version) => {
                // Lock the left-most non-zero component
                let upper = if version.major() > 0 {
                    version.bump_major()
                } else if version.minor() > 0 {
                    version.bump_minor()
                } else {
                    version.bump_patch()
                };
                vec![lower(version), below(upper)]
            }
            Atom::Hyphen(low, high) => vec![
                lower(low),
                Bound::new(Op::LessThanOrEqual, high.clone()),
            ],
            Atom::Wildcard(Wildcard::Patch { major, minor }) => vec![
                lower(&release(*major, *minor, 0)),
                below(release(*major, minor.saturating_add(1), 0)),
            ],
            Atom::Wildcard(Wildcard::Minor { major }) => vec![
                lower(&release(*major, 0, 0)),
                below(release(major.saturating_add(1), 0, 0)),
            ],
            Atom::Wildcard(Wildcard::Any) => Vec::new(),
        }
    }

    /// Evaluate this atom against a version.
    pub fn matches(&self, candidate: &Version) -> bool {
        // Direct operator bounds compare by plain precedence: a pre-release
        // is less than its release, so e.g. `<1.2.3` admits `1.2.3-pre`.
        if let Atom::Cmp(op, operand) = self {
            return op_admits(*op, candidate, operand);
        }

        let bounds = self.desugar();
        if !bounds.iter().all(|bound| bound.admits(candidate)) {
            return false;
        }
        candidate.pre_release().is_empty() || gates_pre_release(&bounds, candidate)
    }
}

/// The pre-release inclusion rule: a sugar range admits a pre-release
/// version only when some bound of its desugared chain carries a
/// pre-release operand on that exact (major, minor, patch) triple. Without
/// this, pre-releases of the next triple would leak under the strict
/// desugared upper bound.
fn gates_pre_release(bounds: &[Bound], candidate: &Version) -> bool {
    bounds.iter().any(|bound| {
        !bound.version().pre_release().is_empty()
            && bound.version().triple() == candidate.triple()
    })
}
