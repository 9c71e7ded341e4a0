//! Version precedence comparisons

use std::cmp::Ordering;

use crate::version::Version;

/// Comparator implementing Semantic Versioning 2.0.0 precedence (spec §11).
///
/// Build metadata never participates: two versions that differ only in
/// build compare as equal.
pub struct Comparator;

impl Comparator {
    /// Total precedence order over versions.
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        match a.triple().cmp(&b.triple()) {
            Ordering::Equal => {}
            other => return other,
        }

        // Equal triples: a pre-release sorts below the plain release,
        // two pre-releases compare identifier by identifier.
        match (a.pre_release().is_empty(), b.pre_release().is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.pre_release().cmp(b.pre_release()),
        }
    }

    /// Check if a > b
    pub fn greater_than(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Greater
    }

    /// Check if a >= b
    pub fn greater_than_or_equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Less
    }

    /// Check if a < b
    pub fn less_than(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Less
    }

    /// Check if a <= b
    pub fn less_than_or_equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Greater
    }

    /// Check if a == b under precedence
    pub fn equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Equal
    }

    /// Check if a != b under precedence
    pub fn not_equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(a: &str, b: &str) -> Ordering {
        Comparator::compare(&Version::parse_or_panic(a), &Version::parse_or_panic(b))
    }

    #[test]
    fn test_triple_order() {
        assert_eq!(compare("1.0.0", "2.0.0"), Ordering::Less);
        assert_eq!(compare("2.0.0", "2.1.0"), Ordering::Less);
        assert_eq!(compare("2.1.0", "2.1.1"), Ordering::Less);
        assert_eq!(compare("1.25.0", "1.24.0"), Ordering::Greater);
        assert_eq!(compare("1.25.0", "1.25.0"), Ordering::Equal);
        // Numeric, not lexicographic
        assert_eq!(compare("1.9.0", "1.10.0"), Ordering::Less);
    }

    #[test]
    fn test_pre_release_chain() {
        // The SemVer §11 example chain, in ascending order
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert_eq!(compare(pair[0], pair[1]), Ordering::Less, "{} < {}", pair[0], pair[1]);
            assert_eq!(compare(pair[1], pair[0]), Ordering::Greater);
        }
    }

    #[test]
    fn test_pre_release_below_release() {
        assert_eq!(compare("1.2.3-pre", "1.2.3"), Ordering::Less);
        // But above every lower triple
        assert_eq!(compare("1.2.3-pre", "1.2.2"), Ordering::Greater);
    }

    #[test]
    fn test_build_is_ignored() {
        assert_eq!(compare("1.2.3+build.1", "1.2.3+build.2"), Ordering::Equal);
        assert_eq!(compare("1.2.3+build", "1.2.3"), Ordering::Equal);
        assert_eq!(compare("1.2.3-alpha+x", "1.2.3-alpha+y"), Ordering::Equal);
        assert!(Comparator::equal_to(
            &Version::parse_or_panic("1.2.3+build"),
            &Version::parse_or_panic("1.2.3"),
        ));
    }

    #[test]
    fn test_operator_helpers() {
        let a = Version::parse_or_panic("1.25.0");
        let b = Version::parse_or_panic("1.26.0");

        assert!(Comparator::less_than(&a, &b));
        assert!(Comparator::less_than_or_equal_to(&a, &b));
        assert!(Comparator::less_than_or_equal_to(&a, &a));
        assert!(Comparator::greater_than(&b, &a));
        assert!(Comparator::greater_than_or_equal_to(&b, &a));
        assert!(Comparator::greater_than_or_equal_to(&b, &b));
        assert!(Comparator::equal_to(&a, &a));
        assert!(Comparator::not_equal_to(&a, &b));
        assert!(!Comparator::greater_than(&a, &b));
        assert!(!Comparator::less_than(&b, &a));
    }
}
