//! High-level facade for one-shot, string-level operations

use crate::comparator::Comparator;
use crate::constraint::Constraint;
use crate::version::Version;

/// Facade for string-level version operations.
///
/// Every method parses its inputs and treats a parse failure as a
/// non-match, so callers holding untrusted strings never see an error.
pub struct Semver;

impl Semver {
    /// Check if a version string satisfies a range string.
    pub fn satisfies(version: &str, range: &str) -> bool {
        match (Version::parse(version), Constraint::parse(range)) {
            (Some(version), Some(range)) => range.satisfies(&version),
            _ => false,
        }
    }

    /// Return all versions that satisfy the given range, in input order and
    /// with their original spelling.
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let range = match Constraint::parse(range) {
            Some(range) => range,
            None => return Vec::new(),
        };

        versions
            .iter()
            .filter_map(|raw| {
                let version = Version::parse(raw)?;
                if range.satisfies(&version) {
                    Some(raw.to_string())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Sort version strings in ascending precedence order. Unparseable
    /// entries are dropped; ties keep their input order.
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort version strings in descending precedence order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, &str)> = versions
            .iter()
            .filter_map(|raw| Version::parse(raw).map(|version| (version, *raw)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let ordering = Comparator::compare(a, b);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        parsed.into_iter().map(|(_, raw)| raw.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies() {
        assert!(Semver::satisfies("1.2.3", "^1.2.0"));
        assert!(Semver::satisfies("2.4.5", "~2.4.0"));
        assert!(Semver::satisfies("1.2.3", ">=1.2.3 <2.0.0"));
        assert!(Semver::satisfies("1.2.3", "1.2.* || 2.*.*"));
        assert!(!Semver::satisfies("2.0.0", "^1.2.0"));
    }

    #[test]
    fn test_satisfies_swallows_parse_failures() {
        assert!(!Semver::satisfies("not a version", "^1.2.0"));
        assert!(!Semver::satisfies("1.2", "^1.2.0"));
        assert!(!Semver::satisfies("1.2.3", "not a range"));
        assert!(!Semver::satisfies("1.2.3", ""));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = vec!["1.0.0", "1.2.0", "1.9999.9999", "2.0.0", "2.1.0", "0.9999.9999"];
        let result = Semver::satisfied_by(&versions, "^1.0.0");
        assert_eq!(result, vec!["1.0.0", "1.2.0", "1.9999.9999"]);

        let versions = vec!["1.0.0", "1.1.0", "2.9999.9999", "3.0.0", "4.0.0", "4.1.0"];
        let result = Semver::satisfied_by(&versions, ">1.0.0 <3.0.0 || >=4.0.0");
        assert_eq!(result, vec!["1.1.0", "2.9999.9999", "4.0.0", "4.1.0"]);

        let versions = vec!["0.1.1", "0.1.9999", "0.2.0", "0.2.1", "0.3.0", "junk"];
        let result = Semver::satisfied_by(&versions, "^0.2.0");
        assert_eq!(result, vec!["0.2.0", "0.2.1"]);
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(
            sorted,
            vec!["0.1.0", "0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "3.2.1"]
        );

        // Unparseable entries are dropped, build metadata does not reorder
        let versions = vec!["dev-main", "1.0.0+b", "50.2.0", "1.0.0+a"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, vec!["1.0.0+b", "1.0.0+a", "50.2.0"]);
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0"]);
    }
}
