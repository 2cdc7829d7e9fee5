// crates/areadb-core/src/coverage.rs

//! Strict postcode coverage resolution.
//!
//! Independent of the fuzzy search path: this answers the yes/no
//! "will we book a job here" question that gates the quote flow, by
//! set membership against the covered districts. No scoring, no
//! ranking, no partial credit.

use crate::model::flat::CoverageSet;
use serde::{Deserialize, Serialize};

/// Outcome of a coverage check.
///
/// An unparseable input is reported as `covered: false` rather than an
/// error: the check is advisory, and the caller does not need a third
/// state to render the banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub covered: bool,
    /// Display name of the matched district, present only on a hit.
    pub district_name: Option<String>,
}

impl Coverage {
    fn miss() -> Self {
        Coverage {
            covered: false,
            district_name: None,
        }
    }

    fn hit(name: &str) -> Self {
        Coverage {
            covered: true,
            district_name: Some(name.to_string()),
        }
    }
}

impl CoverageSet {
    /// Resolve a raw, user-typed postcode (full or partial) against the
    /// covered districts.
    ///
    /// Normalization removes all whitespace and uppercases, so
    /// `"ba5 1aa"`, `"BA5 1AA"` and `"BA51AA"` resolve identically.
    ///
    /// UK-style districts are not fixed-width: "BA16" and "BA5" are both
    /// valid, non-overlapping districts of the same area, so a single
    /// fixed-width slice would misclassify one of them. The lookup
    /// therefore tries a 4-character prefix first (two-digit districts),
    /// then falls back to 3 characters (single-digit districts).
    pub fn resolve(&self, raw: &str) -> Coverage {
        let key: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        // Cheap format guard, not postal validation: 1-2 letters, then a
        // digit, at least 3 characters in total.
        if !has_district_shape(&key) {
            return Coverage::miss();
        }

        for len in [4, 3] {
            if key.len() < len {
                continue;
            }
            if let Some(name) = self.districts.get(&key[..len]) {
                return Coverage::hit(name);
            }
        }

        Coverage::miss()
    }

    /// Number of covered districts.
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}

fn has_district_shape(key: &str) -> bool {
    if key.len() < 3 || !key.is_ascii() {
        return false;
    }
    let letters = key.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    if !(1..=2).contains(&letters) {
        return false;
    }
    key[letters..].starts_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn coverage_set() -> CoverageSet {
        let mut districts = BTreeMap::new();
        districts.insert("BA5".to_string(), "Wells".to_string());
        districts.insert("BA16".to_string(), "Street".to_string());
        districts.insert("TA6".to_string(), "Bridgwater".to_string());
        districts.insert("TA7".to_string(), "Bridgwater".to_string());
        CoverageSet { districts }
    }

    #[test]
    fn resolves_single_digit_district() {
        let coverage = coverage_set().resolve("TA6");
        assert_eq!(coverage, Coverage::hit("Bridgwater"));
    }

    #[test]
    fn resolves_two_digit_district_before_falling_back() {
        // "BA16 2HW" must hit BA16 via the 4-character attempt, not BA1.
        let coverage = coverage_set().resolve("BA16 2HW");
        assert_eq!(coverage, Coverage::hit("Street"));
    }

    #[test]
    fn falls_back_to_three_characters() {
        let coverage = coverage_set().resolve("BA5 1AA");
        assert_eq!(coverage, Coverage::hit("Wells"));
    }

    #[test]
    fn insensitive_to_whitespace_and_case() {
        let set = coverage_set();
        let a = set.resolve("ba5 1aa");
        let b = set.resolve("BA5 1AA");
        let c = set.resolve("BA51AA");
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert!(a.covered);
    }

    #[test]
    fn unknown_district_is_not_covered() {
        assert_eq!(coverage_set().resolve("ZZ99"), Coverage::miss());
    }

    #[test]
    fn rejects_inputs_without_district_shape() {
        let set = coverage_set();
        for raw in ["", "BA", "B5", "123", "WELLS", "1AA", "???"] {
            assert_eq!(set.resolve(raw), Coverage::miss(), "input {raw:?}");
        }
    }
}
