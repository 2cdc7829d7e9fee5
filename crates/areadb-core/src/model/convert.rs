// crates/areadb-core/src/model/convert.rs
use crate::error::{AreaDbError, Result};
use crate::model::flat::{AreaIndex, CoverageSet, FlattenedArea};
use crate::model::nested::AreaDirectory;
use crate::text::{compact_key, district_tokens, fold_key, tokens_for_code};
use crate::traits::AreaBackend;
use std::collections::BTreeMap;

/// **Flattening Index Builder:** Nested -> Flat.
///
/// Runs once at load time. Emits one [`FlattenedArea`] per directory
/// record, in directory order (the `ordinal` is the tie-break key for
/// ranking). Token sets are computed here and never again.
///
/// Malformed input is a data-authoring bug, so it fails loudly here
/// rather than silently at query time.
pub fn build_index<B: AreaBackend>(directory: &AreaDirectory<B>) -> Result<AreaIndex<B>> {
    validate_directory(directory)?;

    let mut areas = Vec::with_capacity(directory.record_count());

    for group in &directory.groups {
        let prefix = group.prefix.as_ref();

        for record in &group.areas {
            let code = record.code.as_ref();

            let mut search_tokens = tokens_for_code(prefix, code);
            let town_key = fold_key(record.town.as_ref());
            if !town_key.is_empty() && !search_tokens.contains(&town_key) {
                search_tokens.push(town_key);
            }

            areas.push(FlattenedArea {
                id: area_id(prefix, code),
                ordinal: areas.len() as u32,
                prefix: group.prefix.clone(),
                code: record.code.clone(),
                town: record.town.clone(),
                keywords: record.keywords.clone(),
                href: record.page.clone(),
                search_tokens,
            });
        }
    }

    Ok(AreaIndex { areas })
}

/// **Coverage Builder:** Nested -> district membership set.
///
/// Expands every (possibly compound) code into its individual districts
/// and maps each, uppercased, to the record's town name. A district that
/// would resolve to two different names is a data conflict and aborts
/// the build.
pub fn build_coverage<B: AreaBackend>(directory: &AreaDirectory<B>) -> Result<CoverageSet> {
    let mut districts: BTreeMap<String, String> = BTreeMap::new();

    for group in &directory.groups {
        for record in &group.areas {
            for token in district_tokens(group.prefix.as_ref(), record.code.as_ref()) {
                let district = token.to_uppercase();
                let town = record.town.as_ref().to_string();

                match districts.get(&district) {
                    Some(existing) if existing != &town => {
                        return Err(AreaDbError::Data(format!(
                            "district {district} maps to both '{existing}' and '{town}'"
                        )));
                    }
                    Some(_) => {}
                    None => {
                        districts.insert(district, town);
                    }
                }
            }
        }
    }

    Ok(CoverageSet { districts })
}

/// Stable identifier for one area: most codes already carry the group
/// prefix ("BA5" under "BA"), in which case the code alone is the id.
fn area_id(prefix: &str, code: &str) -> String {
    let code_key = compact_key(code);
    let prefix_key = compact_key(prefix);
    if code_key.starts_with(&prefix_key) {
        code_key.to_uppercase()
    } else {
        format!("{prefix_key}{code_key}").to_uppercase()
    }
}

fn validate_directory<B: AreaBackend>(directory: &AreaDirectory<B>) -> Result<()> {
    let mut seen_prefixes: Vec<String> = Vec::new();
    let mut seen_ids: Vec<String> = Vec::new();

    for group in &directory.groups {
        let prefix = group.prefix.as_ref();
        let prefix_key = compact_key(prefix);

        if prefix_key.is_empty() || prefix_key.len() > 2 {
            return Err(AreaDbError::Data(format!(
                "group prefix '{prefix}' must be 1-2 letters"
            )));
        }
        if !prefix_key.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AreaDbError::Data(format!(
                "group prefix '{prefix}' must be alphabetic"
            )));
        }
        if seen_prefixes.contains(&prefix_key) {
            return Err(AreaDbError::Data(format!(
                "duplicate group prefix '{prefix}'"
            )));
        }
        seen_prefixes.push(prefix_key.clone());

        for record in &group.areas {
            let code = record.code.as_ref();
            let code_key = compact_key(code);

            if code_key.is_empty() || code_key.split('/').any(str::is_empty) {
                return Err(AreaDbError::Data(format!(
                    "malformed code '{code}' under prefix '{prefix}'"
                )));
            }
            if district_tokens(prefix, code).is_empty() {
                return Err(AreaDbError::Data(format!(
                    "code '{code}' under prefix '{prefix}' expands to no districts"
                )));
            }
            if fold_key(record.town.as_ref()).is_empty() {
                return Err(AreaDbError::Data(format!(
                    "code '{code}' under prefix '{prefix}' has an empty town name"
                )));
            }

            let id = area_id(prefix, code);
            if seen_ids.contains(&id) {
                return Err(AreaDbError::Data(format!(
                    "duplicate area '{code}' under prefix '{prefix}'"
                )));
            }
            seen_ids.push(id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::nested::{AreaGroup, AreaRecord};
    use crate::traits::DefaultBackend;

    fn record(code: &str, town: &str) -> AreaRecord<DefaultBackend> {
        AreaRecord {
            code: code.to_string(),
            town: town.to_string(),
            keywords: None,
            page: None,
        }
    }

    fn directory() -> AreaDirectory<DefaultBackend> {
        AreaDirectory {
            groups: vec![
                AreaGroup {
                    prefix: "BA".to_string(),
                    display_name: "Bath & East Somerset".to_string(),
                    areas: vec![
                        record("BA5", "Wells"),
                        record("BA16", "Street"),
                        record("BA20/21/22", "Yeovil"),
                    ],
                },
                AreaGroup {
                    prefix: "TA".to_string(),
                    display_name: "Taunton & West Somerset".to_string(),
                    areas: vec![record("TA6/7", "Bridgwater")],
                },
            ],
        }
    }

    #[test]
    fn index_preserves_directory_order() {
        let index = build_index(&directory()).unwrap();
        let ids: Vec<&str> = index.areas.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["BA5", "BA16", "BA20/21/22", "TA6/7"]);
        let ordinals: Vec<u32> = index.areas.iter().map(|a| a.ordinal).collect();
        assert_eq!(ordinals, [0, 1, 2, 3]);
    }

    #[test]
    fn index_tokens_include_expanded_districts_and_town() {
        let index = build_index(&directory()).unwrap();
        let yeovil = &index.areas[2];
        for expected in ["ba20", "ba21", "ba22", "ba", "yeovil"] {
            assert!(
                yeovil.search_tokens.iter().any(|t| t == expected),
                "missing token {expected}: {:?}",
                yeovil.search_tokens
            );
        }
    }

    #[test]
    fn coverage_expands_compound_codes() {
        let coverage = build_coverage(&directory()).unwrap();
        assert_eq!(coverage.districts.get("TA6").map(String::as_str), Some("Bridgwater"));
        assert_eq!(coverage.districts.get("TA7").map(String::as_str), Some("Bridgwater"));
        assert_eq!(coverage.districts.get("BA21").map(String::as_str), Some("Yeovil"));
        assert!(!coverage.districts.contains_key("ZZ9"));
    }

    #[test]
    fn coverage_rejects_conflicting_district_names() {
        let mut dir = directory();
        dir.groups[1].areas.push(record("TA7", "Somewhere Else"));
        let err = build_coverage(&dir).unwrap_err();
        assert!(matches!(err, AreaDbError::Data(_)));
    }

    #[test]
    fn build_rejects_duplicate_prefix() {
        let mut dir = directory();
        let dup = dir.groups[0].clone();
        dir.groups.push(dup);
        assert!(matches!(build_index(&dir), Err(AreaDbError::Data(_))));
    }

    #[test]
    fn build_rejects_malformed_code() {
        let mut dir = directory();
        dir.groups[0].areas.push(record("BA5//", "Nowhere"));
        assert!(matches!(build_index(&dir), Err(AreaDbError::Data(_))));
    }

    #[test]
    fn build_rejects_duplicate_code_within_prefix() {
        let mut dir = directory();
        dir.groups[0].areas.push(record("BA5", "Wells Again"));
        assert!(matches!(build_index(&dir), Err(AreaDbError::Data(_))));
    }
}
