// crates/areadb-core/src/search.rs

//! Relevance scoring and ranking over the flattened area index.
//!
//! Each keystroke runs a fresh, synchronous scan of the flat vector;
//! there is no shared accumulator between queries. Scores are unbounded
//! non-negative integers used only for relative ordering, with 0 meaning
//! "excluded".

use crate::coverage::Coverage;
use crate::model::flat::{AreaDb, AreaIndex, DbStats, FlattenedArea};
use crate::model::nested::AreaGroup;
use crate::text::{compact_key, fold_key};
use crate::traits::{AreaBackend, NameMatch};

/// Ranked output is capped at this many entries.
pub const MAX_RESULTS: usize = 10;
/// Entries shown by the explicit empty-query "browse" mode.
pub const BROWSE_COUNT: usize = 8;

// Additive predicate weights. Tuned empirically against the known area
// list; tests pin concrete query/outcome pairs rather than these numbers,
// so they can be retuned without breaking intent-level tests.
const W_EXACT_FULL: u32 = 1000;
const W_EXACT_PRIMARY: u32 = 900;
const W_TOWN_EXACT: u32 = 850;
const W_TOKEN_STARTS_WITH: u32 = 750;
const W_TOWN_STARTS_WITH: u32 = 650;
const W_PREFIX_EXACT: u32 = 400;
const W_PREFIX_STARTS_WITH: u32 = 250;
const W_HAYSTACK_FULL: u32 = 150;
const W_REVERSE_PREFIX: u32 = 120;
const W_HAYSTACK_PRIMARY: u32 = 100;

/// Longer, more specific queries edge out shorter coincidental matches
/// at equal predicate weight.
const LENGTH_BONUS_CAP: usize = 8;

/// Relevance of one area for one query. 0 means "no match" and is the
/// filter threshold: an area scores 0 exactly when no predicate fires.
///
/// Queries legitimately satisfy several predicates at once (an exact town
/// match is also a substring match), and the additive sum rewards that
/// multi-signal confidence without a bespoke probability model.
pub fn score<B: AreaBackend>(query: &str, area: &FlattenedArea<B>) -> u32 {
    let trimmed = fold_key(query);
    if trimmed.is_empty() {
        return 0;
    }

    let primary = trimmed.split_whitespace().next().unwrap_or("");
    let primary_compact = compact_key(primary);
    let full_compact = compact_key(&trimmed);

    let prefix_key = fold_key(area.prefix.as_ref());
    let town_key = fold_key(area.town.as_ref());
    let tokens = &area.search_tokens;

    let mut total: u32 = 0;

    // Exact token matches. The primary token only earns credit when it
    // differs from the full query, to avoid double-counting.
    if tokens.iter().any(|t| t == &full_compact) {
        total += W_EXACT_FULL;
    }
    if primary_compact != full_compact && tokens.iter().any(|t| t == &primary_compact) {
        total += W_EXACT_PRIMARY;
    }

    // The user typed a prefix of a stored token ("yeov" -> "yeovil").
    if tokens
        .iter()
        .any(|t| t != &full_compact && t.starts_with(full_compact.as_str()))
    {
        total += W_TOKEN_STARTS_WITH;
    }

    // The user typed a superset of a stored token ("ba162" -> "ba16").
    // The bare group prefix is skipped here: the dedicated prefix
    // predicates below own that signal, and matching it would light up
    // every record of the group for a query like "ba5".
    if tokens.iter().any(|t| {
        t.len() > 1
            && t != &prefix_key
            && t != &full_compact
            && full_compact.starts_with(t.as_str())
    }) {
        total += W_REVERSE_PREFIX;
    }

    // Town name.
    if area.is_named(&trimmed) {
        total += W_TOWN_EXACT;
    } else if area.name_starts_with(&trimmed) {
        total += W_TOWN_STARTS_WITH;
    }

    // Group prefix.
    if prefix_key == primary_compact {
        total += W_PREFIX_EXACT;
    } else if primary_compact.len() > 1 && prefix_key.starts_with(&primary_compact) {
        total += W_PREFIX_STARTS_WITH;
    }

    // Substring containment over the whole record.
    let haystack = haystack(area, &prefix_key, &town_key);
    if haystack.contains(&trimmed) {
        total += W_HAYSTACK_FULL;
    }
    if primary != trimmed && !primary.is_empty() && haystack.contains(primary) {
        total += W_HAYSTACK_PRIMARY;
    }

    if total == 0 {
        return 0;
    }
    total + trimmed.len().min(LENGTH_BONUS_CAP) as u32
}

fn haystack<B: AreaBackend>(area: &FlattenedArea<B>, prefix_key: &str, town_key: &str) -> String {
    let code_key = fold_key(area.code.as_ref());
    let keywords_key = area
        .keywords
        .as_deref()
        .map(fold_key)
        .unwrap_or_default();
    [prefix_key, &code_key, town_key, &keywords_key].join(" ")
}

/// **Ranker:** score everything, drop zeros, order by score descending
/// with the directory ordinal as tie-break, cap at [`MAX_RESULTS`].
///
/// The ordinal tie-break makes equal-score ordering deterministic and
/// reproducible instead of depending on sort internals.
pub fn rank<'a, B: AreaBackend>(
    query: &str,
    index: &'a AreaIndex<B>,
) -> Vec<&'a FlattenedArea<B>> {
    let mut hits: Vec<(u32, &FlattenedArea<B>)> = index
        .areas
        .iter()
        .filter_map(|area| {
            let s = score(query, area);
            (s > 0).then_some((s, area))
        })
        .collect();

    hits.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.ordinal.cmp(&b.1.ordinal)));
    hits.truncate(MAX_RESULTS);
    hits.into_iter().map(|(_, area)| area).collect()
}

/// Explicit empty-query mode: the first [`BROWSE_COUNT`] directory
/// entries verbatim, no scoring. This is a caller-selected mode, never
/// inferred from an empty query inside [`rank`].
pub fn browse<B: AreaBackend>(index: &AreaIndex<B>) -> &[FlattenedArea<B>] {
    &index.areas[..index.areas.len().min(BROWSE_COUNT)]
}

/// The Logic Trait.
/// Defines the search operations available on the database.
pub trait AreaSearch<B: AreaBackend> {
    fn stats(&self) -> DbStats;

    /// All flattened areas in directory order.
    fn areas(&self) -> &[FlattenedArea<B>];

    fn find_group_by_prefix(&self, prefix: &str) -> Option<&AreaGroup<B>>;

    /// Group lookup by display name, accent- and case-insensitive.
    fn find_group_by_name(&self, name: &str) -> Option<&AreaGroup<B>>;

    fn find_area_by_id(&self, id: &str) -> Option<&FlattenedArea<B>>;

    /// Ranked fuzzy search, capped at [`MAX_RESULTS`]. An empty result
    /// with a non-empty query is the caller's "no matches" signal.
    fn rank(&self, query: &str) -> Vec<&FlattenedArea<B>>;

    /// The browse default for an empty search box.
    fn browse(&self) -> &[FlattenedArea<B>];

    /// Strict yes/no coverage gate for the booking flow.
    fn check_coverage(&self, raw_postcode: &str) -> Coverage;
}

impl<B: AreaBackend> AreaSearch<B> for AreaDb<B> {
    fn stats(&self) -> DbStats {
        DbStats {
            groups: self.directory.groups.len(),
            areas: self.index.len(),
            districts: self.coverage.len(),
        }
    }

    fn areas(&self) -> &[FlattenedArea<B>] {
        &self.index.areas
    }

    fn find_group_by_prefix(&self, prefix: &str) -> Option<&AreaGroup<B>> {
        // Linear scan: the directory holds a handful of groups.
        self.directory
            .groups
            .iter()
            .find(|g| g.prefix.as_ref().eq_ignore_ascii_case(prefix.trim()))
    }

    fn find_group_by_name(&self, name: &str) -> Option<&AreaGroup<B>> {
        self.directory.groups.iter().find(|g| g.is_named(name))
    }

    fn find_area_by_id(&self, id: &str) -> Option<&FlattenedArea<B>> {
        self.index
            .areas
            .iter()
            .find(|a| a.id.eq_ignore_ascii_case(id.trim()))
    }

    fn rank(&self, query: &str) -> Vec<&FlattenedArea<B>> {
        rank(query, &self.index)
    }

    fn browse(&self) -> &[FlattenedArea<B>] {
        browse(&self.index)
    }

    fn check_coverage(&self, raw_postcode: &str) -> Coverage {
        self.coverage.resolve(raw_postcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::convert::{build_coverage, build_index};
    use crate::model::nested::{AreaDirectory, AreaGroup, AreaRecord};
    use crate::traits::DefaultBackend;

    fn record(code: &str, town: &str, keywords: Option<&str>) -> AreaRecord<DefaultBackend> {
        AreaRecord {
            code: code.to_string(),
            town: town.to_string(),
            keywords: keywords.map(str::to_string),
            page: None,
        }
    }

    fn db() -> AreaDb<DefaultBackend> {
        let directory = AreaDirectory {
            groups: vec![
                AreaGroup {
                    prefix: "BA".to_string(),
                    display_name: "Bath & East Somerset".to_string(),
                    areas: vec![
                        record("BA5", "Wells", Some("wookey hole coxley")),
                        record("BA6", "Glastonbury", None),
                        record("BA16", "Street", Some("walton")),
                        record("BA20/21/22", "Yeovil", None),
                    ],
                },
                AreaGroup {
                    prefix: "TA".to_string(),
                    display_name: "Taunton & West Somerset".to_string(),
                    areas: vec![
                        record("TA1/2", "Taunton", None),
                        record("TA6/7", "Bridgwater", Some("north petherton")),
                        record("TA8", "Burnham-on-Sea", None),
                    ],
                },
            ],
        };
        let index = build_index(&directory).unwrap();
        let coverage = build_coverage(&directory).unwrap();
        AreaDb {
            directory,
            index,
            coverage,
        }
    }

    fn towns(hits: &[&FlattenedArea<DefaultBackend>]) -> Vec<String> {
        hits.iter().map(|a| a.town.clone()).collect()
    }

    #[test]
    fn town_exact_match_ranks_first() {
        let db = db();
        let hits = db.rank("wells");
        assert_eq!(hits[0].town, "Wells");
    }

    #[test]
    fn bare_district_query_does_not_match_longer_district() {
        let db = db();
        let hits = db.rank("ba5");
        assert_eq!(hits.len(), 1, "got {:?}", towns(&hits));
        assert_eq!(hits[0].town, "Wells");
    }

    #[test]
    fn two_digit_district_query_matches_only_itself() {
        let db = db();
        let hits = db.rank("ba16");
        assert_eq!(hits.len(), 1, "got {:?}", towns(&hits));
        assert_eq!(hits[0].town, "Street");
    }

    #[test]
    fn compound_sub_district_is_searchable() {
        let db = db();
        let hits = db.rank("ba21");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].town, "Yeovil");
    }

    #[test]
    fn keyword_substring_matches() {
        let db = db();
        let hits = db.rank("wookey");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].town, "Wells");
    }

    #[test]
    fn bare_prefix_lists_whole_group_first() {
        let db = db();
        let hits = db.rank("ta");
        // Every TA record matches via the exact prefix token; BA records
        // must not ride along.
        assert!(hits.iter().all(|a| a.prefix == "TA"), "{:?}", towns(&hits));
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn ranking_is_deterministic() {
        let db = db();
        let first = towns(&db.rank("ta"));
        let second = towns(&db.rank("ta"));
        assert_eq!(first, second);
    }

    #[test]
    fn equal_scores_tie_break_on_directory_order() {
        let db = db();
        let hits = db.rank("ta");
        let ordinals: Vec<u32> = hits
            .iter()
            .zip(hits.iter().skip(1))
            .filter(|(a, b)| score("ta", **a) == score("ta", **b))
            .flat_map(|(a, b)| [a.ordinal, b.ordinal])
            .collect();
        let mut sorted = ordinals.clone();
        sorted.sort_unstable();
        assert_eq!(ordinals, sorted);
    }

    #[test]
    fn zero_score_and_exclusion_agree() {
        let db = db();
        for query in ["wells", "ba", "ta6", "street", "nomatch", "ba5 1aa"] {
            let hits = db.rank(query);
            for area in db.areas() {
                let in_hits = hits.iter().any(|h| h.id == area.id);
                let s = score(query, area);
                assert_eq!(s > 0, in_hits, "query {query:?}, area {}", area.id);
            }
        }
    }

    #[test]
    fn empty_query_returns_nothing() {
        let db = db();
        assert!(db.rank("").is_empty());
        assert!(db.rank("   ").is_empty());
    }

    #[test]
    fn browse_returns_leading_entries_unscored() {
        let db = db();
        let entries = db.browse();
        assert_eq!(entries.len(), 7.min(BROWSE_COUNT));
        assert_eq!(entries[0].town, "Wells");
    }

    #[test]
    fn results_are_capped() {
        // Synthetic directory where one token matches everything.
        let areas: Vec<AreaRecord<DefaultBackend>> = (1..=15)
            .map(|n| record(&format!("ZE{n}"), &format!("Testville {n}"), Some("testville")))
            .collect();
        let directory = AreaDirectory {
            groups: vec![AreaGroup {
                prefix: "ZE".to_string(),
                display_name: "Test".to_string(),
                areas,
            }],
        };
        let index = build_index(&directory).unwrap();
        assert_eq!(rank("testville", &index).len(), MAX_RESULTS);
    }

    #[test]
    fn longer_query_outranks_shorter_on_equal_predicates() {
        let db = db();
        let area = db.find_area_by_id("BA6").unwrap();
        assert!(score("glastonbury", area) > score("glast", area));
    }

    #[test]
    fn lookup_helpers() {
        let db = db();
        assert!(db.find_group_by_prefix(" ta ").is_some());
        assert!(db.find_group_by_prefix("zz").is_none());
        assert!(db.find_area_by_id("ta6/7").is_some());
        let stats = db.stats();
        assert_eq!(stats.groups, 2);
        assert_eq!(stats.areas, 7);
        // BA5, BA6, BA16, BA20-22, TA1, TA2, TA6, TA7, TA8
        assert_eq!(stats.districts, 11);
    }

    #[test]
    fn group_lookup_by_display_name_folds_case() {
        let db = db();
        let group = db.find_group_by_name("taunton & WEST somerset").unwrap();
        assert_eq!(group.prefix, "TA");
        assert!(db.find_group_by_name("somerset").is_none());
    }

    #[test]
    fn town_predicates_fold_query_case() {
        let db = db();
        let wells = db.find_area_by_id("BA5").unwrap();
        assert_eq!(score("WELLS", wells), score("wells", wells));
        let burnham = db.find_area_by_id("TA8").unwrap();
        assert_eq!(score("Burnham-on", burnham), score("burnham-on", burnham));
    }
}
