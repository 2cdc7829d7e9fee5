// crates/areadb-core/src/text.rs

//! Text normalization and compound-code tokenization.
//!
//! Everything in this module is a pure, total function over strings.
//! The compound-code expansion in [`district_tokens`] is a best-effort
//! heuristic over postal shorthand, not a postal-authority validation;
//! it lives here, isolated, so it can be audited or replaced without
//! touching scoring or ranking.

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Trim leading/trailing whitespace
/// 2\) Transliterate Unicode → ASCII (e.g. `Curaçao` -> `Curacao`)
/// 3\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII. The same folding is applied to
/// directory entries at build time and to queries at search time, so the
/// two sides always compare like-for-like.
///
/// # Examples
///
/// ```rust
/// use areadb_core::text::fold_key;
///
/// assert_eq!(fold_key("  Wells "), "wells");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// [`fold_key`] with all interior whitespace removed.
///
/// Used wherever a postcode fragment must compare regardless of how the
/// user spaced it (`"ba5 1aa"` vs `"BA51AA"`).
pub fn compact_key(s: &str) -> String {
    fold_key(s).split_whitespace().collect()
}

/// Compares two strings for equality after folding.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Expand a possibly-compound district code into its individual districts.
///
/// A compound code like `"BA20/21/22"` is postal shorthand for BA20, BA21
/// and BA22: segments are split on `/`, and a purely numeric segment
/// inherits the letters of the most recently seen lettered segment
/// (carry-forward rule). A segment that never sees letters anywhere in the
/// compound falls back to the group's `prefix`.
///
/// Output is lowercase, deduplicated, in segment order.
///
/// ```rust
/// use areadb_core::text::district_tokens;
///
/// assert_eq!(district_tokens("BA", "BA20/21/22"), ["ba20", "ba21", "ba22"]);
/// assert_eq!(district_tokens("TA", "TA6/7"), ["ta6", "ta7"]);
/// assert_eq!(district_tokens("BS", "26/27"), ["bs26", "bs27"]);
/// ```
pub fn district_tokens(prefix: &str, code: &str) -> Vec<String> {
    let prefix_key = compact_key(prefix);
    let code_key = compact_key(code);

    let mut carried: Option<String> = None;
    let mut out: Vec<String> = Vec::new();

    for segment in code_key.split('/') {
        if segment.is_empty() {
            continue;
        }
        let letters: String = segment
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect();

        let token = if letters.is_empty() {
            // Numeric-only segment: inherit letters from an earlier segment,
            // or fall back to the group prefix.
            let lead = carried.as_deref().unwrap_or(&prefix_key);
            format!("{lead}{segment}")
        } else {
            carried = Some(letters);
            segment.to_string()
        };

        if !out.contains(&token) {
            out.push(token);
        }
    }
    out
}

/// Full search-token set for one directory entry's code.
///
/// Emits every expanded district from [`district_tokens`], the bare group
/// prefix, and the whole compacted code. Lowercase, deduplicated,
/// insertion-ordered — computed once at index-build time, never per query.
///
/// ```rust
/// use areadb_core::text::tokens_for_code;
///
/// let tokens = tokens_for_code("BA", "BA20/21/22");
/// assert!(tokens.contains(&"ba20".to_string()));
/// assert!(tokens.contains(&"ba21".to_string()));
/// assert!(tokens.contains(&"ba22".to_string()));
/// assert!(tokens.contains(&"ba".to_string()));
/// ```
pub fn tokens_for_code(prefix: &str, code: &str) -> Vec<String> {
    let mut tokens = district_tokens(prefix, code);

    let prefix_key = compact_key(prefix);
    if !prefix_key.is_empty() && !tokens.contains(&prefix_key) {
        tokens.push(prefix_key);
    }

    let code_key = compact_key(code);
    if !code_key.is_empty() && !tokens.contains(&code_key) {
        tokens.push(code_key);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_trims_and_lowercases() {
        assert_eq!(fold_key("  Wells "), "wells");
        assert_eq!(fold_key("BRIDGWATER"), "bridgwater");
        assert_eq!(fold_key(""), "");
    }

    #[test]
    fn compact_key_strips_interior_whitespace() {
        assert_eq!(compact_key(" BA5 1AA "), "ba51aa");
        assert_eq!(compact_key("ba 20 / 21"), "ba20/21");
    }

    #[test]
    fn equals_folded_ignores_case_and_accents() {
        assert!(equals_folded("Wells", "WELLS"));
        assert!(equals_folded("Curaçao", "curacao"));
        assert!(!equals_folded("Wells", "Street"));
    }

    #[test]
    fn compound_code_carries_letters_forward() {
        assert_eq!(district_tokens("BA", "BA20/21/22"), ["ba20", "ba21", "ba22"]);
        assert_eq!(district_tokens("TA", "TA6/7"), ["ta6", "ta7"]);
    }

    #[test]
    fn compound_code_falls_back_to_group_prefix() {
        // No segment carries letters of its own; the group's prefix steps in.
        assert_eq!(district_tokens("BS", "26/27/28"), ["bs26", "bs27", "bs28"]);
    }

    #[test]
    fn compound_code_with_embedded_whitespace() {
        assert_eq!(district_tokens("BA", "BA20 / 21"), ["ba20", "ba21"]);
    }

    #[test]
    fn tokens_include_prefix_and_whole_code() {
        let tokens = tokens_for_code("BA", "BA20/21/22");
        assert_eq!(tokens, ["ba20", "ba21", "ba22", "ba", "ba20/21/22"]);
    }

    #[test]
    fn tokens_for_simple_code_are_deduplicated() {
        // Whole compacted code equals the single district token.
        assert_eq!(tokens_for_code("BA", "BA5"), ["ba5", "ba"]);
    }
}
