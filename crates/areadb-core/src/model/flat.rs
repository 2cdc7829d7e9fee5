// crates/areadb-core/src/model/flat.rs
use crate::model::nested::AreaDirectory;
use crate::traits::{AreaBackend, NameMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A derived, denormalized view of one [`AreaRecord`] for search purposes.
///
/// Produced exclusively by the index builder (`model::convert`), once, at
/// load time. Read-only thereafter: `search_tokens` is precomputed so no
/// query ever re-tokenizes a directory entry.
///
/// [`AreaRecord`]: crate::model::nested::AreaRecord
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlattenedArea<B: AreaBackend> {
    /// Stable identifier: the code itself when it already carries the
    /// group prefix, otherwise prefix + code.
    pub id: String,
    /// Original position in the directory. Equal-scoring candidates are
    /// ordered by this, which keeps ranking deterministic.
    pub ordinal: u32,
    pub prefix: B::Str,
    pub code: B::Str,
    pub town: B::Str,
    pub keywords: Option<String>,
    /// Direct detail-page link, when the area owns one.
    pub href: Option<String>,
    /// Normalized search tokens: expanded districts, bare prefix, whole
    /// compacted code, and the folded town name.
    pub search_tokens: Vec<String>,
}

impl<B: AreaBackend> NameMatch for FlattenedArea<B> {
    fn name_str(&self) -> &str {
        self.town.as_ref()
    }
}

/// The flat, search-ready list of all areas. Contiguous memory, scanned
/// linearly per query (the directory is a few dozen entries).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaIndex<B: AreaBackend> {
    pub areas: Vec<FlattenedArea<B>>,
}

impl<B: AreaBackend> AreaIndex<B> {
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// The set of covered postal districts, with the display name each one
/// resolves to.
///
/// Districts are stored uppercase and compacted (3–4 characters, e.g.
/// "BA5" or "BA16"). Built once from the directory; the builder rejects
/// a district that would map to two different names.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CoverageSet {
    pub districts: BTreeMap<String, String>,
}

/// Simple aggregate statistics for the database.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub groups: usize,
    pub areas: usize,
    pub districts: usize,
}

/// The master database: authoring directory plus the derived search index
/// and coverage set. Built once at startup, immutable afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaDb<B: AreaBackend> {
    pub directory: AreaDirectory<B>,
    pub index: AreaIndex<B>,
    pub coverage: CoverageSet,
}
