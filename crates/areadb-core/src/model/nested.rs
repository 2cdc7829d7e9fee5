// crates/areadb-core/src/model/nested.rs
use crate::traits::{AreaBackend, NameMatch};
use serde::{Deserialize, Serialize};

/// # The Authoring Model
///
/// The directory as it is written and versioned: groups keyed by a
/// two-letter postal area prefix, each holding the town entries for that
/// area. This shape is for humans; searching happens over the flattened
/// view derived from it (see `model::flat`).
///
/// **Structure:** `AreaDirectory` -> `Vec<AreaGroup>` -> `Vec<AreaRecord>`

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaDirectory<B: AreaBackend> {
    pub groups: Vec<AreaGroup<B>>,
}

/// One postal-area prefix and the localities filed under it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaGroup<B: AreaBackend> {
    /// Two-letter postal area code, e.g. "BA". Unique across the directory.
    pub prefix: B::Str,
    /// Human-readable name for the group, e.g. "Taunton & West Somerset".
    pub display_name: B::Str,
    pub areas: Vec<AreaRecord<B>>,
}

/// One town/locality entry within a group.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaRecord<B: AreaBackend> {
    /// District code; may be compound shorthand like "BA20/21/22" when
    /// several adjacent districts share one locality name.
    pub code: B::Str,
    /// Display name of the town/locality.
    pub town: B::Str,
    /// Free-text synonyms and neighbouring-locality hints, searched but
    /// never displayed.
    #[serde(default)]
    pub keywords: Option<String>,
    /// Path of a dedicated detail page, when one exists. Selecting an
    /// area that owns a page navigates there directly.
    #[serde(default)]
    pub page: Option<String>,
}

impl<B: AreaBackend> AreaDirectory<B> {
    /// Total number of town entries across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.areas.len()).sum()
    }
}

impl<B: AreaBackend> NameMatch for AreaGroup<B> {
    fn name_str(&self) -> &str {
        self.display_name.as_ref()
    }
}
