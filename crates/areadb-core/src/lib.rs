// crates/areadb-core/src/lib.rs

//! areadb-core — service-area lookup and coverage engine.
//!
//! A static directory of postal-district groups and town entries is
//! loaded once, flattened into a search-ready index, and queried two
//! ways:
//!
//! - **Fuzzy search** ([`search`]): free-text queries (a postcode
//!   fragment or a town name, often partial) resolve to a ranked,
//!   capped list of areas for the search widgets.
//! - **Coverage** ([`coverage`]): a strict district-membership test that
//!   gates the booking flow with a yes/no answer.
//!
//! The [`selection`] module adds the debounced redirect controller the
//! widgets drive after a result is picked.

pub mod coverage;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod selection;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{AreaDbError, Result};
pub use crate::model::{
    AreaDb, AreaDirectory, AreaGroup, AreaIndex, AreaRecord, CoverageSet, DbStats, FlattenedArea,
};
pub use crate::coverage::Coverage;
// Export the Search Trait (crucial for users!)
pub use crate::search::AreaSearch;
pub use crate::selection::{NavigationRequest, SelectionController};
pub use crate::traits::{AreaBackend, DefaultBackend};

/// Convenience alias for the database with the default string backend.
pub type DefaultAreaDb = AreaDb<DefaultBackend>;
