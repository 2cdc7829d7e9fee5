// crates/areadb-core/src/model/mod.rs
pub mod convert;
pub mod flat;
pub mod nested;

pub use flat::{AreaDb, AreaIndex, CoverageSet, DbStats, FlattenedArea};
pub use nested::{AreaDirectory, AreaGroup, AreaRecord};

/// File suffix for binary cache files written from a directory JSON.
pub const CACHE_SUFFIX: &str = ".areas.bin";
