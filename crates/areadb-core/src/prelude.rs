//! areadb-core prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::coverage::Coverage;
pub use crate::error::{AreaDbError, Result};
pub use crate::model::{
    AreaDb, AreaDirectory, AreaGroup, AreaIndex, AreaRecord, CoverageSet, DbStats, FlattenedArea,
};
pub use crate::search::{AreaSearch, BROWSE_COUNT, MAX_RESULTS};
pub use crate::selection::{NavigationRequest, SelectionController, REDIRECT_DELAY_MS};
pub use crate::text::{compact_key, equals_folded, fold_key, tokens_for_code};
pub use crate::traits::{AreaBackend, DefaultBackend, NameMatch};
pub use crate::DefaultAreaDb;
