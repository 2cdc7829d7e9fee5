// crates/areadb-core/src/error.rs

use thiserror::Error;

/// Errors produced while loading or building the service-area database.
///
/// Query-time operations never fail: a query that matches nothing is an
/// empty result, and an unparseable postcode resolves to "not covered".
/// Everything here is a load-time or data-authoring defect.
#[derive(Debug, Error)]
pub enum AreaDbError {
    /// A referenced file or dataset could not be located.
    #[error("not found: {0}")]
    NotFound(String),

    /// Underlying I/O failure while reading a directory file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The directory JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The binary cache could not be decoded.
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    /// The directory parsed but violates an authoring invariant
    /// (duplicate prefix, malformed compound code, coverage conflict).
    #[error("directory data error: {0}")]
    Data(String),
}

pub type Result<T> = std::result::Result<T, AreaDbError>;
