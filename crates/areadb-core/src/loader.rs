// crates/areadb-core/src/loader.rs

//! # Directory Loader
//!
//! Handles the physical layer (embedded dataset, file I/O, optional
//! decompression) and delegates parsing to `serde_json` / `bincode`.
//! The directory is static data known at build time; nothing here runs
//! more than once per process for the default dataset.

use crate::error::{AreaDbError, Result};
use crate::model::convert::{build_coverage, build_index};
use crate::model::{AreaDb, AreaDirectory};
use crate::traits::{AreaBackend, DefaultBackend};
use bincode::Options;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

static AREA_DB_CACHE: OnceCell<AreaDb<DefaultBackend>> = OnceCell::new();

/// The versioned service-area directory shipped with the crate.
pub const EMBEDDED_DIRECTORY: &str = include_str!("../data/service_areas.json");

/// Decode size limit for the binary cache, to reject data bombs.
const BINCODE_LIMIT: u64 = 16 * 1024 * 1024;

impl AreaDb<DefaultBackend> {
    /// Load the embedded directory behind a process-wide singleton.
    ///
    /// The build runs once; every later call returns the same immutable
    /// database. A defect in the embedded data surfaces here, loudly,
    /// never at query time.
    pub fn load() -> Result<&'static Self> {
        AREA_DB_CACHE.get_or_try_init(|| Self::from_json_str(EMBEDDED_DIRECTORY))
    }

    /// Parse a directory from JSON and build the search index and
    /// coverage set.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let directory: AreaDirectory<DefaultBackend> = serde_json::from_str(json)?;
        Self::from_directory(directory)
    }

    /// Load a directory JSON file from disk. With the `compact` feature,
    /// a `.gz` path is decompressed transparently.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = open_stream(path.as_ref())?;
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// Reconstruct a database from its binary cache (see
    /// [`AreaDb::to_bytes`]).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let db: AreaDb<DefaultBackend> = bincode::DefaultOptions::new()
            .with_limit(BINCODE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;
        Ok(db)
    }

    /// Serialize the whole database (directory, index, coverage) for a
    /// binary cache file, skipping the JSON parse and index build on the
    /// next load.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = bincode::DefaultOptions::new()
            .with_limit(BINCODE_LIMIT)
            .serialize(self)?;
        Ok(bytes)
    }
}

impl<B: AreaBackend> AreaDb<B> {
    /// Build the database from an already-parsed directory: validate,
    /// flatten, derive coverage.
    pub fn from_directory(directory: AreaDirectory<B>) -> Result<Self> {
        let index = build_index(&directory)?;
        let coverage = build_coverage(&directory)?;
        Ok(AreaDb {
            directory,
            index,
            coverage,
        })
    }
}

/// Opens a file, buffers it, and (with the `compact` feature) wraps a
/// `.gz` path in a Gzip decoder. Returns a generic reader so the caller
/// doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AreaDbError::NotFound(format!("directory not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz")) {
        use flate2::read::GzDecoder;
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}
