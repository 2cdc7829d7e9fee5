//! areadb-cli
//! ==========
//!
//! Command-line interface for the `areadb-core` service-area directory.
//!
//! This crate primarily provides a binary (`areadb-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Basic usage:
//!
//! ```text
//! areadb-cli --help
//! areadb-cli stats
//! areadb-cli search wells
//! areadb-cli coverage "BA5 1AA"
//! ```
//!
//! For programmatic access to the directory and search engine, use the
//! [`areadb-core`] crate directly.
//!
//! [`areadb-core`]: https://docs.rs/areadb-core
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
