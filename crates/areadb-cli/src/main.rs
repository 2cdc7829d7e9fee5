//! areadb-cli — Command-line interface for areadb-core
//!
//! This binary provides a simple way to inspect the service-area
//! directory from your terminal: overall statistics, the group and area
//! listings, the fuzzy search used by the website widgets, and the
//! strict coverage check that gates the booking flow.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ areadb stats
//!
//! - List groups and the areas under one prefix
//!   $ areadb groups
//!   $ areadb areas BA
//!
//! - Fuzzy search, exactly as the search widget would
//!   $ areadb search wells
//!   $ areadb search "ba2"
//!
//! - Coverage gate
//!   $ areadb coverage "BA5 1AA"
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the directory embedded in `areadb-core`.
//! Use `--input <path>` to point at a custom directory JSON (a `.gz`
//! file works when the `compact` feature is on, which is the default).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use areadb_core::prelude::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Load from --input when given, otherwise the embedded directory.
    let owned;
    let db: &DefaultAreaDb = match &args.input {
        Some(path) => {
            owned = AreaDb::load_from_path(path)
                .with_context(|| format!("loading directory from {path}"))?;
            &owned
        }
        None => AreaDb::load()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Directory statistics:");
            println!("  Groups: {}", stats.groups);
            println!("  Areas: {}", stats.areas);
            println!("  Covered districts: {}", stats.districts);
        }

        Commands::Groups => {
            for group in &db.directory.groups {
                println!(
                    "{} — {} ({} areas)",
                    group.prefix,
                    group.display_name,
                    group.areas.len()
                );
            }
        }

        Commands::Areas { group } => {
            let found = db
                .find_group_by_prefix(&group)
                .or_else(|| db.find_group_by_name(&group));
            match found {
                Some(group) => {
                    println!("Areas in {}:", group.display_name);
                    for area in &group.areas {
                        match &area.keywords {
                            Some(kw) => println!("- {} {} ({kw})", area.code, area.town),
                            None => println!("- {} {}", area.code, area.town),
                        }
                    }
                }
                None => eprintln!("No group matching: {group}"),
            }
        }

        Commands::Search { query } => {
            let hits = db.rank(&query);
            if hits.is_empty() {
                println!("No areas found matching: {query}");
            } else {
                for area in hits {
                    println!("{} — {}, {}", area.code, area.town, area.prefix);
                }
            }
        }

        Commands::Browse => {
            for area in db.browse() {
                println!("{} — {}", area.code, area.town);
            }
        }

        Commands::Coverage { postcode } => {
            let coverage = db.check_coverage(&postcode);
            match coverage.district_name {
                Some(name) => println!("✓ Covered: {name}"),
                None => println!("✗ Not covered: {postcode}"),
            }
        }

        Commands::Compile { output } => {
            let out_path = output.unwrap_or_else(|| {
                let base = args.input.as_deref().unwrap_or("service_areas.json");
                format!("{base}{}", areadb_core::model::CACHE_SUFFIX)
            });
            let bytes = db.to_bytes()?;
            std::fs::write(&out_path, &bytes)
                .with_context(|| format!("writing cache to {out_path}"))?;
            println!("Wrote {} bytes to {out_path}", bytes.len());
        }
    }

    Ok(())
}
