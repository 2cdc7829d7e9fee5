//! Error handling example for areadb-rs
//!
//! Directory defects are data-authoring bugs: they fail loudly when the
//! database is built, never silently at query time. Query-time "errors"
//! (no matches, unparseable postcode) are ordinary values.

use areadb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== AreaDB-RS Error Handling Example ===\n");

    // Example 1: loading the embedded directory
    println!("--- Example 1: Loading with error handling ---");
    match AreaDb::load() {
        Ok(db) => println!("✓ Loaded {} areas", db.stats().areas),
        Err(e) => {
            eprintln!("✗ Failed to load directory: {e}");
            return Err(e);
        }
    }
    println!();

    // Example 2: a duplicated district with conflicting names is
    // rejected at build time
    println!("--- Example 2: Conflicting coverage data ---");
    let conflicting = r#"{
        "groups": [
            { "prefix": "TA", "display_name": "Test", "areas": [
                { "code": "TA6/7", "town": "Bridgwater" },
                { "code": "TA7", "town": "Elsewhere" }
            ]}
        ]
    }"#;
    match AreaDb::from_json_str(conflicting) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("rejected as expected: {e}"),
    }
    println!();

    // Example 3: malformed compound codes are caught the same way
    println!("--- Example 3: Malformed compound code ---");
    let malformed = r#"{
        "groups": [
            { "prefix": "BA", "display_name": "Test", "areas": [
                { "code": "BA5//", "town": "Wells" }
            ]}
        ]
    }"#;
    match AreaDb::from_json_str(malformed) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("rejected as expected: {e}"),
    }
    println!();

    // Example 4: query-time misses are values, not errors
    println!("--- Example 4: Query-time misses ---");
    let db = AreaDb::load()?;
    println!("search 'london' → {} hits", db.rank("london").len());
    println!("coverage '???' → covered = {}", db.check_coverage("???").covered);

    Ok(())
}
