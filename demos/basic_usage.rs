//! Basic usage example for areadb-rs
//!
//! This example demonstrates how to:
//! - Load the service-area directory
//! - Browse and search areas
//! - Drive the selection/redirect controller

use areadb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== AreaDB-RS Basic Usage Example ===\n");

    // Load the directory (embedded, built once per process)
    println!("Loading service-area directory...");
    let db = AreaDb::load()?;
    println!("✓ Directory loaded successfully\n");

    // Example 1: Overall stats
    println!("--- Example 1: Directory statistics ---");
    let stats = db.stats();
    println!("Groups: {}", stats.groups);
    println!("Areas: {}", stats.areas);
    println!("Covered districts: {}\n", stats.districts);

    // Example 2: Browse shortlist (empty search box)
    println!("--- Example 2: Browse shortlist ---");
    for (i, area) in db.browse().iter().enumerate() {
        println!("{}. {} — {}", i + 1, area.code, area.town);
    }
    println!();

    // Example 3: Fuzzy search, as the widget runs it per keystroke
    println!("--- Example 3: Search ---");
    for query in ["wells", "ba2", "bridg", "glaston"] {
        let hits = db.rank(query);
        println!("'{query}' → {} hit(s)", hits.len());
        for area in hits.iter().take(3) {
            println!("   {} — {}", area.code, area.town);
        }
    }
    println!();

    // Example 4: Selection with the debounced redirect
    println!("--- Example 4: Selection & redirect ---");
    let top = db.rank("glastonbury")[0];
    let mut controller = SelectionController::new();
    match controller.select(top, 0) {
        Some(nav) => println!("Immediate navigation to {:?}", nav.href),
        None => {
            println!(
                "Confirming '{}', redirect in {REDIRECT_DELAY_MS}ms...",
                controller.confirming().unwrap().town
            );
            let nav = controller.poll(REDIRECT_DELAY_MS).unwrap();
            println!("Navigate with postcode={} town={}", nav.postcode, nav.town);
        }
    }

    Ok(())
}
