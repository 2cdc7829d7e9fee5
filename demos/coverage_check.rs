//! Coverage gate example for areadb-rs
//!
//! The coverage resolver is the strict path: it answers the yes/no
//! "will we book a job here" question from a full-form submission,
//! independently of the fuzzy search widget.

use areadb_core::prelude::*;

fn main() -> Result<()> {
    let db = AreaDb::load()?;

    let submissions = [
        "BA5 1AA",    // full postcode, covered
        "ba16",       // bare district, covered (4-char lookup)
        "TA6 3LP",    // covered via compound code TA6/7
        "  ta7  ",    // whitespace and case are irrelevant
        "ZZ99 9ZZ",   // well-formed but out of area
        "BA",         // too short to be a district
        "not a code", // no district shape at all
    ];

    for raw in submissions {
        match db.check_coverage(raw) {
            Coverage {
                covered: true,
                district_name: Some(name),
            } => println!("{raw:>12} → ✓ covered ({name})"),
            _ => println!("{raw:>12} → ✗ not covered"),
        }
    }

    Ok(())
}
