#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use areadb_wasm::{area_count, RedirectController};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn can_count_areas() {
    let count = area_count();
    assert!(count > 0, "expected at least one area, got {count}");
}

#[wasm_bindgen_test]
fn controller_round_trip() {
    let mut controller = RedirectController::new();
    // Unknown id: no navigation, nothing pending.
    let nav = controller.select("ZZ99", 0.0);
    assert!(nav.is_null());
    assert!(controller.confirming_town().is_none());
}
