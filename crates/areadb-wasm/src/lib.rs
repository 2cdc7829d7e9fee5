//! areadb-wasm — WebAssembly bindings for areadb-core
//!
//! This crate exposes a small, ergonomic JS/WASM API built on top of
//! `areadb-core` for the website's search and coverage widgets. The
//! directory ships embedded in `areadb-core`, so the module is fully
//! self-contained.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Basic queries: `area_count()`, `get_stats()`
//! - Search helpers returning JSON-serializable objects:
//!   - `search("wells" | "ba2" | ...)` — ranked, capped at 10
//!   - `browse()` — the shortlist for an empty search box
//!   - `check_coverage("BA5 1AA")` — the strict booking gate
//! - A `RedirectController` class implementing the debounced
//!   selection/redirect state machine; the page supplies
//!   `performance.now()`-style millisecond clocks and performs the
//!   navigation itself.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { search, check_coverage, RedirectController } from 'areadb-wasm';
//!
//! async function main() {
//!   await init(); // initializes the embedded directory
//!
//!   const results = search('wells');
//!   // [{ id: "BA5", prefix: "BA", code: "BA5", town: "Wells", ... }]
//!
//!   const gate = check_coverage('BA5 1AA');
//!   // { covered: true, districtName: "Wells" }
//!
//!   const controller = new RedirectController();
//!   controller.select(results[0].id, performance.now());
//!   setInterval(() => {
//!     const nav = controller.poll(performance.now());
//!     if (nav) window.location.assign(nav.href ?? quoteUrl(nav));
//!   }, 100);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - All exported functions are `wasm_bindgen` bindings and return plain
//!   types or `JsValue` containing JSON-serializable arrays/objects.
//! - Result order from `search` is the engine's deterministic ranking;
//!   render it as-is.

use wasm_bindgen::prelude::*;

// Core Imports
use areadb_core::prelude::*;
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::to_value;

/// One search result, shaped for the widget list.
#[derive(Serialize)]
struct AreaView<'a> {
    id: &'a str,
    prefix: &'a str,
    code: &'a str,
    town: &'a str,
    keywords: Option<&'a str>,
}

impl<'a> AreaView<'a> {
    fn from_area(area: &'a FlattenedArea<DefaultBackend>) -> Self {
        AreaView {
            id: &area.id,
            prefix: &area.prefix,
            code: &area.code,
            town: &area.town,
            keywords: area.keywords.as_deref(),
        }
    }
}

fn db() -> &'static DefaultAreaDb {
    // The embedded directory is validated at build time; a failure here
    // is a shipped-data defect, not a runtime condition.
    AreaDb::load().expect("embedded directory failed to build")
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let stats = db().stats();
    web_sys::console::log_1(
        &format!(
            "areadb: {} areas across {} groups, {} covered districts",
            stats.areas, stats.groups, stats.districts
        )
        .into(),
    );
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn area_count() -> usize {
    db().areas().len()
}

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    let stats = db().stats();
    let stats = json!({
        "groups": stats.groups,
        "areas": stats.areas,
        "districts": stats.districts,
    });

    to_value(&stats).unwrap()
}

/* --------------------------------------------------------------------------
   Search
-------------------------------------------------------------------------- */

/// Ranked fuzzy search. Returns an array of area objects in rank order;
/// an empty array with a non-empty query is the "no matches" signal.
#[wasm_bindgen]
pub fn search(query: &str) -> JsValue {
    let out: Vec<AreaView<'_>> = db().rank(query).into_iter().map(AreaView::from_area).collect();
    to_value(&out).unwrap()
}

/// The browse shortlist for an empty search box.
#[wasm_bindgen]
pub fn browse() -> JsValue {
    let out: Vec<AreaView<'_>> = db().browse().iter().map(AreaView::from_area).collect();
    to_value(&out).unwrap()
}

/* --------------------------------------------------------------------------
   Coverage Gate
-------------------------------------------------------------------------- */

/// Strict coverage check: `{ covered: bool, districtName: string|null }`.
#[wasm_bindgen]
pub fn check_coverage(raw_postcode: &str) -> JsValue {
    let coverage = db().check_coverage(raw_postcode);
    let out = json!({
        "covered": coverage.covered,
        "districtName": coverage.district_name,
    });

    to_value(&out).unwrap()
}

/* --------------------------------------------------------------------------
   Selection / Redirect
-------------------------------------------------------------------------- */

/// The debounced selection/redirect state machine, exported as a JS
/// class. The page drives it with millisecond clocks and performs the
/// returned navigation itself.
#[wasm_bindgen]
pub struct RedirectController {
    inner: SelectionController,
}

#[wasm_bindgen]
impl RedirectController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RedirectController {
        RedirectController {
            inner: SelectionController::new(),
        }
    }

    /// Select an area by id. Returns a navigation object immediately for
    /// areas with a dedicated page, otherwise `null` while the
    /// confirmation delay runs.
    pub fn select(&mut self, id: &str, now_ms: f64) -> JsValue {
        match db().find_area_by_id(id) {
            Some(area) => match self.inner.select(area, now_ms as u64) {
                Some(nav) => to_value(&nav).unwrap(),
                None => JsValue::NULL,
            },
            None => JsValue::NULL,
        }
    }

    /// Returns the navigation object exactly once, when the delay has
    /// elapsed; `null` otherwise.
    pub fn poll(&mut self, now_ms: f64) -> JsValue {
        match self.inner.poll(now_ms as u64) {
            Some(nav) => to_value(&nav).unwrap(),
            None => JsValue::NULL,
        }
    }

    /// Town name of the pending selection, for the confirmation banner.
    pub fn confirming_town(&self) -> Option<String> {
        self.inner.confirming().map(|nav| nav.town.clone())
    }

    /// Teardown: discard any pending redirect.
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }
}

impl Default for RedirectController {
    fn default() -> Self {
        Self::new()
    }
}
