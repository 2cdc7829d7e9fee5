// crates/areadb-core/src/selection.rs

//! Debounced selection/redirect controller.
//!
//! A plain state machine: Idle -> Confirming -> Idle. The host supplies
//! the clock as millisecond timestamps and performs the actual
//! navigation, so the controller runs identically in native code, tests,
//! and the browser. The single `Option<Pending>` field is the only timer
//! handle that can exist, which makes duplicate navigations structurally
//! impossible: scheduling always replaces the previous pending redirect.

use crate::model::flat::FlattenedArea;
use crate::traits::AreaBackend;
use serde::Serialize;

/// How long a confirmation is shown before the redirect fires.
/// Short enough to feel responsive, long enough to be readable.
pub const REDIRECT_DELAY_MS: u64 = 1200;

/// The outbound navigation side effect, as data. The hosting application
/// owns the destination path and query-parameter names; this carries the
/// selected postcode and town, plus the direct detail-page link when the
/// area has one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationRequest {
    pub postcode: String,
    pub town: String,
    pub href: Option<String>,
}

#[derive(Clone, Debug)]
struct Pending {
    request: NavigationRequest,
    deadline_ms: u64,
}

/// Selection state for one search widget instance.
#[derive(Debug, Default)]
pub struct SelectionController {
    pending: Option<Pending>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a selection.
    ///
    /// An area with a direct `href` bypasses the confirmation state and
    /// the navigation is returned immediately. Otherwise the controller
    /// enters Confirming and schedules a single delayed navigation,
    /// cancelling any previously pending one first.
    pub fn select<B: AreaBackend>(
        &mut self,
        area: &FlattenedArea<B>,
        now_ms: u64,
    ) -> Option<NavigationRequest> {
        // Cancel-before-schedule: a superseding selection must clear the
        // old handle before anything new exists.
        self.pending = None;

        let request = NavigationRequest {
            postcode: area.code.as_ref().to_string(),
            town: area.town.as_ref().to_string(),
            href: area.href.clone(),
        };

        if request.href.is_some() {
            return Some(request);
        }

        self.pending = Some(Pending {
            request,
            deadline_ms: now_ms.saturating_add(REDIRECT_DELAY_MS),
        });
        None
    }

    /// Advance the clock. Returns the navigation exactly once, when the
    /// confirmation delay has elapsed; the controller returns to Idle.
    pub fn poll(&mut self, now_ms: u64) -> Option<NavigationRequest> {
        match &self.pending {
            Some(p) if now_ms >= p.deadline_ms => {
                let request = p.request.clone();
                self.pending = None;
                Some(request)
            }
            _ => None,
        }
    }

    /// The pending request while Confirming, for the confirmation banner.
    pub fn confirming(&self) -> Option<&NavigationRequest> {
        self.pending.as_ref().map(|p| &p.request)
    }

    /// Teardown/unmount: discard any pending redirect.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
