//! Event-driven orchestration: viewport and geocoder events in, fetch →
//! merge → rank → reconcile out.

use dealerloc_core::{rank, BoundingBox, LocationStore, Origin};
use dealerloc_fetch::{FetchError, LocationFetcher};

use crate::render::{MarkerLayer, SidebarList};
use crate::sync::{ViewEvent, ViewSync};

/// One dealer-locator instance: the store, the fetcher, both views, and the
/// current ranking origin, wired together explicitly.
///
/// Everything is owned by the instance and injected at construction — no
/// ambient singletons — so several engines (several maps) can coexist and
/// each is independently testable.
///
/// All handlers absorb fetch failures: a failed round is logged and the
/// store and views stay at their last-known-good state. Rendered rows and
/// markers are never cleared. Interleaved async rounds are safe because
/// store merges are commutative and idempotent; stale in-flight fetches are
/// not cancelled, they complete and merge harmlessly.
pub struct LocatorEngine<S, M> {
    store: LocationStore,
    fetcher: LocationFetcher,
    view: ViewSync<S, M>,
    origin: Option<Origin>,
}

impl<S: SidebarList, M: MarkerLayer> LocatorEngine<S, M> {
    pub fn new(fetcher: LocationFetcher, sidebar: S, markers: M) -> Self {
        Self {
            store: LocationStore::new(),
            fetcher,
            view: ViewSync::new(sidebar, markers),
            origin: None,
        }
    }

    /// The map viewport moved or the page loaded: make sure the new box is
    /// covered, then re-rank and reconcile.
    pub async fn viewport_changed(&mut self, bbox: BoundingBox) {
        match self.fetcher.ensure_coverage(&bbox, &mut self.store).await {
            Ok(outcome) => tracing::debug!(?outcome, "coverage ensured"),
            Err(err) => {
                log_fetch_failure(&err);
            }
        }
        self.refresh_view();
    }

    /// A geocoder search resolved: the result becomes the ranking origin
    /// and its viewport is covered like any other move.
    pub async fn geocoded(&mut self, origin: Origin, bbox: BoundingBox) {
        self.origin = Some(origin);
        self.viewport_changed(bbox).await;
    }

    /// Browser geolocation came back. Denial (`None`) is expected and
    /// non-fatal: the origin stays unset and records keep their store order
    /// until a location arrives another way.
    pub fn geolocated(&mut self, origin: Option<Origin>) {
        match origin {
            Some(origin) => {
                self.origin = Some(origin);
                self.refresh_view();
            }
            None => tracing::debug!("geolocation unavailable, continuing without origin"),
        }
    }

    /// Forwards a click event to the view. Renderer failures are logged and
    /// absorbed so one dead element cannot halt unrelated handlers.
    pub fn handle_event(&mut self, event: &ViewEvent) {
        if let Err(err) = self.view.handle_event(event) {
            tracing::warn!(error = %err, "view event handling failed");
        }
    }

    fn refresh_view(&mut self) {
        let records = self.store.all_records();
        let ranked = match self.origin {
            Some(origin) => rank(records, origin),
            None => records,
        };
        if let Err(err) = self.view.reconcile(&ranked, self.store.total_count()) {
            tracing::warn!(error = %err, "view reconcile aborted");
        }
    }

    #[must_use]
    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &ViewSync<S, M> {
        &self.view
    }

    #[must_use]
    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }
}

fn log_fetch_failure(err: &FetchError) {
    tracing::warn!(error = %err, "dealer fetch failed, keeping last known data");
}
