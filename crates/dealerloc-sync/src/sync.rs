//! Reconciliation of the sidebar and marker views against the ranked set.

use std::collections::HashMap;

use dealerloc_core::DealerRecord;

use crate::error::ViewError;
use crate::render::{MarkerLayer, SidebarList};

/// A user interaction the page forwards to the sync core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A sidebar row was clicked.
    SidebarClicked(String),
    /// A map marker was clicked.
    MarkerClicked(String),
}

/// Per-id render progress. The sidebar row and the map marker flip
/// independently, each only once its renderer call succeeded, so a failure
/// in one half leaves the other half done and retryable.
#[derive(Debug, Clone, Copy)]
struct RenderState {
    lng: f64,
    lat: f64,
    row: bool,
    marker: bool,
}

impl RenderState {
    fn complete(self) -> bool {
        self.row && self.marker
    }
}

/// Keeps the sidebar list and marker set consistent with the ranked record
/// set, rendering each dealer id at most once.
///
/// Per-half state is a one-way transition: unrendered → rendered. Rendered
/// rows and markers are never removed while the instance lives, so
/// reconciliation only ever appends. The rendered map is the single source
/// of truth for "is this id on screen" — views are never inferred from
/// array membership.
pub struct ViewSync<S, M> {
    sidebar: S,
    markers: M,
    rendered: HashMap<String, RenderState>,
    active: Option<String>,
}

impl<S: SidebarList, M: MarkerLayer> ViewSync<S, M> {
    pub fn new(sidebar: S, markers: M) -> Self {
        Self {
            sidebar,
            markers,
            rendered: HashMap::new(),
            active: None,
        }
    }

    /// Brings both views into agreement with `sorted`.
    ///
    /// Every record whose id is unrendered gets a sidebar row and a marker,
    /// in the given order; already-rendered ids are skipped, so calling this
    /// twice with the same set is a no-op. The header shows `total_count` —
    /// the store's authoritative figure, which may exceed the rendered row
    /// count when only a geographic subset has been fetched.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ViewError`] from the renderers. Each half
    /// (row, marker) is marked rendered only after its call succeeded, so a
    /// retry re-runs exactly the missing halves: a marker failure never
    /// duplicates the row that already went in, and never strands a row
    /// without its marker.
    pub fn reconcile(
        &mut self,
        sorted: &[DealerRecord],
        total_count: u64,
    ) -> Result<(), ViewError> {
        self.sidebar
            .set_header_text(&format!("{total_count} Dealerships"))?;

        for record in sorted {
            let state = self
                .rendered
                .entry(record.id.clone())
                .or_insert(RenderState {
                    lng: record.longitude,
                    lat: record.latitude,
                    row: false,
                    marker: false,
                });
            if state.complete() {
                continue;
            }
            if !state.row {
                self.sidebar.append_row(record)?;
                state.row = true;
            }
            if !state.marker {
                self.markers.add_marker(record)?;
                state.marker = true;
            }
        }
        Ok(())
    }

    /// Routes a click event: either click highlights the dealer's sidebar
    /// row exclusively and flies the camera to it; a marker click also
    /// scrolls the row into view. Events for unrendered ids are ignored.
    ///
    /// # Errors
    ///
    /// Propagates [`ViewError`] from the renderers.
    pub fn handle_event(&mut self, event: &ViewEvent) -> Result<(), ViewError> {
        let (id, scroll) = match event {
            ViewEvent::SidebarClicked(id) => (id, false),
            ViewEvent::MarkerClicked(id) => (id, true),
        };
        let Some((lng, lat)) = self
            .rendered
            .get(id.as_str())
            .filter(|state| state.row)
            .map(|state| (state.lng, state.lat))
        else {
            tracing::debug!(%id, "click event for unrendered dealer, ignoring");
            return Ok(());
        };
        self.activate(id)?;
        if scroll {
            self.sidebar.scroll_into_view(id)?;
        }
        self.markers.fly_to(lng, lat);
        Ok(())
    }

    /// Makes `id` the only highlighted row: all highlights are cleared
    /// first, so at most one row is ever active.
    fn activate(&mut self, id: &str) -> Result<(), ViewError> {
        self.sidebar.clear_highlights()?;
        self.sidebar.highlight(id)?;
        self.active = Some(id.to_owned());
        Ok(())
    }

    /// Id of the currently highlighted row, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Number of dealer ids with both their row and their marker rendered.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered
            .values()
            .filter(|state| state.complete())
            .count()
    }

    /// Whether `id` has both its row and its marker on screen.
    #[must_use]
    pub fn is_rendered(&self, id: &str) -> bool {
        self.rendered
            .get(id)
            .is_some_and(|state| state.complete())
    }

    pub fn views(&self) -> (&S, &M) {
        (&self.sidebar, &self.markers)
    }
}
