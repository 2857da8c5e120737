//! Rendering seams between the sync core and whatever actually draws.
//!
//! The consuming page implements these against its widget toolkit and
//! mapping SDK; the CLI implements them against a terminal; tests use
//! in-memory fakes. The core only ever talks to the traits.

use dealerloc_core::DealerRecord;

use crate::error::ViewError;

/// The sidebar list of dealer rows plus its header.
pub trait SidebarList {
    /// Appends one row for `record`. Called at most once per dealer id.
    ///
    /// # Errors
    ///
    /// [`ViewError::MissingAnchor`] when the sidebar container is absent.
    fn append_row(&mut self, record: &DealerRecord) -> Result<(), ViewError>;

    /// Replaces the header text (e.g. `"57 Dealerships"`).
    ///
    /// # Errors
    ///
    /// [`ViewError::MissingAnchor`] when the header element is absent.
    fn set_header_text(&mut self, text: &str) -> Result<(), ViewError>;

    /// Marks the row for `id` as the active one.
    ///
    /// # Errors
    ///
    /// [`ViewError::Render`] when the row cannot be updated.
    fn highlight(&mut self, id: &str) -> Result<(), ViewError>;

    /// Removes the active mark from every row.
    ///
    /// # Errors
    ///
    /// [`ViewError::Render`] when rows cannot be updated.
    fn clear_highlights(&mut self) -> Result<(), ViewError>;

    /// Scrolls the row for `id` into the visible part of the list.
    ///
    /// # Errors
    ///
    /// [`ViewError::Render`] when the row cannot be scrolled to.
    fn scroll_into_view(&mut self, id: &str) -> Result<(), ViewError>;
}

/// The map marker set and camera.
pub trait MarkerLayer {
    /// Places one marker for `record`. Called at most once per dealer id.
    ///
    /// # Errors
    ///
    /// [`ViewError::MissingAnchor`] when the map container is absent.
    fn add_marker(&mut self, record: &DealerRecord) -> Result<(), ViewError>;

    /// Moves the map camera to the given coordinates.
    fn fly_to(&mut self, lng: f64, lat: f64);
}
