//! Dealer location domain types.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One physical dealer location.
///
/// `id` is the dedup key: globally unique and stable across fetches, so
/// re-fetching a known dealer never creates a second store entry, sidebar
/// row, or map marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealerRecord {
    pub id: String,
    pub name: String,
    /// Degrees, within ±90 for records accepted by the store.
    pub latitude: f64,
    /// Degrees, within ±180 for records accepted by the store.
    pub longitude: f64,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub open_hours: Option<String>,
    pub diversity: Option<String>,
    pub website: Option<String>,
    /// Miles from the last ranking origin. Recomputed on every rank and
    /// never persisted.
    #[serde(skip)]
    pub distance: Option<f64>,
}

impl DealerRecord {
    /// Checks that the record's coordinates are finite and within
    /// geographic range.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinates`] when either coordinate is
    /// non-finite or outside ±90 latitude / ±180 longitude.
    pub fn validate_coordinates(&self) -> Result<(), CoreError> {
        let lat_ok = self.latitude.is_finite() && self.latitude.abs() <= 90.0;
        let lng_ok = self.longitude.is_finite() && self.longitude.abs() <= 180.0;
        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(CoreError::InvalidCoordinates {
                id: self.id.clone(),
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}
