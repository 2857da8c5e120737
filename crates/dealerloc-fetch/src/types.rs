//! Wire types for the bounding-box dealer query API.
//!
//! ## Observed response shape
//!
//! `GET /dealers?min_latitude=&max_latitude=&min_longitude=&max_longitude=`
//! returns:
//!
//! ```text
//! {
//!   "dealers": [ { "id": "...", "slug": "...", "dealer_name": "...", ... } ],
//!   "metadata": { "total_dealers": 57 }
//! }
//! ```
//!
//! ### Display fields
//! Everything except `id`, `dealer_name`, and the coordinates is nullable.
//! Some deployments send `""` instead of `null` for absent text fields;
//! normalization treats empty strings as absent.
//!
//! ### Newlines
//! Free-text fields (`address`, `open_hours`, `diversity`) may embed the
//! literal two-character sequence `\n`. The rendered sidebar HTML uses
//! `<br>` line breaks, so normalization rewrites the escape sequence.
//!
//! ### `total_dealers`
//! Authoritative count of all dealers known to the provider, not just the
//! ones inside the queried box. The sidebar header displays this number.

use serde::Deserialize;

/// Top-level response from `GET /dealers`.
#[derive(Debug, Deserialize)]
pub struct DealersResponse {
    #[serde(default)]
    pub dealers: Vec<DealerPayload>,
    pub metadata: DealersMetadata,
}

#[derive(Debug, Deserialize)]
pub struct DealersMetadata {
    pub total_dealers: u64,
}

/// A single dealer as the provider sends it.
#[derive(Debug, Deserialize)]
pub struct DealerPayload {
    pub id: String,
    /// URL slug; carried by the API but unused by the locator.
    #[serde(default)]
    pub slug: Option<String>,
    pub dealer_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub open_hours: Option<String>,
    #[serde(default)]
    pub diversity: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}
