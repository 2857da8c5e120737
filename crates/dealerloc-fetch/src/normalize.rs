//! Normalization from provider shapes to [`dealerloc_core::DealerRecord`].
//!
//! Both fetch strategies funnel through here so the store only ever sees
//! one record shape, whichever provider produced it.

use dealerloc_core::DealerRecord;

use crate::error::FetchError;
use crate::parse::RawDealerElement;
use crate::types::DealerPayload;

/// Rewrites embedded literal `\n` escape sequences (the two characters
/// backslash-n, as CMS exports encode line breaks) into the `<br>` form the
/// rendered sidebar HTML uses.
#[must_use]
pub fn escape_newlines(value: &str) -> String {
    value.replace("\\n", "<br>")
}

/// Empty and whitespace-only strings become absent; surviving text gets its
/// newline escapes rewritten.
fn clean(value: Option<String>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(|s| escape_newlines(&s))
}

/// Maps a bounding-box API payload to the canonical record shape.
///
/// # Errors
///
/// Returns [`FetchError::Normalization`] when the id or name is empty.
/// Coordinate range checks happen at store entry, not here.
pub fn record_from_payload(payload: DealerPayload) -> Result<DealerRecord, FetchError> {
    if payload.id.trim().is_empty() {
        return Err(FetchError::Normalization {
            id: "<missing>".to_owned(),
            reason: "empty id".to_owned(),
        });
    }
    if payload.dealer_name.trim().is_empty() {
        return Err(FetchError::Normalization {
            id: payload.id,
            reason: "empty dealer_name".to_owned(),
        });
    }
    Ok(DealerRecord {
        id: payload.id,
        name: escape_newlines(&payload.dealer_name),
        latitude: payload.latitude,
        longitude: payload.longitude,
        description: clean(payload.description),
        address: clean(payload.address),
        city: clean(payload.city),
        state: clean(payload.state),
        postal_code: clean(payload.postal_code),
        phone: clean(payload.phone),
        open_hours: clean(payload.open_hours),
        diversity: clean(payload.diversity),
        website: clean(payload.website),
        distance: None,
    })
}

/// Maps a parsed listing element to the canonical record shape.
///
/// # Errors
///
/// Returns [`FetchError::Normalization`] when the id, name, or either
/// coordinate attribute is missing or non-numeric.
pub fn record_from_element(element: RawDealerElement) -> Result<DealerRecord, FetchError> {
    let id = element
        .id
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| FetchError::Normalization {
            id: "<missing>".to_owned(),
            reason: "missing data-dealer-id".to_owned(),
        })?;
    let name = element
        .name
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| FetchError::Normalization {
            id: id.clone(),
            reason: "missing data-dealer-name".to_owned(),
        })?;
    let latitude = parse_coordinate(element.lat.as_deref(), "lat", &id)?;
    let longitude = parse_coordinate(element.lon.as_deref(), "lon", &id)?;

    Ok(DealerRecord {
        id,
        name: escape_newlines(&name),
        latitude,
        longitude,
        description: clean(element.description),
        address: clean(element.address),
        city: clean(element.city),
        state: clean(element.state),
        postal_code: clean(element.postal_code),
        phone: clean(element.phone),
        open_hours: clean(element.hours),
        diversity: clean(element.diversity),
        website: clean(element.website),
        distance: None,
    })
}

fn parse_coordinate(raw: Option<&str>, attr: &str, id: &str) -> Result<f64, FetchError> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or_else(|| FetchError::Normalization {
            id: id.to_owned(),
            reason: format!("missing or non-numeric data-dealer-{attr}"),
        })
}
