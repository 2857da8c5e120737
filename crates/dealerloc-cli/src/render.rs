//! Terminal implementations of the rendering seams.

use dealerloc_core::DealerRecord;
use dealerloc_sync::{MarkerLayer, SidebarList, ViewError};

/// Prints sidebar rows to stdout as they are rendered.
#[derive(Default)]
pub(crate) struct TermSidebar;

impl SidebarList for TermSidebar {
    fn append_row(&mut self, record: &DealerRecord) -> Result<(), ViewError> {
        match record.distance {
            Some(d) => println!("{d:>8.1} mi  {}", record.name),
            None => println!("         -  {}", record.name),
        }
        if let Some(address) = &record.address {
            let mut line = address.replace("<br>", ", ");
            if let (Some(city), Some(state)) = (&record.city, &record.state) {
                line.push_str(&format!(", {city}, {state}"));
                if let Some(postal_code) = &record.postal_code {
                    line.push_str(&format!(" {postal_code}"));
                }
            }
            println!("             {line}");
        }
        if let Some(phone) = &record.phone {
            println!("             {phone}");
        }
        if let Some(open_hours) = &record.open_hours {
            println!("             {}", open_hours.replace("<br>", "; "));
        }
        Ok(())
    }

    fn set_header_text(&mut self, text: &str) -> Result<(), ViewError> {
        println!("== {text} ==");
        Ok(())
    }

    fn highlight(&mut self, _id: &str) -> Result<(), ViewError> {
        Ok(())
    }

    fn clear_highlights(&mut self) -> Result<(), ViewError> {
        Ok(())
    }

    fn scroll_into_view(&mut self, _id: &str) -> Result<(), ViewError> {
        Ok(())
    }
}

/// Marker placement is a no-op in the terminal; camera moves are logged.
pub(crate) struct TermMarkers;

impl TermMarkers {
    /// A real marker layer would hand the access token to the mapping SDK;
    /// the terminal one only reports whether it is configured.
    pub(crate) fn new(map_access_token: Option<&str>) -> Self {
        tracing::debug!(
            token_configured = map_access_token.is_some(),
            "marker layer started"
        );
        Self
    }
}

impl MarkerLayer for TermMarkers {
    fn add_marker(&mut self, record: &DealerRecord) -> Result<(), ViewError> {
        tracing::debug!(id = %record.id, lat = record.latitude, lng = record.longitude, "marker placed");
        Ok(())
    }

    fn fly_to(&mut self, lng: f64, lat: f64) {
        tracing::debug!(lng, lat, "camera move");
    }
}
