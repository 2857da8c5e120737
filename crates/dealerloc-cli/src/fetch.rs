//! `dealerloc fetch` — one bounding-box round through the engine.

use dealerloc_core::{AppConfig, BoundingBox, Origin};
use dealerloc_fetch::{DealerApiClient, LocationFetcher};
use dealerloc_sync::LocatorEngine;

use crate::render::{TermMarkers, TermSidebar};

pub(crate) async fn run(
    config: &AppConfig,
    bbox: BoundingBox,
    origin: Option<Origin>,
) -> anyhow::Result<()> {
    let api = DealerApiClient::new(
        &config.api_base,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let mut engine = LocatorEngine::new(
        LocationFetcher::bounding_box(api),
        TermSidebar::default(),
        TermMarkers::new(config.map_access_token.as_deref()),
    );

    engine.geolocated(origin);
    engine.viewport_changed(bbox).await;

    println!(
        "{} dealer(s) rendered, {} known to the provider",
        engine.view().rendered_count(),
        engine.store().total_count()
    );
    Ok(())
}
