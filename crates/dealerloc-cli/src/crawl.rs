//! `dealerloc crawl` — full paginated-listing crawl through the engine.

use dealerloc_core::{AppConfig, BoundingBox, Origin};
use dealerloc_fetch::{ListingCrawler, LocationFetcher};
use dealerloc_sync::LocatorEngine;

use crate::render::{TermMarkers, TermSidebar};

pub(crate) async fn run(
    config: &AppConfig,
    url: Option<String>,
    origin: Option<Origin>,
) -> anyhow::Result<()> {
    let listing_url = url
        .or_else(|| config.listing_url.clone())
        .ok_or_else(|| anyhow::anyhow!("no listing URL given and DEALERLOC_LISTING_URL unset"))?;

    let crawler = ListingCrawler::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_pages,
        config.inter_request_delay_ms,
    )?;
    let mut engine = LocatorEngine::new(
        LocationFetcher::listing(crawler, listing_url),
        TermSidebar::default(),
        TermMarkers::new(config.map_access_token.as_deref()),
    );

    engine.geolocated(origin);
    // A listing crawl covers every viewport; the box here just kicks off
    // the initial round.
    engine.viewport_changed(BoundingBox::world()).await;

    println!(
        "{} dealer(s) rendered from the listing",
        engine.view().rendered_count()
    );
    Ok(())
}
