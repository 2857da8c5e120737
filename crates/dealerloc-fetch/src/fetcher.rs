//! Coverage-aware fetching: consult the store before touching the network.

use dealerloc_core::{BoundingBox, LocationStore, MergeOutcome};

use crate::client::DealerApiClient;
use crate::crawl::ListingCrawler;
use crate::error::FetchError;
use crate::normalize::record_from_payload;

/// How dealers are obtained for a viewport.
pub enum FetchStrategy {
    /// Query the bounding-box dealer API for the requested viewport.
    BoundingBox(DealerApiClient),
    /// Crawl the full paginated listing; one crawl covers every viewport.
    Listing {
        crawler: ListingCrawler,
        listing_url: String,
    },
}

/// What an [`LocationFetcher::ensure_coverage`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageOutcome {
    /// The requested box was already inside the store's covered envelope;
    /// no network I/O happened.
    AlreadyCovered,
    /// A fetch ran and its records were merged into the store.
    Fetched(MergeOutcome),
}

/// Resolves "what dealers are in this viewport" with as few network calls
/// as the coverage envelope allows.
///
/// Safe to invoke repeatedly in quick succession (rapid map drags):
/// overlapping in-flight requests may fetch redundantly, but each completed
/// fetch merges exactly once and merging is commutative and idempotent, so
/// out-of-order completion cannot corrupt the store. Stale in-flight
/// fetches are never cancelled; a superseded fetch completes and merges
/// harmlessly.
pub struct LocationFetcher {
    strategy: FetchStrategy,
}

impl LocationFetcher {
    #[must_use]
    pub fn new(strategy: FetchStrategy) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub fn bounding_box(api: DealerApiClient) -> Self {
        Self::new(FetchStrategy::BoundingBox(api))
    }

    #[must_use]
    pub fn listing(crawler: ListingCrawler, listing_url: impl Into<String>) -> Self {
        Self::new(FetchStrategy::Listing {
            crawler,
            listing_url: listing_url.into(),
        })
    }

    /// Makes sure the store covers `bbox`, fetching and merging when it does
    /// not.
    ///
    /// On success the store's coverage envelope contains `bbox`. On failure
    /// the store is untouched — the caller keeps its last-known-good data.
    ///
    /// # Errors
    ///
    /// Propagates [`FetchError`] from the underlying strategy. The store is
    /// only mutated after a fully successful fetch.
    pub async fn ensure_coverage(
        &self,
        bbox: &BoundingBox,
        store: &mut LocationStore,
    ) -> Result<CoverageOutcome, FetchError> {
        if store.is_covered(bbox) {
            tracing::debug!(?bbox, "viewport already covered, skipping fetch");
            return Ok(CoverageOutcome::AlreadyCovered);
        }

        let outcome = match &self.strategy {
            FetchStrategy::BoundingBox(api) => {
                let response = api.fetch_dealers_in(bbox).await?;
                let reported_total = response.metadata.total_dealers;
                let records: Vec<_> = response
                    .dealers
                    .into_iter()
                    .filter_map(|payload| match record_from_payload(payload) {
                        Ok(record) => Some(record),
                        Err(err) => {
                            tracing::warn!(error = %err, "dropping malformed dealer payload");
                            None
                        }
                    })
                    .collect();
                store.merge(records, *bbox, reported_total)
            }
            FetchStrategy::Listing {
                crawler,
                listing_url,
            } => {
                let records = crawler.crawl(listing_url).await?;
                // The listing has no metadata block; the accumulated count
                // is the authoritative total for this strategy.
                let reported_total = records.len() as u64;
                store.merge(records, BoundingBox::world(), reported_total)
            }
        };

        if outcome.rejected > 0 {
            tracing::warn!(
                rejected = outcome.rejected,
                "dropped dealers with out-of-range coordinates"
            );
        }
        tracing::debug!(
            inserted = outcome.inserted,
            duplicate = outcome.duplicate,
            total = store.total_count(),
            "merged dealer fetch"
        );
        Ok(CoverageOutcome::Fetched(outcome))
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn bbox(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> BoundingBox {
        BoundingBox::new(min_lng, min_lat, max_lng, max_lat).unwrap()
    }

    fn dealers_body(ids: &[&str], total: u64) -> serde_json::Value {
        let dealers: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "dealer_name": format!("Dealer {id}"),
                    "latitude": 35.0,
                    "longitude": -95.0
                })
            })
            .collect();
        serde_json::json!({ "dealers": dealers, "metadata": { "total_dealers": total } })
    }

    fn fetcher_for(server: &MockServer) -> LocationFetcher {
        let api = DealerApiClient::new(&server.uri(), 5, "dealerloc-test/0.1").unwrap();
        LocationFetcher::bounding_box(api)
    }

    #[tokio::test]
    async fn covered_viewport_issues_no_request() {
        let server = MockServer::start().await;
        // Any request against the server would violate the expectation.
        Mock::given(method("GET"))
            .and(path("/dealers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(dealers_body(&[], 0)))
            .expect(0)
            .mount(&server)
            .await;

        let mut store = LocationStore::new();
        store.merge(Vec::new(), bbox(-100.0, 30.0, -90.0, 40.0), 0);

        let fetcher = fetcher_for(&server);
        let outcome = fetcher
            .ensure_coverage(&bbox(-98.0, 32.0, -95.0, 35.0), &mut store)
            .await
            .unwrap();
        assert_eq!(outcome, CoverageOutcome::AlreadyCovered);
    }

    #[tokio::test]
    async fn uncovered_viewport_fetches_and_merges() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dealers"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(dealers_body(&["a", "b"], 42)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut store = LocationStore::new();
        let request = bbox(-100.0, 30.0, -90.0, 40.0);
        let fetcher = fetcher_for(&server);
        let outcome = fetcher.ensure_coverage(&request, &mut store).await.unwrap();

        assert!(matches!(
            outcome,
            CoverageOutcome::Fetched(MergeOutcome { inserted: 2, .. })
        ));
        assert_eq!(store.len(), 2);
        assert_eq!(store.total_count(), 42);
        assert!(store.is_covered(&request));
    }

    #[tokio::test]
    async fn repeat_fetch_is_idempotent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dealers"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(dealers_body(&["a", "b"], 2)),
            )
            .mount(&server)
            .await;

        let mut store = LocationStore::new();
        let fetcher = fetcher_for(&server);
        // Two different uncovered boxes returning overlapping ids.
        fetcher
            .ensure_coverage(&bbox(-100.0, 30.0, -95.0, 35.0), &mut store)
            .await
            .unwrap();
        fetcher
            .ensure_coverage(&bbox(-110.0, 30.0, -105.0, 35.0), &mut store)
            .await
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_store_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dealers"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut store = LocationStore::new();
        store.merge(Vec::new(), bbox(-80.0, 20.0, -75.0, 25.0), 9);
        let before_covered = store.covered().unwrap();

        let fetcher = fetcher_for(&server);
        let err = fetcher
            .ensure_coverage(&bbox(-100.0, 30.0, -90.0, 40.0), &mut store)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedStatus { .. }));
        assert_eq!(store.covered().unwrap(), before_covered);
        assert_eq!(store.total_count(), 9);
    }

    #[tokio::test]
    async fn listing_strategy_covers_the_world() {
        let server = MockServer::start().await;
        let page = r#"<div data-dealer-id="d-1" data-dealer-name="One" data-dealer-lat="39.0" data-dealer-lon="-94.0"></div>"#;
        Mock::given(method("GET"))
            .and(path("/listing"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page))
            .expect(1)
            .mount(&server)
            .await;

        let crawler = ListingCrawler::new(5, "dealerloc-test/0.1", 10, 0).unwrap();
        let fetcher = LocationFetcher::listing(crawler, format!("{}/listing", server.uri()));

        let mut store = LocationStore::new();
        fetcher
            .ensure_coverage(&bbox(-100.0, 30.0, -90.0, 40.0), &mut store)
            .await
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.total_count(), 1);
        // After a full crawl any other viewport is covered: no second crawl.
        let outcome = fetcher
            .ensure_coverage(&bbox(0.0, 0.0, 10.0, 10.0), &mut store)
            .await
            .unwrap();
        assert_eq!(outcome, CoverageOutcome::AlreadyCovered);
    }
}
