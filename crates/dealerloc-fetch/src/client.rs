//! HTTP client for the bounding-box dealer query API.

use std::time::Duration;

use reqwest::Client;

use dealerloc_core::BoundingBox;

use crate::error::FetchError;
use crate::types::DealersResponse;

/// Client for `GET {base}/dealers` parameterized by a bounding box.
///
/// Non-2xx responses surface as typed errors so callers can distinguish
/// "endpoint gone" from transient failures. The client itself never
/// retries: a failed round is treated as "no new data" by the fetcher.
#[derive(Debug)]
pub struct DealerApiClient {
    client: Client,
    base_url: String,
}

impl DealerApiClient {
    /// Creates a client with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] when `base_url` does not parse
    /// as an absolute URL, or [`FetchError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        if let Err(err) = reqwest::Url::parse(base_url) {
            return Err(FetchError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: err.to_string(),
            });
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches every dealer the provider reports inside `bbox`, plus the
    /// authoritative total count.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] — HTTP 404.
    /// - [`FetchError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`FetchError::Http`] — network or TLS failure.
    /// - [`FetchError::Deserialize`] — response body is not the expected
    ///   JSON shape.
    pub async fn fetch_dealers_in(
        &self,
        bbox: &BoundingBox,
    ) -> Result<DealersResponse, FetchError> {
        let url = self.dealers_url(bbox)?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<DealersResponse>(&body).map_err(|e| FetchError::Deserialize {
            context: format!("dealers response from {url}"),
            source: e,
        })
    }

    /// Builds the `/dealers` URL with the box's four edges as query
    /// parameters.
    fn dealers_url(&self, bbox: &BoundingBox) -> Result<reqwest::Url, FetchError> {
        let raw = format!("{}/dealers", self.base_url);
        let mut url = reqwest::Url::parse(&raw).map_err(|err| FetchError::InvalidBaseUrl {
            url: raw.clone(),
            reason: err.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("min_latitude", &bbox.min_lat.to_string())
            .append_pair("max_latitude", &bbox.max_lat.to_string())
            .append_pair("min_longitude", &bbox.min_lng.to_string())
            .append_pair("max_longitude", &bbox.max_lng.to_string());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn bbox() -> BoundingBox {
        BoundingBox::new(-100.0, 30.0, -90.0, 40.0).unwrap()
    }

    fn client_for(server: &MockServer) -> DealerApiClient {
        DealerApiClient::new(&server.uri(), 5, "dealerloc-test/0.1").unwrap()
    }

    #[test]
    fn new_rejects_relative_base_url() {
        let err = DealerApiClient::new("not-a-url", 5, "ua").unwrap_err();
        assert!(matches!(err, FetchError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn dealers_url_carries_all_four_edges() {
        let client = DealerApiClient::new("https://api.example.com", 5, "ua").unwrap();
        let url = client.dealers_url(&bbox()).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("min_latitude=30"));
        assert!(query.contains("max_latitude=40"));
        assert!(query.contains("min_longitude=-100"));
        assert!(query.contains("max_longitude=-90"));
    }

    #[tokio::test]
    async fn fetch_parses_dealers_and_total() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dealers"))
            .and(query_param("min_latitude", "30"))
            .and(query_param("max_longitude", "-90"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "dealers": [{
                    "id": "d-1",
                    "dealer_name": "Acme Water",
                    "latitude": 39.1,
                    "longitude": -94.58
                }],
                "metadata": { "total_dealers": 12 }
            })))
            .mount(&server)
            .await;

        let response = client_for(&server).fetch_dealers_in(&bbox()).await.unwrap();
        assert_eq!(response.dealers.len(), 1);
        assert_eq!(response.metadata.total_dealers, 12);
    }

    #[tokio::test]
    async fn fetch_maps_404_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dealers"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_dealers_in(&bbox()).await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
    }

    #[tokio::test]
    async fn fetch_maps_other_status_to_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dealers"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_dealers_in(&bbox()).await.unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn fetch_reports_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dealers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_dealers_in(&bbox()).await.unwrap_err();
        assert!(matches!(err, FetchError::Deserialize { .. }));
    }
}
