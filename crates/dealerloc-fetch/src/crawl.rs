//! Paginated-HTML listing crawler.
//!
//! The listing embeds dealers as `data-dealer-*` elements and chains pages
//! through a `w-pagination-next` link; the last page simply omits the link.
//! Pages are followed iteratively — an accumulating loop, not recursion —
//! so deep pagination cannot grow the call stack, and a hard page cap
//! guards against link cycles.

use std::time::Duration;

use reqwest::Client;

use dealerloc_core::DealerRecord;

use crate::error::FetchError;
use crate::normalize::record_from_element;
use crate::parse::{extract_dealer_elements, extract_next_page_href, resolve_next_url};

pub struct ListingCrawler {
    client: Client,
    max_pages: usize,
    inter_request_delay: Duration,
}

impl ListingCrawler {
    /// Creates a crawler with configured timeout, `User-Agent`, page cap,
    /// and inter-page delay (0 disables it).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_pages: usize,
        inter_request_delay_ms: u64,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_pages,
            inter_request_delay: Duration::from_millis(inter_request_delay_ms),
        })
    }

    /// Fetches every page of the listing starting at `listing_url` and
    /// returns all dealers found, in page order.
    ///
    /// Elements that fail normalization (missing id or name, non-numeric
    /// coordinates) are skipped individually with a warning; the rest of
    /// the page is kept.
    ///
    /// # Errors
    ///
    /// - [`FetchError::PaginationLimit`] — more than `max_pages` pages.
    /// - [`FetchError::NotFound`] / [`FetchError::UnexpectedStatus`] /
    ///   [`FetchError::Http`] — a page could not be fetched.
    pub async fn crawl(&self, listing_url: &str) -> Result<Vec<DealerRecord>, FetchError> {
        let mut records = Vec::new();
        let mut next = Some(listing_url.to_owned());
        let mut page_count = 0usize;

        while let Some(url) = next.take() {
            page_count += 1;
            if page_count > self.max_pages {
                return Err(FetchError::PaginationLimit {
                    listing_url: listing_url.to_owned(),
                    max_pages: self.max_pages,
                });
            }

            if page_count > 1 && !self.inter_request_delay.is_zero() {
                tokio::time::sleep(self.inter_request_delay).await;
            }

            let html = self.fetch_page(&url).await?;
            let elements = extract_dealer_elements(&html);
            tracing::debug!(%url, page = page_count, elements = elements.len(), "crawled listing page");

            for element in elements {
                match record_from_element(element) {
                    Ok(record) => records.push(record),
                    Err(err) => {
                        tracing::warn!(%url, error = %err, "skipping malformed dealer element");
                    }
                }
            }

            next = match extract_next_page_href(&html) {
                Some(href) => {
                    let resolved = resolve_next_url(&url, &href);
                    if resolved.is_none() {
                        tracing::warn!(%url, %href, "next-page link did not resolve, stopping crawl early");
                    }
                    resolved
                }
                None => None,
            };
        }

        Ok(records)
    }

    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}
