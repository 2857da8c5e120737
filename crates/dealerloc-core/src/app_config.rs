/// Runtime configuration for the dealer locator.
#[derive(Clone)]
pub struct AppConfig {
    /// Base URL of the bounding-box dealer query API.
    pub api_base: String,
    /// First page of the paginated dealer listing, for the crawl strategy.
    pub listing_url: Option<String>,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Hard cap on pages followed by the listing crawler.
    pub max_pages: usize,
    /// Delay between listing page requests, applied after the first page.
    pub inter_request_delay_ms: u64,
    pub log_level: String,
    /// Mapping SDK access token, when marker rendering is delegated to one.
    pub map_access_token: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base", &self.api_base)
            .field("listing_url", &self.listing_url)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_pages", &self.max_pages)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .field("log_level", &self.log_level)
            .field(
                "map_access_token",
                &self.map_access_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
