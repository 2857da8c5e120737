pub mod client;
pub mod crawl;
pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod parse;
pub mod types;

pub use client::DealerApiClient;
pub use crawl::ListingCrawler;
pub use error::FetchError;
pub use fetcher::{CoverageOutcome, FetchStrategy, LocationFetcher};
pub use types::{DealerPayload, DealersMetadata, DealersResponse};
