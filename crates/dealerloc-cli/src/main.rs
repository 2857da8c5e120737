mod crawl;
mod fetch;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dealerloc_core::{BoundingBox, Origin};

#[derive(Debug, Parser)]
#[command(name = "dealerloc")]
#[command(about = "Dealer locator data-sync and view-sync CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch dealers inside a bounding box and print the ranked sidebar.
    Fetch {
        #[arg(long, allow_hyphen_values = true)]
        min_lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        max_lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        min_lng: f64,
        #[arg(long, allow_hyphen_values = true)]
        max_lng: f64,
        /// Ranking origin as "LNG,LAT". Without it, dealers print unranked.
        #[arg(long, allow_hyphen_values = true)]
        origin: Option<String>,
    },
    /// Crawl a paginated dealer listing and print the ranked sidebar.
    Crawl {
        /// Listing URL; defaults to DEALERLOC_LISTING_URL.
        url: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        origin: Option<String>,
    },
}

/// Log filter: explicit `RUST_LOG` directives win, otherwise the configured
/// level applies to everything.
fn log_filter(rust_log: Option<String>, fallback: &str) -> EnvFilter {
    rust_log.map_or_else(|| EnvFilter::new(fallback), EnvFilter::new)
}

/// Parses a `"LNG,LAT"` argument into an [`Origin`].
fn parse_origin(raw: &str) -> anyhow::Result<Origin> {
    let (lng, lat) = raw
        .split_once(',')
        .ok_or_else(|| anyhow::anyhow!("origin must be \"LNG,LAT\", got \"{raw}\""))?;
    let lng: f64 = lng.trim().parse()?;
    let lat: f64 = lat.trim().parse()?;
    Ok(Origin::new(lng, lat)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = dealerloc_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok(), &config.log_level))
        .init();

    match cli.command {
        Commands::Fetch {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
            origin,
        } => {
            let bbox = BoundingBox::new(min_lng, min_lat, max_lng, max_lat)?;
            let origin = origin.as_deref().map(parse_origin).transpose()?;
            fetch::run(&config, bbox, origin).await
        }
        Commands::Crawl { url, origin } => {
            let origin = origin.as_deref().map(parse_origin).transpose()?;
            crawl::run(&config, url, origin).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_prefers_rust_log_directives() {
        let filter = log_filter(Some("warn".to_owned()), "debug");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn log_filter_falls_back_to_configured_level() {
        let filter = log_filter(None, "debug");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn parse_origin_accepts_lng_lat() {
        let origin = parse_origin("-94.58, 39.1").unwrap();
        assert_eq!(origin.lng, -94.58);
        assert_eq!(origin.lat, 39.1);
    }

    #[test]
    fn parse_origin_rejects_missing_comma() {
        assert!(parse_origin("-94.58 39.1").is_err());
    }

    #[test]
    fn parse_origin_rejects_out_of_range() {
        assert!(parse_origin("-194.58,39.1").is_err());
    }
}
