use crate::app_config::AppConfig;
use crate::error::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let api_base = require("DEALERLOC_API_BASE")?;
    let listing_url = lookup("DEALERLOC_LISTING_URL").ok();
    let user_agent = or_default("DEALERLOC_USER_AGENT", "dealerloc/0.1 (dealer-locator)");
    let request_timeout_secs = parse_u64("DEALERLOC_REQUEST_TIMEOUT_SECS", "30")?;
    let max_pages = parse_usize("DEALERLOC_MAX_PAGES", "50")?;
    let inter_request_delay_ms = parse_u64("DEALERLOC_INTER_REQUEST_DELAY_MS", "0")?;
    let log_level = or_default("DEALERLOC_LOG_LEVEL", "info");
    let map_access_token = lookup("DEALERLOC_MAP_ACCESS_TOKEN").ok();

    Ok(AppConfig {
        api_base,
        listing_url,
        user_agent,
        request_timeout_secs,
        max_pages,
        inter_request_delay_ms,
        log_level,
        map_access_token,
    })
}
