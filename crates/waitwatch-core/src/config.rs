use crate::app_config::AppConfig;
use crate::ConfigError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://www.isitpacked.com/place";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("WAITWATCH_LOG_LEVEL", "info");
    let cities_path = PathBuf::from(or_default("WAITWATCH_CITIES_PATH", "./config/cities.yaml"));
    let output_dir = PathBuf::from(or_default("WAITWATCH_OUTPUT_DIR", "."));

    let base_url = or_default("WAITWATCH_BASE_URL", DEFAULT_BASE_URL);
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "WAITWATCH_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{base_url}'"),
        });
    }

    let scraper_request_timeout_secs =
        parse_u64("WAITWATCH_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = or_default(
        "WAITWATCH_SCRAPER_USER_AGENT",
        "waitwatch/0.1 (wait-time-survey)",
    );
    let scraper_inter_request_delay_ms =
        parse_u64("WAITWATCH_SCRAPER_INTER_REQUEST_DELAY_MS", "250")?;
    let scraper_max_retries = parse_u32("WAITWATCH_SCRAPER_MAX_RETRIES", "3")?;
    let scraper_retry_backoff_base_secs =
        parse_u64("WAITWATCH_SCRAPER_RETRY_BACKOFF_BASE_SECS", "5")?;

    Ok(AppConfig {
        log_level,
        cities_path,
        output_dir,
        base_url,
        scraper_request_timeout_secs,
        scraper_user_agent,
        scraper_inter_request_delay_ms,
        scraper_max_retries,
        scraper_retry_backoff_base_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
