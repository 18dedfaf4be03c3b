use std::path::PathBuf;

/// Runtime settings for a wait-time collection run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// YAML file listing the city pages to visit.
    pub cities_path: PathBuf,
    /// Directory the CSV export is written into.
    pub output_dir: PathBuf,
    /// Base URL that city slugs are appended to.
    pub base_url: String,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    pub scraper_inter_request_delay_ms: u64,
    pub scraper_max_retries: u32,
    pub scraper_retry_backoff_base_secs: u64,
}
