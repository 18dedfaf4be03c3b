use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.cities_path,
        std::path::PathBuf::from("./config/cities.yaml")
    );
    assert_eq!(cfg.output_dir, std::path::PathBuf::from("."));
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.scraper_request_timeout_secs, 30);
    assert_eq!(cfg.scraper_user_agent, "waitwatch/0.1 (wait-time-survey)");
    assert_eq!(cfg.scraper_inter_request_delay_ms, 250);
    assert_eq!(cfg.scraper_max_retries, 3);
    assert_eq!(cfg.scraper_retry_backoff_base_secs, 5);
}

#[test]
fn build_app_config_ignores_unrecognised_variables() {
    let mut map = HashMap::new();
    map.insert("WAITWATCH_ENV", "staging");
    map.insert("WAITWATCH_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn build_app_config_paths_override() {
    let mut map = HashMap::new();
    map.insert("WAITWATCH_CITIES_PATH", "/etc/waitwatch/cities.yaml");
    map.insert("WAITWATCH_OUTPUT_DIR", "/var/lib/waitwatch");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.cities_path,
        std::path::PathBuf::from("/etc/waitwatch/cities.yaml")
    );
    assert_eq!(cfg.output_dir, std::path::PathBuf::from("/var/lib/waitwatch"));
}

#[test]
fn build_app_config_base_url_override() {
    let mut map = HashMap::new();
    map.insert("WAITWATCH_BASE_URL", "http://127.0.0.1:8080/place");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.base_url, "http://127.0.0.1:8080/place");
}

#[test]
fn build_app_config_base_url_rejects_non_http() {
    let mut map = HashMap::new();
    map.insert("WAITWATCH_BASE_URL", "ftp://example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WAITWATCH_BASE_URL"),
        "expected InvalidEnvVar(WAITWATCH_BASE_URL), got: {result:?}"
    );
}

#[test]
fn scraper_request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("WAITWATCH_SCRAPER_REQUEST_TIMEOUT_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scraper_request_timeout_secs, 60);
}

#[test]
fn scraper_request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("WAITWATCH_SCRAPER_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WAITWATCH_SCRAPER_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(WAITWATCH_SCRAPER_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn scraper_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("WAITWATCH_SCRAPER_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scraper_user_agent, "custom-agent/2.0");
}

#[test]
fn scraper_inter_request_delay_ms_invalid() {
    let mut map = HashMap::new();
    map.insert("WAITWATCH_SCRAPER_INTER_REQUEST_DELAY_MS", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WAITWATCH_SCRAPER_INTER_REQUEST_DELAY_MS"),
        "expected InvalidEnvVar(WAITWATCH_SCRAPER_INTER_REQUEST_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn scraper_max_retries_override() {
    let mut map = HashMap::new();
    map.insert("WAITWATCH_SCRAPER_MAX_RETRIES", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scraper_max_retries, 0);
}

#[test]
fn scraper_retry_backoff_base_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("WAITWATCH_SCRAPER_RETRY_BACKOFF_BASE_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WAITWATCH_SCRAPER_RETRY_BACKOFF_BASE_SECS"),
        "expected InvalidEnvVar(WAITWATCH_SCRAPER_RETRY_BACKOFF_BASE_SECS), got: {result:?}"
    );
}
