//! Collection command handlers for the CLI.
//!
//! Per-city fetch or extraction failures are logged and skipped rather than
//! propagated, so one unreachable or redesigned page does not abort the run.
//! A malformed wait label found while flattening does abort it.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDateTime;
use waitwatch_core::{AppConfig, CitiesFile, CityConfig};
use waitwatch_scraper::{CityWaitRecord, WaitTimeClient};

/// Pick the cities for a collect run: all of them, or the one matching
/// `city_filter`.
pub(crate) fn select_cities<'a>(
    cities: &'a CitiesFile,
    city_filter: Option<&str>,
) -> anyhow::Result<Vec<&'a CityConfig>> {
    match city_filter {
        Some(query) => {
            let city = cities
                .find(query)
                .ok_or_else(|| anyhow::anyhow!("city '{query}' is not configured"))?;
            Ok(vec![city])
        }
        None => Ok(cities.cities.iter().collect()),
    }
}

/// Fetch and extract each city in order, waiting `inter_request_delay_ms`
/// between requests. Cities that fail are logged and left out.
pub(crate) async fn collect_records(
    client: &WaitTimeClient,
    cities: &[&CityConfig],
    base_url: &str,
    inter_request_delay_ms: u64,
    run_time: &NaiveDateTime,
) -> Vec<CityWaitRecord> {
    let run_label = run_time.format("%Y-%m-%d %H:%M").to_string();
    let mut records = Vec::with_capacity(cities.len());

    for (index, city) in cities.iter().enumerate() {
        if index > 0 && inter_request_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
        }

        let url = city.page_url(base_url);
        tracing::info!(
            city = city.display_name(),
            as_of = %run_label,
            "pulling wait times"
        );

        match client.fetch_city_waits(&url).await {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(
                    city = city.display_name(),
                    url = %url,
                    error = %e,
                    "skipping city; no wait-time data"
                );
            }
        }
    }

    records
}

/// Run a full collection: fetch, flatten, and write the CSV export.
///
/// When `dry_run` is `true` the function prints the pages that would be
/// fetched and returns without making requests.
///
/// # Errors
///
/// Returns an error if the city list cannot be loaded, the city filter
/// matches nothing, the client cannot be built, a wait label is malformed,
/// or the export cannot be written.
pub(crate) async fn run_collect(
    config: &AppConfig,
    city_filter: Option<&str>,
    output_dir: Option<PathBuf>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let cities_file = waitwatch_core::load_cities(&config.cities_path)?;
    let cities = select_cities(&cities_file, city_filter)?;

    if dry_run {
        println!("dry-run: would collect wait times for {} cities:", cities.len());
        for city in &cities {
            println!("  {}  {}", city.display_name(), city.page_url(&config.base_url));
        }
        return Ok(());
    }

    let client = WaitTimeClient::new(
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
        config.scraper_max_retries,
        config.scraper_retry_backoff_base_secs,
    )
    .context("failed to build wait-time client")?;

    let run_time = chrono::Local::now().naive_local();
    let records = collect_records(
        &client,
        &cities,
        &config.base_url,
        config.scraper_inter_request_delay_ms,
        &run_time,
    )
    .await;

    tracing::info!(
        cities_with_data = records.len(),
        cities_requested = cities.len(),
        "finished pulling city data"
    );

    let rows = waitwatch_scraper::flatten_records(&records)?;
    let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
    let path = waitwatch_scraper::write_wait_rows_to_dir(&output_dir, &run_time, &rows)?;

    println!(
        "collected {} store wait times across {} of {} cities -> {}",
        rows.len(),
        records.len(),
        cities.len(),
        path.display()
    );

    Ok(())
}

/// Print every configured city with its slug and page URL.
///
/// # Errors
///
/// Returns an error if the city list cannot be loaded.
pub(crate) fn run_list_cities(config: &AppConfig) -> anyhow::Result<()> {
    let cities_file = waitwatch_core::load_cities(&config.cities_path)?;
    for city in &cities_file.cities {
        println!(
            "{}\t{}\t{}",
            city.display_name(),
            city.slug(),
            city.page_url(&config.base_url)
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
