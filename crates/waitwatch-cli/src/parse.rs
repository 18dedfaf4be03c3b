//! Offline extraction from a saved city page.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// Extract and flatten a saved city page, printing CSV rows (or the raw
/// record as JSON) to stdout.
///
/// Needs no app config, so it works whatever the environment holds.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the page layout is not
/// recognised, or a wait label is malformed.
pub(crate) fn run_parse(path: &Path, json: bool) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    write_parsed_page(path, json, stdout.lock())
}

fn write_parsed_page<W: Write>(path: &Path, json: bool, mut out: W) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let record = waitwatch_scraper::parse_city_page(&html)
        .with_context(|| format!("unrecognised page layout in {}", path.display()))?;

    if json {
        serde_json::to_writer_pretty(&mut out, &record)?;
        writeln!(out)?;
        return Ok(());
    }

    let rows = waitwatch_scraper::flatten_records(std::slice::from_ref(&record))?;
    waitwatch_scraper::write_wait_rows(out, &rows)?;
    Ok(())
}
