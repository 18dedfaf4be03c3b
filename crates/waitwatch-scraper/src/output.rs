//! CSV export of flattened wait rows.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use waitwatch_core::collapse_non_alphanumeric;

use crate::error::OutputError;
use crate::types::WaitRow;

pub const EXPORT_FILE_PREFIX: &str = "Costco_Wait_Times_US_";

const HEADER: [&str; 4] = [
    "city_name",
    "city_avg_wait",
    "store_location",
    "location_wait",
];

/// File name for a run started at `run_time`, e.g.
/// `Costco_Wait_Times_US_2024_01_05_14_30.csv`.
#[must_use]
pub fn export_file_name(run_time: &NaiveDateTime) -> String {
    let stamp = run_time.format("%Y-%m-%d %H:%M").to_string();
    let tag = collapse_non_alphanumeric(&stamp, '_');
    format!("{EXPORT_FILE_PREFIX}{tag}.csv")
}

/// Writes `rows` as CSV with a header line, even when `rows` is empty.
///
/// # Errors
///
/// Returns [`OutputError::Csv`] if serialization or the underlying writer fails.
pub fn write_wait_rows<W: Write>(writer: W, rows: &[WaitRow]) -> Result<(), OutputError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes `rows` to a timestamped CSV file in `dir`, creating `dir` if
/// needed. Returns the path written.
///
/// # Errors
///
/// Returns [`OutputError::Io`] if the directory or file cannot be created,
/// or [`OutputError::Csv`] if writing fails.
pub fn write_wait_rows_to_dir(
    dir: &Path,
    run_time: &NaiveDateTime,
    rows: &[WaitRow],
) -> Result<PathBuf, OutputError> {
    std::fs::create_dir_all(dir).map_err(|e| OutputError::Io {
        path: dir.display().to_string(),
        source: e,
    })?;

    let path = dir.join(export_file_name(run_time));
    let file = std::fs::File::create(&path).map_err(|e| OutputError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    write_wait_rows(std::io::BufWriter::new(file), rows)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "wrote wait-time export");
    Ok(path)
}
