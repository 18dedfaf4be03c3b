//! Flattening of per-city records into one row per store location.

use crate::error::FlattenError;
use crate::types::{CityWaitRecord, WaitRow};
use crate::wait_label::parse_wait_minutes;

/// Converts city records into rows of `(city, city avg, store, store wait)`
/// with wait labels parsed to minutes.
///
/// Rows follow record order, then each record's location order. A record
/// with no locations contributes no rows, though its average label is still
/// validated, so a placeholder average such as `"--"` on an otherwise empty
/// city page fails the whole call.
///
/// # Errors
///
/// Returns [`FlattenError`] for the first label that is not `<digits>min`.
/// No partial output is returned.
pub fn flatten_records(records: &[CityWaitRecord]) -> Result<Vec<WaitRow>, FlattenError> {
    let capacity = records
        .iter()
        .map(|record| record.city_locations_info().len())
        .sum();
    let mut rows = Vec::with_capacity(capacity);

    for record in records {
        let in_city = |source| FlattenError {
            city_name: record.city_name().to_owned(),
            source,
        };

        let city_avg_wait = parse_wait_minutes(record.city_avg_wait()).map_err(in_city)?;

        for (store_location, wait_label) in record.city_locations_info() {
            let location_wait = parse_wait_minutes(wait_label).map_err(in_city)?;
            rows.push(WaitRow {
                city_name: record.city_name().to_owned(),
                city_avg_wait,
                store_location: store_location.clone(),
                location_wait,
            });
        }
    }

    Ok(rows)
}
