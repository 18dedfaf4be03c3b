//! Domain types for wait-time extraction.

use indexmap::IndexMap;
use serde::Serialize;

/// Wait-time data read from one city page.
///
/// Labels are kept as the page shows them (e.g. `"12min"`); conversion to
/// minutes happens in [`crate::flatten`]. Locations keep page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityWaitRecord {
    city_name: String,
    city_avg_wait: String,
    city_locations_info: IndexMap<String, String>,
}

impl CityWaitRecord {
    #[must_use]
    pub fn new(
        city_name: impl Into<String>,
        city_avg_wait: impl Into<String>,
        city_locations_info: IndexMap<String, String>,
    ) -> Self {
        Self {
            city_name: city_name.into(),
            city_avg_wait: city_avg_wait.into(),
            city_locations_info,
        }
    }

    #[must_use]
    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    /// City-wide average wait label.
    #[must_use]
    pub fn city_avg_wait(&self) -> &str {
        &self.city_avg_wait
    }

    /// Store location label to wait label, in page order.
    #[must_use]
    pub fn city_locations_info(&self) -> &IndexMap<String, String> {
        &self.city_locations_info
    }
}

/// One store location with wait times in whole minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitRow {
    pub city_name: String,
    pub city_avg_wait: u32,
    pub store_location: String,
    pub location_wait: u32,
}
