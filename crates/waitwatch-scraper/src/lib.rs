pub mod client;
pub mod error;
pub mod extract;
pub mod flatten;
pub mod output;
mod rate_limit;
pub mod types;
pub mod wait_label;

pub use client::WaitTimeClient;
pub use error::{
    CityFetchError, ExtractError, FlattenError, OutputError, ScraperError, WaitLabelError,
};
pub use extract::{extract_city_waits, parse_city_page};
pub use flatten::flatten_records;
pub use output::{export_file_name, write_wait_rows, write_wait_rows_to_dir};
pub use types::{CityWaitRecord, WaitRow};
pub use wait_label::parse_wait_minutes;
