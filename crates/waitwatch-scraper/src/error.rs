use thiserror::Error;

/// Failures retrieving a city page over HTTP.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by {domain} (retry after {retry_after_secs}s)")]
    RateLimited {
        domain: String,
        retry_after_secs: u64,
    },

    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid page URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// The page did not have the layout the extractor expects.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("expected element not found: {element}")]
    MissingElement { element: &'static str },

    #[error("invalid CSS selector \"{selector}\": {reason}")]
    InvalidSelector {
        selector: &'static str,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum WaitLabelError {
    #[error("invalid wait label \"{label}\": {reason}")]
    InvalidWaitLabel { label: String, reason: String },
}

/// A wait label inside one city's record could not be converted to minutes.
#[derive(Debug, Error)]
#[error("malformed wait time for city '{city_name}': {source}")]
pub struct FlattenError {
    pub city_name: String,
    #[source]
    pub source: WaitLabelError,
}

/// Per-city failure, keeping "could not fetch" apart from "layout changed".
#[derive(Debug, Error)]
pub enum CityFetchError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] ScraperError),

    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
