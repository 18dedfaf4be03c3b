use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::text::collapse_non_alphanumeric;
use crate::ConfigError;

/// Prefix the site puts in front of every city page title.
const SITE_NAME_PREFIX: &str = "Costco ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityConfig {
    /// City entry exactly as the site names it, e.g. `"Costco Tampa Bay"`.
    pub name: String,
}

impl CityConfig {
    /// Human-readable city name without the site prefix.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .strip_prefix(SITE_NAME_PREFIX)
            .unwrap_or(self.name.as_str())
    }

    /// URL path segment for the city page.
    ///
    /// Lowercases the full name and collapses every run of characters outside
    /// `[a-z0-9]` into a single `-`.
    #[must_use]
    pub fn slug(&self) -> String {
        collapse_non_alphanumeric(&self.name.to_lowercase(), '-')
    }

    /// Full page URL under `base_url`, always ending in `/`.
    #[must_use]
    pub fn page_url(&self, base_url: &str) -> String {
        format!("{}/{}/", base_url.trim_end_matches('/'), self.slug())
    }
}

#[derive(Debug, Deserialize)]
pub struct CitiesFile {
    pub cities: Vec<CityConfig>,
}

impl CitiesFile {
    /// Look up a city by display name, full name, or slug (case-insensitive).
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&CityConfig> {
        let query = query.trim().to_lowercase();
        self.cities.iter().find(|city| {
            city.name.to_lowercase() == query
                || city.display_name().to_lowercase() == query
                || city.slug() == query
        })
    }
}

/// Load and validate the city list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_cities(path: &Path) -> Result<CitiesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CitiesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let cities_file: CitiesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CitiesFileParse)?;

    validate_cities(&cities_file)?;

    tracing::debug!(
        path = %path.display(),
        count = cities_file.cities.len(),
        "loaded city list"
    );

    Ok(cities_file)
}

fn validate_cities(cities_file: &CitiesFile) -> Result<(), ConfigError> {
    if cities_file.cities.is_empty() {
        return Err(ConfigError::Validation(
            "at least one city must be configured".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for city in &cities_file.cities {
        if city.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "city name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(city.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate city name: '{}'",
                city.name
            )));
        }

        let slug = city.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate city slug: '{}' (from city '{}')",
                slug, city.name
            )));
        }
    }

    Ok(())
}
