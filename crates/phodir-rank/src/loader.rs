//! Reads per-city and per-division listing files from the data directory.
//!
//! Layout:
//!
//! ```text
//! <data_dir>/cities/<city>.json
//! <data_dir>/divisions/<city>/<division>.json
//! <data_dir>/divisions/<city>/divisions.json   (division index, not listings)
//! ```
//!
//! The plain `load_*` methods never fail: a missing or malformed file is
//! logged and treated as an empty collection so one bad file cannot abort a
//! build. The `try_load_*` variants surface the error instead.

use std::path::{Path, PathBuf};

use phodir_core::RawListing;
use serde_json::Value;

use crate::error::RankError;
use crate::normalize::decode_records;
use crate::rank::json_type_name;

const DIVISION_INDEX_FILE: &str = "divisions.json";

#[derive(Debug, Clone)]
pub struct DataLoader {
    data_dir: PathBuf,
}

impl DataLoader {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn city_path(&self, city_slug: &str) -> PathBuf {
        self.data_dir
            .join("cities")
            .join(format!("{city_slug}.json"))
    }

    #[must_use]
    pub fn division_path(&self, city_slug: &str, division_slug: &str) -> PathBuf {
        self.data_dir
            .join("divisions")
            .join(city_slug)
            .join(format!("{division_slug}.json"))
    }

    /// All listings for a city, or an empty collection if the file is
    /// missing or unreadable.
    #[must_use]
    pub fn load_city(&self, city_slug: &str) -> Vec<RawListing> {
        self.try_load_city(city_slug).unwrap_or_else(|e| {
            tracing::warn!(city = city_slug, error = %e, "failed to load city data");
            Vec::new()
        })
    }

    /// # Errors
    ///
    /// Returns [`RankError`] if the city file cannot be read, is not valid
    /// JSON, or is not a JSON array.
    pub fn try_load_city(&self, city_slug: &str) -> Result<Vec<RawListing>, RankError> {
        read_listings(&self.city_path(city_slug))
    }

    /// All listings for one district or ward of a city, or an empty
    /// collection if the file is missing or unreadable.
    #[must_use]
    pub fn load_division(&self, city_slug: &str, division_slug: &str) -> Vec<RawListing> {
        self.try_load_division(city_slug, division_slug)
            .unwrap_or_else(|e| {
                tracing::warn!(
                    city = city_slug,
                    division = division_slug,
                    error = %e,
                    "failed to load division data"
                );
                Vec::new()
            })
    }

    /// # Errors
    ///
    /// Returns [`RankError`] if the division file cannot be read, is not
    /// valid JSON, or is not a JSON array.
    pub fn try_load_division(
        &self,
        city_slug: &str,
        division_slug: &str,
    ) -> Result<Vec<RawListing>, RankError> {
        read_listings(&self.division_path(city_slug, division_slug))
    }

    /// Slugs of every city with a listing file, sorted.
    #[must_use]
    pub fn city_slugs(&self) -> Vec<String> {
        json_stems(&self.data_dir.join("cities"), None)
    }

    /// Slugs of every division with a listing file under `city_slug`,
    /// sorted. The division index file is not a division.
    #[must_use]
    pub fn division_slugs(&self, city_slug: &str) -> Vec<String> {
        json_stems(
            &self.data_dir.join("divisions").join(city_slug),
            Some(DIVISION_INDEX_FILE),
        )
    }
}

fn read_listings(path: &Path) -> Result<Vec<RawListing>, RankError> {
    let content = std::fs::read_to_string(path).map_err(|e| RankError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| RankError::Deserialize {
        path: path.display().to_string(),
        source: e,
    })?;

    match value {
        Value::Array(records) => {
            let total = records.len();
            let listings = decode_records(records);
            tracing::debug!(
                path = %path.display(),
                total,
                decoded = listings.len(),
                "loaded listing file"
            );
            Ok(listings)
        }
        other => Err(RankError::InvalidInput {
            found: json_type_name(&other),
        }),
    }
}

fn json_stems(dir: &Path, exclude: Option<&str>) -> Vec<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to list data directory");
            return Vec::new();
        }
    };

    let mut stems: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter(|path| {
            exclude.is_none_or(|name| path.file_name().is_none_or(|file| file != name))
        })
        .filter_map(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .collect();

    stems.sort();
    stems
}
