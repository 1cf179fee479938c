//! City taxonomy: display metadata per city and the administrative shape
//! (city → ward, or city → district → ward) each city uses.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::slug::generate_slug;
use crate::ConfigError;

/// Curated cities shipped with the directory: `(slug, name, description)`.
const CURATED_CITIES: &[(&str, &str, &str)] = &[
    (
        "hanoi",
        "Hanoi",
        "The capital city of Vietnam, known for its authentic northern-style pho with wider noodles and a clearer broth.",
    ),
    (
        "ho-chi-minh-city",
        "Ho Chi Minh City",
        "The southern metropolis where pho takes on a sweeter taste with more herbs and garnishes.",
    ),
    (
        "da-nang",
        "Da Nang",
        "A coastal city offering unique central Vietnamese interpretations of pho with local spices and preparations.",
    ),
];

/// Cities whose wards sit directly under the city, with no district level.
const TWO_TIER_CITIES: &[&str] = &[
    "vung-tau",
    "dalat",
    "nha-trang",
    "quy-nhon",
    "hue",
    "thai-binh",
    "ca-mau",
    "soc-trang",
    "phan-thiet",
    "tuy-hoa",
    "my-tho",
    "rach-gia",
    "tam-ky",
    "dong-hoi",
    "bac-giang",
    "bac-ninh",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminStructure {
    /// City → ward.
    TwoTier,
    /// City → district → ward.
    ThreeTier,
}

/// Kind of the first administrative level below a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionKind {
    District,
    Ward,
}

impl std::fmt::Display for DivisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivisionKind::District => write!(f, "district"),
            DivisionKind::Ward => write!(f, "ward"),
        }
    }
}

/// Static taxonomy tables. Read-only once handed to a [`TaxonomyResolver`].
#[derive(Debug, Clone, Default)]
pub struct CityTaxonomy {
    cities: HashMap<String, CityInfo>,
    two_tier: HashSet<String>,
}

impl CityTaxonomy {
    /// An empty taxonomy: every city is synthesized and three-tier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The taxonomy shipped with the directory.
    #[must_use]
    pub fn builtin() -> Self {
        let mut taxonomy = Self::new();
        for &(slug, name, description) in CURATED_CITIES {
            taxonomy = taxonomy.with_city(slug, name, description);
        }
        for &slug in TWO_TIER_CITIES {
            taxonomy = taxonomy.with_two_tier(slug);
        }
        taxonomy
    }

    #[must_use]
    pub fn with_city(
        mut self,
        slug: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.cities.insert(
            slug.into(),
            CityInfo {
                name: name.into(),
                description: description.into(),
            },
        );
        self
    }

    #[must_use]
    pub fn with_two_tier(mut self, slug: impl Into<String>) -> Self {
        self.two_tier.insert(slug.into());
        self
    }

    #[must_use]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn two_tier_count(&self) -> usize {
        self.two_tier.len()
    }
}

/// Answers city metadata and tier questions against an injected taxonomy.
///
/// Every lookup is total: unknown slugs get synthesized metadata and are
/// classified as three-tier.
#[derive(Debug, Clone)]
pub struct TaxonomyResolver {
    taxonomy: CityTaxonomy,
}

impl Default for TaxonomyResolver {
    fn default() -> Self {
        Self::new(CityTaxonomy::builtin())
    }
}

impl TaxonomyResolver {
    #[must_use]
    pub fn new(taxonomy: CityTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Display metadata for `city_slug`.
    ///
    /// Curated entries are returned as-is. Other slugs get a title-cased name
    /// (`"quy-nhon"` → `"Quy Nhon"`) and a templated description.
    #[must_use]
    pub fn city_info(&self, city_slug: &str) -> CityInfo {
        if let Some(info) = self.taxonomy.cities.get(city_slug) {
            return info.clone();
        }
        let name = title_case_slug(city_slug);
        let description = format!("Explore the unique pho offerings in {name}.");
        CityInfo { name, description }
    }

    #[must_use]
    pub fn is_two_tier(&self, city_slug: &str) -> bool {
        self.taxonomy.two_tier.contains(city_slug)
    }

    #[must_use]
    pub fn admin_structure(&self, city_slug: &str) -> AdminStructure {
        if self.is_two_tier(city_slug) {
            AdminStructure::TwoTier
        } else {
            AdminStructure::ThreeTier
        }
    }

    #[must_use]
    pub fn division_kind(&self, city_slug: &str) -> DivisionKind {
        match self.admin_structure(city_slug) {
            AdminStructure::TwoTier => DivisionKind::Ward,
            AdminStructure::ThreeTier => DivisionKind::District,
        }
    }
}

fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Deserialize)]
pub struct TaxonomyFile {
    #[serde(default)]
    pub cities: Vec<CityEntry>,
    #[serde(default)]
    pub two_tier: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CityEntry {
    pub slug: String,
    pub name: String,
    pub description: String,
}

impl From<TaxonomyFile> for CityTaxonomy {
    fn from(file: TaxonomyFile) -> Self {
        let mut taxonomy = CityTaxonomy::new();
        for city in file.cities {
            taxonomy = taxonomy.with_city(city.slug, city.name, city.description);
        }
        for slug in file.two_tier {
            taxonomy = taxonomy.with_two_tier(slug);
        }
        taxonomy
    }
}

/// Load and validate a city taxonomy from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_taxonomy(path: &Path) -> Result<CityTaxonomy, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TaxonomyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: TaxonomyFile =
        serde_yaml::from_str(&content).map_err(ConfigError::TaxonomyFileParse)?;

    validate_taxonomy(&file)?;

    Ok(file.into())
}

fn validate_taxonomy(file: &TaxonomyFile) -> Result<(), ConfigError> {
    let mut seen_cities = HashSet::new();
    for city in &file.cities {
        validate_slug(&city.slug)?;
        if city.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "city '{}' must have a non-empty name",
                city.slug
            )));
        }
        if !seen_cities.insert(city.slug.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate city slug: '{}'",
                city.slug
            )));
        }
    }

    let mut seen_two_tier = HashSet::new();
    for slug in &file.two_tier {
        validate_slug(slug)?;
        if !seen_two_tier.insert(slug.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate two-tier slug: '{slug}'"
            )));
        }
    }

    Ok(())
}

fn validate_slug(slug: &str) -> Result<(), ConfigError> {
    if slug.is_empty() || generate_slug(slug) != slug {
        return Err(ConfigError::Validation(format!(
            "'{slug}' is not a canonical slug (lowercase ASCII words joined by '-')"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "taxonomy_test.rs"]
mod tests;
