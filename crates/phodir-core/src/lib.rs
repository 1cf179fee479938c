//! Shared domain types for the pho directory: raw and canonical listings,
//! the city taxonomy, slug generation and application configuration.

pub mod app_config;
pub mod config;
pub mod error;
pub mod listing;
pub mod slug;
pub mod taxonomy;

mod lenient;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use listing::{
    CanonicalListing, Coordinates, CurrentListing, LegacyListing, LegacyRating, ListingFields,
    OpeningHours, RankedListing, RawContact, RawCoordinates, RawListing, RawLocation, TieBreak,
};
pub use slug::generate_slug;
pub use taxonomy::{
    load_taxonomy, AdminStructure, CityInfo, CityTaxonomy, DivisionKind, TaxonomyResolver,
};
