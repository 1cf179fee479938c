//! Listing records as they arrive from the per-city JSON files, and the
//! canonical form the ranking engine produces from them.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::lenient;

/// One opening-hours row, e.g. `{"day": "Monday", "hours": "6:00 AM - 10:00 PM"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day: String,
    pub hours: String,
}

/// Nested contact block used by older records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawContact {
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCoordinates {
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub lng: Option<f64>,
}

/// Location block in either form: `{coordinates: {lat, lng}}` or `{lat, lng}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLocation {
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub coordinates: Option<RawCoordinates>,
}

/// Fields common to both record shapes. Everything is optional here; the
/// normalizer decides which gaps are fatal for a record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFields {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub district: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub district_or_ward: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub contact: Option<RawContact>,
    /// Rows that fail to decode are skipped; the rest are kept.
    #[serde(default, deserialize_with = "lenient::each")]
    pub hours: Option<Vec<OpeningHours>>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub location: Option<RawLocation>,
}

/// `rating: {average, count}` as stored by legacy records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LegacyRating {
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub average: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub count: Option<f64>,
}

/// Shape A: rating object with `average`/`count`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyListing {
    #[serde(flatten)]
    pub fields: ListingFields,
    pub rating: LegacyRating,
}

/// Shape B: bare numeric `rating` with a sibling `reviewCount`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentListing {
    #[serde(flatten)]
    pub fields: ListingFields,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub review_count: Option<f64>,
}

/// A listing record in one of the two accepted schema shapes.
///
/// The shape is decided by the `rating` field alone: a JSON object with an
/// `average` key is [`RawListing::Legacy`], anything else (number, null,
/// absent) is [`RawListing::Current`].
///
/// Deserializing a non-object value is an error, so decoding a whole array
/// with `serde_json::from_*::<Vec<RawListing>>` fails on one stray element.
/// To drop bad records individually, decode element by element with
/// `phodir_rank::decode_records` or use `Ranker::rank_json`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawListing {
    Legacy(LegacyListing),
    Current(CurrentListing),
}

impl RawListing {
    /// Classify and decode a single JSON record.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a JSON object or a required
    /// structural field of the detected shape cannot be decoded.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde::de::Error::custom("listing record must be a JSON object"));
        }
        if is_legacy_shape(&value) {
            serde_json::from_value(value).map(RawListing::Legacy)
        } else {
            serde_json::from_value(value).map(RawListing::Current)
        }
    }

    #[must_use]
    pub fn fields(&self) -> &ListingFields {
        match self {
            RawListing::Legacy(l) => &l.fields,
            RawListing::Current(c) => &c.fields,
        }
    }
}

impl<'de> Deserialize<'de> for RawListing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RawListing::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn is_legacy_shape(value: &Value) -> bool {
    value
        .get("rating")
        .and_then(Value::as_object)
        .is_some_and(|rating| rating.contains_key("average"))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// The single in-memory form of a listing, whichever shape it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalListing {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    /// Price band such as `"$"` or `"$$"`.
    pub price: String,
    /// Average rating as displayed; not the ranking score.
    pub rating: f64,
    pub review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub hours: Vec<OpeningHours>,
    pub location: Coordinates,
    pub district: String,
    pub district_or_ward: String,
}

/// A canonical listing with its derived ranking score attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedListing {
    #[serde(flatten)]
    pub listing: CanonicalListing,
    pub combined_score: f64,
}

/// Secondary ordering applied when two listings share a combined score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Keep the order the records were supplied in.
    #[default]
    InputOrder,
    /// Ascending by name, then input order.
    Name,
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreak::InputOrder => write!(f, "input-order"),
            TieBreak::Name => write!(f, "name"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input-order" => Ok(TieBreak::InputOrder),
            "name" => Ok(TieBreak::Name),
            other => Err(format!("expected input-order or name, got '{other}'")),
        }
    }
}
