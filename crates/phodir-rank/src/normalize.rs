//! Normalization from [`RawListing`] (either schema shape) to
//! [`CanonicalListing`].

use phodir_core::{CanonicalListing, Coordinates, ListingFields, RawListing, RawLocation};
use serde_json::Value;

use crate::error::RankError;

const DEFAULT_PRICE: &str = "$";
const UNKNOWN_DISTRICT: &str = "Unknown District";

/// Normalizes a raw listing record into a [`CanonicalListing`].
///
/// Missing optional fields take their defaults; a negative or out-of-range
/// rating is kept as-is.
///
/// # Errors
///
/// Returns [`RankError::InvalidListing`] if `id`, `name` or `address` is
/// missing or blank.
pub fn normalize_listing(raw: RawListing) -> Result<CanonicalListing, RankError> {
    let (fields, average, count) = match raw {
        RawListing::Legacy(legacy) => (legacy.fields, legacy.rating.average, legacy.rating.count),
        RawListing::Current(current) => (current.fields, current.rating, current.review_count),
    };

    let ListingFields {
        id,
        name,
        address,
        city,
        district,
        district_or_ward,
        price,
        phone,
        website,
        contact,
        hours,
        location,
    } = fields;

    let id = non_blank(id).ok_or_else(|| invalid(None, "missing id"))?;
    let name = non_blank(name).ok_or_else(|| invalid(Some(id.as_str()), "missing name"))?;
    let address =
        non_blank(address).ok_or_else(|| invalid(Some(id.as_str()), "missing address"))?;

    let contact = contact.unwrap_or_default();
    let district = non_empty(district);
    let district_or_ward = non_empty(district_or_ward)
        .or_else(|| district.clone())
        .unwrap_or_else(|| UNKNOWN_DISTRICT.to_string());

    Ok(CanonicalListing {
        id,
        name,
        address,
        city: city.unwrap_or_default(),
        price: non_empty(price).unwrap_or_else(|| DEFAULT_PRICE.to_string()),
        rating: average.unwrap_or(0.0),
        review_count: review_count(count),
        phone: non_empty(phone).or_else(|| non_empty(contact.phone)),
        website: non_empty(website).or_else(|| non_empty(contact.website)),
        hours: hours.unwrap_or_default(),
        location: coordinates(location),
        district: district.unwrap_or_default(),
        district_or_ward,
    })
}

/// Decodes each JSON record into a [`RawListing`], dropping records that
/// are not objects or cannot be decoded in either shape.
#[must_use]
pub fn decode_records(records: Vec<Value>) -> Vec<RawListing> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match RawListing::from_value(record) {
            Ok(raw) => Some(raw),
            Err(e) => {
                tracing::debug!(index, error = %e, "skipping undecodable listing record");
                None
            }
        })
        .collect()
}

/// Location coordinates, preferring the nested `coordinates` block over the
/// flat `{lat, lng}` form. Missing axes default to `0.0`.
fn coordinates(location: Option<RawLocation>) -> Coordinates {
    let Some(location) = location else {
        return Coordinates::default();
    };
    let (lat, lng) = match location.coordinates {
        Some(nested) => (nested.lat, nested.lng),
        None => (location.lat, location.lng),
    };
    Coordinates {
        lat: lat.unwrap_or(0.0),
        lng: lng.unwrap_or(0.0),
    }
}

/// Review counts are whole and non-negative; fractional counts truncate and
/// anything negative or non-finite counts as zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn review_count(count: Option<f64>) -> u32 {
    match count {
        Some(c) if c.is_finite() && c > 0.0 => c.min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn invalid(id: Option<&str>, reason: &str) -> RankError {
    RankError::InvalidListing {
        listing: id.unwrap_or("<no id>").to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
