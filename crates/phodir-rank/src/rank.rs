//! Ranking engine: normalize, drop invalid records, score, and order.

use phodir_core::{CanonicalListing, RankedListing, RawListing, TieBreak};
use serde_json::Value;

use crate::error::RankError;
use crate::normalize::{decode_records, normalize_listing};
use crate::score::combined_score;

/// Orders listings by combined score, highest first.
///
/// Listings with equal scores (notably every unrated listing at `0.0`) are
/// ordered by the configured [`TieBreak`]; the sort is stable, so the final
/// fallback is always input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    tie_break: TieBreak,
}

impl Ranker {
    #[must_use]
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Normalize, score and sort a collection of raw listings.
    ///
    /// Records without a usable `id`, `name` or `address` are excluded. An
    /// empty collection yields an empty ranking.
    #[must_use]
    pub fn rank(&self, listings: Vec<RawListing>) -> Vec<RankedListing> {
        let total = listings.len();

        let mut ranked: Vec<RankedListing> = listings
            .into_iter()
            .filter_map(|raw| match normalize_listing(raw) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    tracing::debug!(error = %e, "excluding invalid listing from ranking");
                    None
                }
            })
            .map(score_listing)
            .collect();

        let dropped = total - ranked.len();
        if dropped > 0 {
            tracing::debug!(total, dropped, "invalid listings excluded");
        }

        self.sort(&mut ranked);
        ranked
    }

    /// Rank an untyped JSON payload, which must be an array of records.
    ///
    /// Elements that are not listing objects are dropped like any other
    /// invalid record.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidInput`] if `input` is not a JSON array.
    pub fn rank_json(&self, input: Value) -> Result<Vec<RankedListing>, RankError> {
        match input {
            Value::Array(records) => Ok(self.rank(decode_records(records))),
            other => Err(RankError::InvalidInput {
                found: json_type_name(&other),
            }),
        }
    }

    fn sort(&self, ranked: &mut [RankedListing]) {
        match self.tie_break {
            TieBreak::InputOrder => {
                ranked.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
            }
            TieBreak::Name => ranked.sort_by(|a, b| {
                b.combined_score
                    .total_cmp(&a.combined_score)
                    .then_with(|| a.listing.name.cmp(&b.listing.name))
            }),
        }
    }
}

/// Attach a freshly computed combined score to a canonical listing.
#[must_use]
pub fn score_listing(listing: CanonicalListing) -> RankedListing {
    let combined_score = combined_score(listing.rating, listing.review_count);
    RankedListing {
        listing,
        combined_score,
    }
}

/// Rank with the default tie-break (input order).
#[must_use]
pub fn rank_listings(listings: Vec<RawListing>) -> Vec<RankedListing> {
    Ranker::default().rank(listings)
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn listing(id: &str, name: &str, average: f64, count: u32) -> RawListing {
        RawListing::from_value(json!({
            "id": id,
            "name": name,
            "address": format!("{id} Lý Thường Kiệt"),
            "rating": average,
            "reviewCount": count
        }))
        .unwrap()
    }

    fn ids(ranked: &[RankedListing]) -> Vec<&str> {
        ranked.iter().map(|r| r.listing.id.as_str()).collect()
    }

    fn scored(id: &str, combined_score: f64) -> RankedListing {
        let canonical = normalize_listing(listing(id, id, 0.0, 0)).unwrap();
        RankedListing {
            listing: canonical,
            combined_score,
        }
    }

    #[test]
    fn sorts_by_combined_score_descending() {
        let mut ranked = vec![
            scored("a", 2.1),
            scored("b", 4.9),
            scored("c", 0.0),
            scored("d", 3.3),
        ];
        Ranker::default().sort(&mut ranked);
        let scores: Vec<f64> = ranked.iter().map(|r| r.combined_score).collect();
        assert_eq!(scores, vec![4.9, 3.3, 2.1, 0.0]);
        assert_eq!(ids(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn rank_orders_by_computed_scores() {
        let ranked = rank_listings(vec![
            listing("few", "Few Reviews", 5.0, 2),
            listing("many", "Many Reviews", 4.5, 300),
            listing("none", "Unrated", 0.0, 0),
            listing("mid", "Middle", 4.0, 10),
        ]);
        assert_eq!(ids(&ranked), vec!["many", "few", "mid", "none"]);
    }

    #[test]
    fn ties_keep_input_order_by_default() {
        let ranked = rank_listings(vec![
            listing("z", "Zeta", 0.0, 0),
            listing("m", "Mu", 4.0, 10),
            listing("a", "Alpha", 0.0, 0),
            listing("k", "Kappa", 4.0, 10),
        ]);
        assert_eq!(ids(&ranked), vec!["m", "k", "z", "a"]);
    }

    #[test]
    fn name_tie_break_orders_ties_alphabetically() {
        let ranked = Ranker::new(TieBreak::Name).rank(vec![
            listing("z", "Zeta", 0.0, 0),
            listing("m", "Mu", 4.0, 10),
            listing("a", "Alpha", 0.0, 0),
            listing("k", "Kappa", 4.0, 10),
        ]);
        assert_eq!(ids(&ranked), vec!["k", "m", "a", "z"]);
    }

    #[test]
    fn invalid_records_are_excluded_regardless_of_score() {
        let nameless = RawListing::from_value(json!({
            "id": "top",
            "address": "1 Tràng Tiền",
            "rating": 5.0,
            "reviewCount": 1000
        }))
        .unwrap();
        let ranked = rank_listings(vec![nameless, listing("ok", "Phở Lý Quốc Sư", 3.0, 5)]);
        assert_eq!(ids(&ranked), vec!["ok"]);
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        assert!(rank_listings(Vec::new()).is_empty());
        assert!(Ranker::default().rank_json(json!([])).unwrap().is_empty());
    }

    #[test]
    fn mixed_shapes_with_equal_ratings_score_identically() {
        let ranked = Ranker::default()
            .rank_json(json!([
                {"id": "1", "name": "A", "address": "x", "rating": {"average": 4.5, "count": 120}},
                {"id": "2", "name": "A", "address": "x", "rating": 4.5, "reviewCount": 120}
            ]))
            .unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].combined_score, ranked[1].combined_score);
        assert_eq!(ids(&ranked), vec!["1", "2"]);
    }

    #[test]
    fn rank_json_rejects_non_array_input() {
        for input in [json!(null), json!({"id": "1"}), json!("listings"), json!(3)] {
            let result = Ranker::default().rank_json(input);
            assert!(
                matches!(result, Err(RankError::InvalidInput { .. })),
                "expected InvalidInput, got: {result:?}"
            );
        }
    }

    #[test]
    fn rank_json_error_names_the_input_type() {
        let err = Ranker::default().rank_json(json!({})).unwrap_err();
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn rank_json_drops_non_object_elements() {
        let ranked = Ranker::default()
            .rank_json(json!([
                "junk",
                {"id": "1", "name": "Phở Thìn", "address": "13 Lò Đúc", "rating": 4.1, "reviewCount": 80},
                null
            ]))
            .unwrap();
        assert_eq!(ids(&ranked), vec!["1"]);
    }

    #[test]
    fn score_listing_recomputes_from_rating_fields() {
        let canonical = normalize_listing(listing("s", "Phở Sướng", 4.0, 10)).unwrap();
        let ranked = score_listing(canonical.clone());
        assert_eq!(ranked.listing, canonical);
        assert!((ranked.combined_score - 2.95).abs() < 1e-9);
    }
}
