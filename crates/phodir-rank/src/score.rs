//! Blended popularity score used to order listings.
//!
//! The score mixes the average rating (70%) with review volume (30%) and is
//! expressed on the same 0–5 scale as ratings. It is an ordering key only and
//! is never displayed as a rating.

/// Top of the rating scale.
pub const MAX_RATING: f64 = 5.0;
/// Share of the score taken by the average rating.
pub const RATING_WEIGHT: f64 = 0.7;
/// Share of the score taken by review volume.
pub const COUNT_WEIGHT: f64 = 0.3;
/// Review count at which the volume component saturates.
pub const COUNT_SCALING: f64 = 100.0;

/// Combined score for a rating average and review count, in `[0, 5]`.
///
/// An unrated (`average <= 0`) or unreviewed (`count == 0`) listing scores
/// exactly `0.0`. Averages above [`MAX_RATING`] are treated as
/// [`MAX_RATING`], and reviews beyond [`COUNT_SCALING`] add nothing.
#[must_use]
pub fn combined_score(average: f64, count: u32) -> f64 {
    let Some((normalized_rating, normalized_count)) = normalize(average, count) else {
        return 0.0;
    };
    let score01 = normalized_rating * RATING_WEIGHT + normalized_count * COUNT_WEIGHT;
    (score01 * MAX_RATING).clamp(0.0, MAX_RATING)
}

/// The two weighted parts of a combined score, each on the 0–5 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub rating_component: f64,
    pub count_component: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn compute(average: f64, count: u32) -> Self {
        match normalize(average, count) {
            Some((normalized_rating, normalized_count)) => Self {
                rating_component: normalized_rating * RATING_WEIGHT * MAX_RATING,
                count_component: normalized_count * COUNT_WEIGHT * MAX_RATING,
            },
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.rating_component + self.count_component
    }
}

/// `(average / 5, min(count / 100, 1))`, or `None` when the listing is
/// unrated or unreviewed.
fn normalize(average: f64, count: u32) -> Option<(f64, f64)> {
    if !average.is_finite() || average <= 0.0 || count == 0 {
        return None;
    }
    let normalized_rating = (average / MAX_RATING).min(1.0);
    let normalized_count = (f64::from(count) / COUNT_SCALING).min(1.0);
    Some((normalized_rating, normalized_count))
}
