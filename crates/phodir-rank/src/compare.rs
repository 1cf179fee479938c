//! Side-by-side comparison of rating-only ordering against combined-score
//! ordering, used to sanity-check how the blended score reshuffles a city.

use phodir_core::RankedListing;

use crate::score::ScoreBreakdown;

/// Movement of a listing in the combined-score ordering relative to where
/// the rating-only ordering would have put it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionChange {
    Up(usize),
    Down(usize),
    Same,
}

impl std::fmt::Display for PositionChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionChange::Up(n) => write!(f, "↑{n}"),
            PositionChange::Down(n) => write!(f, "↓{n}"),
            PositionChange::Same => write!(f, "―"),
        }
    }
}

/// One row of the comparison: the listing at `position` in each ordering.
#[derive(Debug, Clone)]
pub struct ComparisonRow<'a> {
    /// 1-based position.
    pub position: usize,
    pub rating_only: &'a RankedListing,
    pub combined: &'a RankedListing,
    /// Movement of `combined` relative to its rating-only position.
    pub change: PositionChange,
    pub breakdown: ScoreBreakdown,
}

/// Compare the top `limit` positions of a combined-score ranking with the
/// same listings ordered by raw rating average (stable, highest first).
#[must_use]
pub fn compare_rankings(ranked: &[RankedListing], limit: usize) -> Vec<ComparisonRow<'_>> {
    let mut by_rating: Vec<usize> = (0..ranked.len()).collect();
    by_rating.sort_by(|&a, &b| ranked[b].listing.rating.total_cmp(&ranked[a].listing.rating));

    let mut rating_position = vec![0; ranked.len()];
    for (position, &index) in by_rating.iter().enumerate() {
        rating_position[index] = position;
    }

    ranked
        .iter()
        .enumerate()
        .take(limit)
        .map(|(position, combined)| {
            let previous = rating_position[position];
            let change = match previous.cmp(&position) {
                std::cmp::Ordering::Greater => PositionChange::Up(previous - position),
                std::cmp::Ordering::Less => PositionChange::Down(position - previous),
                std::cmp::Ordering::Equal => PositionChange::Same,
            };
            ComparisonRow {
                position: position + 1,
                rating_only: &ranked[by_rating[position]],
                combined,
                change,
                breakdown: ScoreBreakdown::compute(
                    combined.listing.rating,
                    combined.listing.review_count,
                ),
            }
        })
        .collect()
}
