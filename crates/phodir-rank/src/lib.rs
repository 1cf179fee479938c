//! Listing normalization and ranking for the pho directory.
//!
//! Raw per-city records (legacy and current shapes) are normalized into
//! [`phodir_core::CanonicalListing`], scored with a blended rating/volume
//! metric, and ordered for presentation.

pub mod compare;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod rank;
pub mod score;

pub use compare::{compare_rankings, ComparisonRow, PositionChange};
pub use error::RankError;
pub use loader::DataLoader;
pub use normalize::{decode_records, normalize_listing};
pub use rank::{rank_listings, score_listing, Ranker};
pub use score::{combined_score, ScoreBreakdown};
