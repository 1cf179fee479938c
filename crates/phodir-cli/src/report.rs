//! Plain-text table for the `compare` command.

use std::fmt::{self, Write as _};

use phodir_rank::ComparisonRow;

const NAME_WIDTH: usize = 25;

pub(crate) fn render_comparison(rows: &[ComparisonRow<'_>]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("no listings to compare\n");
        return Ok(out);
    }

    out.push_str("| Rank | Rating-only                          | Combined score                           | Move |\n");
    out.push_str("|------|--------------------------------------|------------------------------------------|------|\n");
    for row in rows {
        writeln!(
            out,
            "| {:<4} | {:<25} ({:.1}★, {:>4}) | {:<25} ({:.1}★, {:>4}) {:>4.2} | {:>4} |",
            row.position,
            truncate(&row.rating_only.listing.name, NAME_WIDTH),
            row.rating_only.listing.rating,
            row.rating_only.listing.review_count,
            truncate(&row.combined.listing.name, NAME_WIDTH),
            row.combined.listing.rating,
            row.combined.listing.review_count,
            row.combined.combined_score,
            row.change.to_string(),
        )?;
    }

    out.push('\n');
    for row in rows {
        writeln!(
            out,
            "{:>2}. {}: {:.2} (rating) + {:.2} (count) = {:.2}",
            row.position,
            row.combined.listing.name,
            row.breakdown.rating_component,
            row.breakdown.count_component,
            row.combined.combined_score,
        )?;
    }
    out.push_str("\nRating weighs 70% and review count 30%; review count saturates at 100 reviews.\n");
    Ok(out)
}

/// Truncate to at most `max` characters, never splitting a character.
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
