use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::listing::Listing;
use crate::scoring::ScoreResult;

/// A listing with its ranked result for display
pub struct RankedListing<'a> {
    pub listing: &'a Listing,
    pub result: &'a ScoreResult,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Preference score with four decimals ("0.6000")
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked listings as a table with columns: Rank, Score, Name, Id
/// Rank column: 3 chars (fits "99."), right-aligned
pub fn format_ranked_table(rows: &[RankedListing], use_colors: bool) -> String {
    format_ranked_table_with_width(rows, use_colors, get_terminal_width())
}

fn format_ranked_table_with_width(
    rows: &[RankedListing],
    use_colors: bool,
    term_width: Option<usize>,
) -> String {
    if rows.is_empty() {
        return "No listings to rank.".to_string();
    }

    let rank_width = 3;
    let score_width = 6;
    let separator = "  ";

    rows.iter()
        .map(|row| {
            let rank_str = format!("{:>2}.", row.result.rank);
            let score_str = format_score(row.result.preference_score);
            let id = &row.listing.id;

            let fixed_width = rank_width + 1 + score_width + separator.len() * 2 + id.chars().count();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&row.listing.name, width - fixed_width)
                }
                Some(_) => truncate_name(&row.listing.name, 20),
                None => row.listing.name.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str.dimmed(),
                    score_str.bold(),
                    separator,
                    name,
                    separator,
                    id.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str, score_str, separator, name, separator, id
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line detail for one ranked listing (verbose mode)
pub fn format_listing_detail(row: &RankedListing, use_colors: bool) -> String {
    let l = row.listing;
    let r = row.result;
    let header = format!("{}. {} ({})", r.rank, l.name, l.id);
    let body = format!(
        "  Price: {:.0}\n  Distance: {} km\n  Facility: {}\n  Rating: {}\n  Security: {}\n  Score: {} (d+ {:.4}, d- {:.4})",
        l.price,
        l.distance,
        l.facility,
        l.rating,
        l.security,
        format_score(r.preference_score),
        r.separation.to_ideal,
        r.separation.to_anti_ideal
    );

    if use_colors {
        format!("{}\n{}", header.bold(), body)
    } else {
        format!("{}\n{}", header, body)
    }
}

/// Format ranked listings as tab-separated values for scripting
/// Columns: rank, score, id, name (no headers, no colors)
pub fn format_tsv(rows: &[RankedListing]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{}\t{}\t{}\t{}",
                row.result.rank,
                format_score(row.result.preference_score),
                row.listing.id,
                row.listing.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON array of results, in rank order
pub fn format_json(results: &[ScoreResult]) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize results")
}
