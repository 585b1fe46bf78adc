//! Field normalization rules.
//!
//! Pure, stateless transformations applied to raw upstream text during
//! decoding: date canonicalization, producer-name reformatting and
//! filtering, and season/tag classification of the shared subject field.

use crate::config::is_iso_date_shape;
use crate::error::{HarvestError, Result};

/// Token that marks a subject value as a season label.
const SEASON_TOKEN: &str = "seizoen";

/// Canonicalize a free-text start date into an ISO-8601 timestamp.
///
/// Succeeds only on a strict `YYYY-MM-DD` string naming a real calendar
/// date; the result is the same date at midnight, without a timezone
/// offset (e.g., `2020-01-01T00:00:00`). Anything else, including empty
/// input, is a [`HarvestError::DateParse`].
///
/// # Examples
/// ```
/// use podium_harvester::normalize::canonicalize_date;
///
/// assert_eq!(canonicalize_date("2020-01-01").unwrap(), "2020-01-01T00:00:00");
/// assert!(canonicalize_date("2024/01/01").is_err());
/// assert!(canonicalize_date("").is_err());
/// ```
pub fn canonicalize_date(raw: &str) -> Result<String> {
    if !is_iso_date_shape(raw) {
        return Err(HarvestError::DateParse(raw.to_string()));
    }

    let date = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| HarvestError::DateParse(raw.to_string()))?;

    Ok(format!("{}T00:00:00", date.format("%Y-%m-%d")))
}

/// Reformat a producer name of the shape `"City, Company"`.
///
/// If the name splits on a single `", "` into exactly two parts, the parts
/// are reversed and joined with one space: `"Rotterdam, Productiehuis
/// Theater"` becomes `"Productiehuis Theater Rotterdam"`. Zero or more
/// than one such split leaves the name unchanged. This is a heuristic for
/// one common upstream shape, not a general name parser.
#[must_use]
pub fn reformat_producer(name: &str) -> String {
    let parts: Vec<&str> = name.split(", ").collect();
    match parts.as_slice() {
        [city, company] => format!("{company} {city}"),
        _ => name.to_string(),
    }
}

/// Filter and reformat raw producer company names.
///
/// Blank entries and exact matches against the denylist are dropped before
/// reformatting; order is preserved otherwise.
#[must_use]
pub fn clean_producers(values: &[String], denylist: &[String]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .filter(|v| !denylist.contains(v))
        .map(|v| reformat_producer(v))
        .collect()
}

/// Classify the multi-valued subject field into season labels and tags.
///
/// A value containing `"seizoen"` (case-insensitive) is a season: it is
/// lowercased, the `"seizoen "` prefix word stripped and the remainder
/// trimmed. Every other non-blank value is kept verbatim as a tag. Blank
/// values contribute to neither list, so the two outputs partition the
/// non-blank input.
#[must_use]
pub fn classify_subjects(values: &[String]) -> (Vec<String>, Vec<String>) {
    let mut seasons = Vec::new();
    let mut tags = Vec::new();

    for value in values {
        if value.trim().is_empty() {
            continue;
        }
        let lower = value.to_lowercase();
        if lower.contains(SEASON_TOKEN) {
            seasons.push(lower.replace("seizoen ", "").trim().to_string());
        } else {
            tags.push(value.clone());
        }
    }

    (seasons, tags)
}
