//! Configuration values and validation functions for the harvester.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::error::{HarvestError, Result};

/// Base URL for the TIN Adlib query endpoint (performTIN database).
pub const ADLIB_BASE_URL: &str =
    "https://tin.adlibhosting.com/webapi51/wwwopac.ashx?xmltype=Grouped&database=performTIN";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 500;

/// Default delay between page requests, a politeness contract with the
/// upstream service.
pub const DEFAULT_REQUEST_DELAY_SECS: u64 = 5;

/// Upstream placeholder company meaning "foreign companies, unspecified".
/// Filtered out of producer lists by default.
pub const FOREIGN_COMPANIES_PLACEHOLDER: &str = "Buitenlandse Gezelschappen";

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Check whether a string has the strict `YYYY-MM-DD` shape.
///
/// This checks the shape only; use [`validate_date`] to also reject
/// impossible calendar dates.
#[must_use]
pub fn is_iso_date_shape(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}

/// Validate a query-boundary date (strict `YYYY-MM-DD`, real calendar date).
///
/// # Examples
/// ```
/// use podium_harvester::config::validate_date;
///
/// assert!(validate_date("2020-01-01").is_ok());
/// assert!(validate_date("2020/01/01").is_err());
/// assert!(validate_date("2020-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<()> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(HarvestError::InvalidDate(date_str.to_string()));
    }

    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| HarvestError::InvalidDate(date_str.to_string()))?;

    Ok(())
}

/// Build the Adlib search expression for a date range.
///
/// The lower bound is exclusive, the optional upper bound inclusive,
/// matching the upstream query language.
///
/// # Examples
/// ```
/// use podium_harvester::config::date_filter;
///
/// assert_eq!(date_filter("2020-01-01", None), "dating.date.start>'2020-01-01'");
/// assert_eq!(
///     date_filter("2020-01-01", Some("2021-01-01")),
///     "dating.date.start>'2020-01-01' and dating.date.start<='2021-01-01'"
/// );
/// ```
#[must_use]
pub fn date_filter(since: &str, until: Option<&str>) -> String {
    debug_assert!(
        DATE_PATTERN.is_match(since),
        "since should be validated before calling date_filter"
    );

    match until {
        Some(upper) => {
            format!("dating.date.start>'{since}' and dating.date.start<='{upper}'")
        }
        None => format!("dating.date.start>'{since}'"),
    }
}

/// Runtime configuration for a harvest run.
///
/// All knobs that the fetcher and decoder need are carried here explicitly
/// so tests can inject a fixture transport, a zero delay and a custom
/// denylist without touching global state.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Base URL of the Adlib query endpoint.
    pub base_url: String,

    /// Records requested per page; a short page signals end-of-results.
    pub page_size: u32,

    /// Delay enforced between page requests.
    pub request_delay: Duration,

    /// Producer company names dropped from every record (exact match).
    pub excluded_producers: Vec<String>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            base_url: ADLIB_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_delay: Duration::from_secs(DEFAULT_REQUEST_DELAY_SECS),
            excluded_producers: vec![FOREIGN_COMPANIES_PLACEHOLDER.to_string()],
        }
    }
}
