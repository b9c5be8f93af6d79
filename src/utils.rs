use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

pub(crate) const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepts `YYYY-MM-DD` or any ISO-8601 date-time; only the date part is kept.
/// Unparsable or blank values become `None`.
pub(crate) fn deserialize_api_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_api_date))
}

pub(crate) fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, API_DATE_FORMAT).ok()
}

pub(crate) fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Trim a user-supplied filter value and parse it as a number.
/// Returns `None` for blank input, `Some(None)` for input that is not a number.
pub(crate) fn normalize_numeric_filter(raw: Option<&str>) -> Option<Option<u32>> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    Some(raw.parse().ok())
}
