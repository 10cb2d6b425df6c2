use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an RFC 3339 timestamp, or return now when absent.
pub fn parse_timestamp(raw: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    raw.map_or_else(
        || Ok(Utc::now()),
        |raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|ts| ts.with_timezone(&Utc))
                .map_err(|error| anyhow::anyhow!("invalid --at '{raw}': {error}"))
        },
    )
}

/// Parse a `YYYY-MM-DD` date, or return today's UTC date when absent.
pub fn parse_date(raw: Option<&str>) -> anyhow::Result<NaiveDate> {
    raw.map_or_else(
        || Ok(Utc::now().date_naive()),
        |raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|error| anyhow::anyhow!("invalid --date '{raw}': {error}"))
        },
    )
}
