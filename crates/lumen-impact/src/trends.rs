//! Weekly consumption buckets for the trends view.

use std::collections::BTreeMap;

use chrono::Datelike;
use lumen_core::entities::DrinkEntry;
use schemars::JsonSchema;
use serde::Serialize;

/// Number of most recent weeks [`weekly_trends`] keeps.
pub const TREND_WEEKS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct WeeklyTrend {
    /// `"{year}-W{week}"`.
    pub label: String,
    pub year: i32,
    /// Zero-based: days since January 1st divided by seven.
    pub week: u32,
    pub drink_count: usize,
    pub total_grams: f64,
}

/// Bucket `drinks` by UTC week of year, oldest first, keeping the last
/// [`TREND_WEEKS`] buckets that have at least one drink.
#[must_use]
pub fn weekly_trends(drinks: &[DrinkEntry]) -> Vec<WeeklyTrend> {
    let mut buckets: BTreeMap<(i32, u32), (usize, f64)> = BTreeMap::new();
    for drink in drinks {
        let date = drink.timestamp.date_naive();
        let bucket = buckets.entry((date.year(), date.ordinal0() / 7)).or_default();
        bucket.0 += 1;
        bucket.1 += drink.alcohol_grams;
    }

    let skip = buckets.len().saturating_sub(TREND_WEEKS);
    buckets
        .into_iter()
        .skip(skip)
        .map(|((year, week), (drink_count, total_grams))| WeeklyTrend {
            label: format!("{year}-W{week}"),
            year,
            week,
            drink_count,
            total_grams,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use lumen_core::enums::DrinkKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn on(year: i32, month: u32, day: u32) -> DrinkEntry {
        DrinkEntry {
            id: "drk-00000000".into(),
            kind: DrinkKind::Beer,
            volume_ml: 568.0,
            abv_percent: 4.5,
            alcohol_grams: 20.0,
            timestamp: Utc.with_ymd_and_hms(year, month, day, 19, 0, 0).unwrap(),
        }
    }

    #[test]
    fn first_seven_days_are_week_zero() {
        let trends = weekly_trends(&[on(2026, 1, 1), on(2026, 1, 7), on(2026, 1, 8)]);
        let labels: Vec<&str> = trends.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["2026-W0", "2026-W1"]);
        assert_eq!(trends[0].drink_count, 2);
        assert!((trends[0].total_grams - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn buckets_sort_chronologically_across_years() {
        let trends = weekly_trends(&[on(2026, 1, 2), on(2025, 12, 30), on(2025, 3, 4)]);
        let labels: Vec<&str> = trends.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["2025-W8", "2025-W51", "2026-W0"]);
    }

    #[test]
    fn keeps_only_last_eight_weeks() {
        let start = on(2026, 1, 1);
        let drinks: Vec<DrinkEntry> = (0..12)
            .map(|week| DrinkEntry {
                timestamp: start.timestamp + Duration::weeks(week),
                ..start.clone()
            })
            .collect();
        let trends = weekly_trends(&drinks);
        assert_eq!(trends.len(), TREND_WEEKS);
        assert_eq!(trends.first().unwrap().label, "2026-W4");
        assert_eq!(trends.last().unwrap().label, "2026-W11");
    }

    #[test]
    fn empty_input_has_no_buckets() {
        assert!(weekly_trends(&[]).is_empty());
    }
}
