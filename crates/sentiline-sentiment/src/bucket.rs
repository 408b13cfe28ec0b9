//! Timestamp parsing and hourly aggregation

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats tried after RFC 3339, covering the timestamp shapes seen in
/// social-media exports. `%a %b %d %H:%M:%S %z %Y` is the classic
/// Weibo/Twitter `created_at` form.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%a %b %d %H:%M:%S %z %Y", "%Y-%m-%d %H:%M:%S %z"];

/// Permissive timestamp parse.
///
/// Offset-carrying timestamps are normalized to UTC; naive ones are taken
/// as-is. Returns `None` when nothing matches — callers drop the record.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.naive_utc());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    // Bare date buckets into hour 00
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// Hour bucket key: `"YYYY-MM-DD HH"`. Lexical order equals chronological
/// order for this shape.
pub fn hour_bucket(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H").to_string()
}

/// Mean sentiment per hour bucket, sorted ascending by bucket key.
#[derive(Debug, Default)]
pub struct HourlySeries {
    buckets: BTreeMap<String, (f64, usize)>,
}

impl HourlySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bucket: String, score: f64) {
        let entry = self.buckets.entry(bucket).or_insert((0.0, 0));
        entry.0 += score;
        entry.1 += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// `(date_hour, sentiment_index)` rows in ascending bucket order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64)> {
        self.buckets
            .iter()
            .map(|(bucket, (sum, count))| (bucket.as_str(), sum / *count as f64))
    }
}
