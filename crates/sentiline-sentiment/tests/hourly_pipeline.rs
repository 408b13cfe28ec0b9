//! End-to-end tests for the hourly sentiment pipeline

use std::fs;
use std::path::Path;

use sentiline_core::ProgressContext;
use sentiline_sentiment::{
    run, run_with_model, HourlyConfig, ScoreError, SentimentModel,
};

fn config_for(dir: &Path, input: &str) -> HourlyConfig {
    HourlyConfig::new(dir.join(input), dir.join("hourly.csv"))
}

fn read_output(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("hourly.csv"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn buckets_by_hour_sorted_ascending() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("posts.jsonl"),
        concat!(
            "{\"content\": \"今天很开心\", \"created_at\": \"2020-02-01 10:15:00\"}\n",
            "{\"content\": \"太失望了\", \"created_at\": \"2020-02-01 09:05:00\"}\n",
            "{\"content\": \"真棒\", \"created_at\": \"2020-02-01 10:45:00\"}\n",
        ),
    )
    .unwrap();

    let summary = run(&config_for(dir.path(), "posts.jsonl"), &ProgressContext::new()).unwrap();
    assert_eq!(summary.records_in, 3);
    assert_eq!(summary.records_scored, 3);
    assert_eq!(summary.buckets_out, 2);

    let lines = read_output(dir.path());
    assert_eq!(lines[0], "date_hour,sentiment_index");
    assert!(lines[1].starts_with("2020-02-01 09,"));
    assert!(lines[2].starts_with("2020-02-01 10,"));
}

#[test]
fn unparsable_timestamp_drops_record() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("posts.jsonl"),
        concat!(
            "{\"content\": \"很开心\", \"created_at\": \"not-a-date\"}\n",
            "{\"content\": \"很开心\", \"created_at\": \"2020-02-01 08:00:00\"}\n",
        ),
    )
    .unwrap();

    let summary = run(&config_for(dir.path(), "posts.jsonl"), &ProgressContext::new()).unwrap();
    assert_eq!(summary.records_scored, 1);
    assert_eq!(summary.records_dropped, 1);

    let lines = read_output(dir.path());
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("2020-02-01 08,"));
}

#[test]
fn unscorable_record_does_not_abort_siblings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("posts.jsonl"),
        concat!(
            // Cleans to empty -> scorer error -> dropped, siblings survive
            "{\"content\": \"!!! ???\", \"created_at\": \"2020-02-01 08:00:00\"}\n",
            "{\"content\": \"很开心\", \"created_at\": \"2020-02-01 08:10:00\"}\n",
            "{\"content\": \"真不错\", \"created_at\": \"2020-02-01 08:20:00\"}\n",
        ),
    )
    .unwrap();

    let summary = run(&config_for(dir.path(), "posts.jsonl"), &ProgressContext::new()).unwrap();
    assert_eq!(summary.records_in, 3);
    assert_eq!(summary.records_scored, 2);
    assert_eq!(summary.buckets_out, 1);
}

#[test]
fn missing_content_cell_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("posts.jsonl"),
        concat!(
            "{\"content\": null, \"created_at\": \"2020-02-01 08:00:00\"}\n",
            "{\"content\": \"很开心\", \"created_at\": \"2020-02-01 08:10:00\"}\n",
        ),
    )
    .unwrap();

    let summary = run(&config_for(dir.path(), "posts.jsonl"), &ProgressContext::new()).unwrap();
    assert_eq!(summary.records_scored, 1);
}

#[test]
fn missing_column_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("posts.jsonl"),
        "{\"text\": \"很开心\", \"created_at\": \"2020-02-01 08:00:00\"}\n",
    )
    .unwrap();

    let err = run(&config_for(dir.path(), "posts.jsonl"), &ProgressContext::new()).unwrap_err();
    assert!(format!("{err:#}").contains("content"));
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&config_for(dir.path(), "nope.jsonl"), &ProgressContext::new()).unwrap_err();
    assert!(format!("{err:#}").contains("nope.jsonl"));
}

struct FixedModel(f64);

impl SentimentModel for FixedModel {
    fn score(&self, text: &str) -> Result<f64, ScoreError> {
        if text.is_empty() {
            return Err(ScoreError::EmptyText);
        }
        Ok(self.0)
    }
}

#[test]
fn mean_is_exact_for_known_scores() {
    // Constant 0.5 per record keeps the sum and mean exact in f64.
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("posts.jsonl"),
        concat!(
            "{\"content\": \"一\", \"created_at\": \"2020-02-01 08:00:00\"}\n",
            "{\"content\": \"二\", \"created_at\": \"2020-02-01 08:20:00\"}\n",
            "{\"content\": \"三\", \"created_at\": \"2020-02-01 08:40:00\"}\n",
        ),
    )
    .unwrap();

    let config = config_for(dir.path(), "posts.jsonl");
    run_with_model(&config, &FixedModel(0.5), &ProgressContext::new()).unwrap();

    let lines = read_output(dir.path());
    assert_eq!(lines[1], "2020-02-01 08,0.5");
}

#[test]
fn weibo_timestamps_bucket_in_utc() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("posts.jsonl"),
        "{\"content\": \"很开心\", \"created_at\": \"Sat Dec 14 17:18:36 +0800 2019\"}\n",
    )
    .unwrap();

    run(&config_for(dir.path(), "posts.jsonl"), &ProgressContext::new()).unwrap();

    let lines = read_output(dir.path());
    assert!(lines[1].starts_with("2019-12-14 09,"));
}
