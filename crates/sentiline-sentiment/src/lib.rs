//! sentiline-sentiment: hourly sentiment index over JSONL posts
//!
//! Loads a JSONL file of posts, cleans each `content` text, scores sentiment
//! per record through a pluggable [`SentimentModel`], drops records without a
//! score or a parseable `created_at`, and writes the mean score per hour
//! bucket as CSV.

mod bucket;
mod clean;
mod config;
mod score;

pub use bucket::{hour_bucket, parse_timestamp, HourlySeries};
pub use clean::TextCleaner;
pub use config::HourlyConfig;
pub use score::{LexiconModel, ScoreError, SentimentModel};

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use sentiline_core::{Cell, ProgressContext, Table};

/// Pipeline execution summary
#[derive(Debug)]
pub struct HourlySummary {
    pub records_in: usize,
    pub records_scored: usize,
    pub records_dropped: usize,
    pub buckets_out: usize,
    pub elapsed: std::time::Duration,
}

/// String view of a column; non-string cells read as missing.
fn text_column(table: &Table, name: &str) -> Result<Vec<Option<String>>> {
    let cells = table
        .column(name)
        .with_context(|| format!("input has no `{name}` column"))?;
    Ok(cells
        .into_iter()
        .map(|cell| match cell {
            Cell::Str(s) => Some(s.clone()),
            _ => None,
        })
        .collect())
}

/// Run the hourly sentiment pipeline with the given model.
///
/// Cleaning and scoring fan out over a rayon pool; results are collected in
/// input order. A scorer failure yields no score for that record only.
pub fn run_with_model(
    config: &HourlyConfig,
    model: &dyn SentimentModel,
    progress: &ProgressContext,
) -> Result<HourlySummary> {
    let start = Instant::now();

    let table = sentiline_core::read_jsonl(&config.input)
        .with_context(|| format!("failed to load {}", config.input.display()))?;
    let records_in = table.num_rows();
    log::info!(
        "Scoring {} records with {} workers",
        records_in,
        config.workers
    );

    let contents = text_column(&table, "content")?;
    let timestamps = text_column(&table, "created_at")?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .context("failed to create thread pool")?;

    let cleaner = TextCleaner::new();
    let clean_bar = progress.count_bar("clean", records_in as u64);
    let cleaned: Vec<Option<String>> = pool.install(|| {
        contents
            .par_iter()
            .progress_with(clean_bar)
            .map(|content| content.as_deref().map(|text| cleaner.clean(text)))
            .collect()
    });

    let score_bar = progress.count_bar("score", records_in as u64);
    let scores: Vec<Option<f64>> = pool.install(|| {
        cleaned
            .par_iter()
            .progress_with(score_bar)
            .map(|text| text.as_deref().and_then(|t| model.score(t).ok()))
            .collect()
    });

    let mut series = HourlySeries::new();
    let mut records_scored = 0usize;
    for (score, raw_ts) in scores.iter().zip(&timestamps) {
        let Some(score) = score else { continue };
        let Some(timestamp) = raw_ts.as_deref().and_then(parse_timestamp) else {
            continue;
        };
        series.add(hour_bucket(&timestamp), *score);
        records_scored += 1;
    }

    write_series(&series, config).with_context(|| {
        format!("failed to write output file {}", config.output.display())
    })?;

    let summary = HourlySummary {
        records_in,
        records_scored,
        records_dropped: records_in - records_scored,
        buckets_out: series.len(),
        elapsed: start.elapsed(),
    };

    log::info!("=== Hourly Sentiment Summary ===");
    log::info!(
        "Records: {} in, {} scored ({} dropped)",
        summary.records_in,
        summary.records_scored,
        summary.records_dropped
    );
    log::info!("Buckets: {}", summary.buckets_out);
    log::info!("Time: {:.1}s", summary.elapsed.as_secs_f64());

    Ok(summary)
}

/// Run with the bundled lexicon model.
pub fn run(config: &HourlyConfig, progress: &ProgressContext) -> Result<HourlySummary> {
    run_with_model(config, &LexiconModel, progress)
}

fn write_series(series: &HourlySeries, config: &HourlyConfig) -> io::Result<()> {
    let mut writer = csv::Writer::from_path(&config.output).map_err(io::Error::other)?;
    writer
        .write_record(["date_hour", "sentiment_index"])
        .map_err(io::Error::other)?;
    for (bucket, mean) in series.rows() {
        let mean = mean.to_string();
        writer
            .write_record([bucket, mean.as_str()])
            .map_err(io::Error::other)?;
    }
    writer.flush()
}
