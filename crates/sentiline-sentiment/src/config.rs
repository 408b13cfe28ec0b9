//! Hourly sentiment pipeline configuration

use std::path::PathBuf;

/// Settings for one hourly-sentiment run.
#[derive(Debug, Clone)]
pub struct HourlyConfig {
    /// JSONL input with `content` and `created_at` columns.
    pub input: PathBuf,
    /// CSV output (`date_hour,sentiment_index`).
    pub output: PathBuf,
    /// Worker threads for the clean and score stages.
    pub workers: usize,
}

impl HourlyConfig {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        Self {
            input,
            output,
            workers,
        }
    }
}
