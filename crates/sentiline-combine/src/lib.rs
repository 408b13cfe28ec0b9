//! sentiline-combine: merge JSONL files into one deduplicated dataset
//!
//! Globs the input directory, parses each matching file, unions the column
//! sets, stringifies columns holding nested values, drops exact-duplicate
//! rows, and writes the result as JSONL and CSV.

mod config;

pub use config::CombineConfig;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use sentiline_core::{ProgressContext, Table};

/// Pipeline execution summary
#[derive(Debug)]
pub struct CombineSummary {
    pub files_read: usize,
    pub rows_in: usize,
    pub duplicates_removed: usize,
    pub rows_out: usize,
    pub elapsed: std::time::Duration,
}

/// List input files matching the configured pattern, sorted for determinism.
///
/// The pipeline's own output matches `*.jsonl`, so it is excluded; otherwise
/// a second run would re-ingest the first run's result.
fn list_inputs(config: &CombineConfig) -> Result<Vec<PathBuf>> {
    let pattern = config.input_dir.join(&config.pattern);
    let pattern = pattern
        .to_str()
        .context("input directory is not valid UTF-8")?;

    let jsonl_output = config.jsonl_output();
    let mut paths = Vec::new();
    for entry in glob::glob(pattern).context("invalid glob pattern")? {
        let path = entry.context("failed to read directory entry")?;
        if path == jsonl_output {
            log::debug!("skipping previous output {}", path.display());
            continue;
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

/// Run the combine pipeline.
///
/// Zero matching files is not an error: the outputs are written empty.
pub fn run(config: &CombineConfig, progress: &ProgressContext) -> Result<CombineSummary> {
    let start = Instant::now();

    let paths = list_inputs(config)?;
    if paths.is_empty() {
        log::warn!(
            "no files matching {} in {}, writing empty outputs",
            config.pattern,
            config.input_dir.display()
        );
    } else {
        log::info!("Combining {} files", paths.len());
    }

    let pb = progress.count_bar("combine", paths.len() as u64);
    let mut tables = Vec::with_capacity(paths.len());
    for path in &paths {
        pb.set_message(path.display().to_string());
        let table = sentiline_core::read_jsonl(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        tables.push(table);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let mut combined = Table::concat(tables);
    let rows_in = combined.num_rows();

    let stringified = combined.normalize();
    if stringified > 0 {
        log::info!("Stringified {stringified} columns holding nested values");
    }

    let duplicates_removed = combined.dedup();
    let rows_out = combined.num_rows();

    let jsonl_path = config.jsonl_output();
    sentiline_core::write_jsonl(&combined, &jsonl_path)
        .with_context(|| format!("failed to write {}", jsonl_path.display()))?;
    let csv_path = config.csv_output();
    sentiline_core::write_csv(&combined, &csv_path)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;

    let summary = CombineSummary {
        files_read: paths.len(),
        rows_in,
        duplicates_removed,
        rows_out,
        elapsed: start.elapsed(),
    };

    log::info!("=== Combine Summary ===");
    log::info!("Files: {}", summary.files_read);
    log::info!(
        "Rows: {} in, {} out ({} duplicates removed)",
        summary.rows_in,
        summary.rows_out,
        summary.duplicates_removed
    );
    log::info!("Time: {:.1}s", summary.elapsed.as_secs_f64());

    Ok(summary)
}
