//! Hourly subcommand - per-hour mean sentiment over a JSONL file

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sentiline_core::ProgressContext;
use sentiline_sentiment::HourlyConfig;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct HourlyArgs {
    /// JSONL input with `content` and `created_at` fields
    pub input: PathBuf,

    /// CSV output (date_hour, sentiment_index)
    pub output: PathBuf,

    /// Worker threads for cleaning and scoring
    #[arg(long)]
    pub workers: Option<usize>,
}

pub fn run(args: HourlyArgs, config: &Config, progress: &ProgressContext) -> Result<()> {
    let hourly_config = HourlyConfig {
        workers: config.clamp_workers(args.workers),
        ..HourlyConfig::new(args.input, args.output)
    };

    let summary = sentiline_sentiment::run(&hourly_config, progress)?;

    println!();
    println!("=== Hourly Sentiment Summary ===");
    println!(
        "Records: {} in, {} scored ({} dropped)",
        summary.records_in, summary.records_scored, summary.records_dropped
    );
    println!("Buckets: {}", summary.buckets_out);
    println!(
        "Hourly sentiment data has been saved to {}",
        hourly_config.output.display()
    );

    Ok(())
}
