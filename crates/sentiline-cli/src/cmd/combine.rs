//! Combine subcommand - merge JSONL files into one deduplicated dataset

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sentiline_combine::CombineConfig;
use sentiline_core::ProgressContext;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct CombineArgs {
    /// Directory to scan for input files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Glob pattern matched against file names (default from config)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Output file stem; .jsonl and .csv are appended
    #[arg(long)]
    pub output_stem: Option<String>,
}

pub fn run(args: CombineArgs, config: &Config, progress: &ProgressContext) -> Result<()> {
    let combine_config = CombineConfig {
        input_dir: args.dir,
        pattern: args.pattern.unwrap_or_else(|| config.combine.pattern.clone()),
        output_stem: args
            .output_stem
            .unwrap_or_else(|| config.combine.output_stem.clone()),
    };

    let summary = sentiline_combine::run(&combine_config, progress)?;

    println!();
    println!("=== Combine Summary ===");
    println!("Files read: {}", summary.files_read);
    println!(
        "Rows: {} in, {} out ({} duplicates removed)",
        summary.rows_in, summary.rows_out, summary.duplicates_removed
    );
    println!(
        "Wrote {} and {}",
        combine_config.jsonl_output().display(),
        combine_config.csv_output().display()
    );

    Ok(())
}
