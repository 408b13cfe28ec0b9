//! Combine pipeline configuration

use std::path::PathBuf;

/// Settings for one combine run.
#[derive(Debug, Clone)]
pub struct CombineConfig {
    /// Directory holding the input files.
    pub input_dir: PathBuf,
    /// Glob pattern matched against file names in `input_dir`.
    pub pattern: String,
    /// Output file stem; `.jsonl` and `.csv` are appended.
    pub output_stem: String,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            pattern: "*.jsonl".to_string(),
            output_stem: "combined_file".to_string(),
        }
    }
}

impl CombineConfig {
    pub fn jsonl_output(&self) -> PathBuf {
        self.input_dir.join(format!("{}.jsonl", self.output_stem))
    }

    pub fn csv_output(&self) -> PathBuf {
        self.input_dir.join(format!("{}.csv", self.output_stem))
    }
}
