//! Sentiline Core - Common infrastructure for JSONL batch pipelines
//!
//! This crate provides the dynamic table model shared by the combine and
//! hourly-sentiment pipelines, plus JSONL/CSV I/O, logging, and progress
//! reporting.

pub mod error;
pub mod logging;
pub mod progress;
pub mod reader;
pub mod sink;
pub mod table;

// Re-exports for convenience
pub use error::LoadError;
pub use logging::{IndicatifLogger, init_logging};
pub use progress::ProgressContext;
pub use reader::read_jsonl;
pub use sink::{write_csv, write_jsonl};
pub use table::{Cell, Table};
